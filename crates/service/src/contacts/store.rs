use std::sync::Arc;

use models::{Contact, ContactInput};

use crate::errors::StoreError;

/// Durable CRUD over contact records.
///
/// Absence is a normal outcome: `get`/`update` return `None` and `delete`
/// returns `false` for an unknown id. Only storage and parse failures
/// surface as errors.
#[async_trait::async_trait]
pub trait ContactStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;
    async fn get(&self, id: u64) -> Result<Option<Contact>, StoreError>;
    async fn create(&self, input: ContactInput) -> Result<Contact, StoreError>;
    async fn update(&self, id: u64, input: ContactInput) -> Result<Option<Contact>, StoreError>;
    async fn delete(&self, id: u64) -> Result<bool, StoreError>;
}

/// Handle shared by request handlers for the process lifetime.
pub type SharedContactStore = Arc<dyn ContactStore>;
