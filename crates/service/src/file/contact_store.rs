use std::sync::Arc;

use models::{Contact, ContactInput};

use crate::contacts::store::ContactStore;
use crate::errors::StoreError;
use crate::storage::json_list_store::JsonListStore;

/// File-backed contact store.
///
/// Keeps the authoritative contact list in a single JSON document. Ids are
/// assigned as `max(existing) + 1` under the store-wide lock, so concurrent
/// creates can never race to the same id.
#[derive(Clone)]
pub struct FileContactStore {
    store: Arc<JsonListStore<Contact>>,
}

impl FileContactStore {
    /// Initialize the store from the given file path. Ensures the parent
    /// directory exists; a missing file is treated as an empty store.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let store = JsonListStore::<Contact>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// List all contacts from a fresh snapshot of the document.
    pub async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        self.store.read_all().await
    }

    /// Get a contact by id; `None` when absent.
    pub async fn get(&self, id: u64) -> Result<Option<Contact>, StoreError> {
        let contacts = self.store.read_all().await?;
        Ok(contacts.into_iter().find(|c| c.id == id))
    }

    /// Create a contact with a freshly assigned id and persist.
    pub async fn create(&self, input: ContactInput) -> Result<Contact, StoreError> {
        let created = self
            .store
            .mutate(|contacts| {
                let id = contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
                let contact = Contact::from_input(id, input);
                contacts.push(contact.clone());
                Some(contact)
            })
            .await?;
        Ok(created.expect("create closure always persists"))
    }

    /// Replace the fields of an existing contact (id unchanged) and persist.
    /// Returns `None` without rewriting the file when the id is absent.
    pub async fn update(&self, id: u64, input: ContactInput) -> Result<Option<Contact>, StoreError> {
        self.store
            .mutate(|contacts| {
                let existing = contacts.iter_mut().find(|c| c.id == id)?;
                existing.apply(input);
                Some(existing.clone())
            })
            .await
    }

    /// Remove a contact and persist; returns whether it existed. The file is
    /// left untouched when the id is absent.
    pub async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let removed = self
            .store
            .mutate(|contacts| {
                let idx = contacts.iter().position(|c| c.id == id)?;
                contacts.remove(idx);
                Some(())
            })
            .await?;
        Ok(removed.is_some())
    }
}

#[async_trait::async_trait]
impl ContactStore for FileContactStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        self.list().await
    }
    async fn get(&self, id: u64) -> Result<Option<Contact>, StoreError> {
        self.get(id).await
    }
    async fn create(&self, input: ContactInput) -> Result<Contact, StoreError> {
        self.create(input).await
    }
    async fn update(&self, id: u64, input: ContactInput) -> Result<Option<Contact>, StoreError> {
        self.update(id, input).await
    }
    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        self.delete(id).await
    }
}
