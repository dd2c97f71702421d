pub mod store;

pub use store::{ContactStore, SharedContactStore};
