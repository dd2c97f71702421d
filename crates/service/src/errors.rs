use thiserror::Error;

/// Failures a store operation can surface. Absence of a record is never an
/// error; it is reported as `None`/`false` by the operation itself.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("malformed contacts file: {0}")]
    Malformed(String),
}
