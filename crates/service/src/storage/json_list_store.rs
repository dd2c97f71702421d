use std::{io::ErrorKind, marker::PhantomData, path::PathBuf, sync::Arc};

use tokio::{fs, sync::Mutex};

use crate::errors::StoreError;

/// Generic JSON file-backed list store.
///
/// Persists a `Vec<T>` as a pretty-printed JSON array and serializes every
/// operation through one mutex scoped to the whole file. There is no
/// in-memory copy kept between calls: each operation re-reads the document
/// under the lock, so callers always observe the latest persisted state at
/// the cost of full-file I/O per call.
///
/// Saves overwrite the file in full with no temp-file-plus-rename step; a
/// crash mid-write can leave a truncated document. Accepted limitation.
pub struct JsonListStore<T> {
    lock: Mutex<()>,
    file_path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonListStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    /// Initialize the store from a path, creating the parent directory if
    /// missing. The file itself is only created on the first mutation.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::Storage(e.to_string()))?;
            }
        }
        Ok(Arc::new(Self { lock: Mutex::new(()), file_path, _marker: PhantomData }))
    }

    // Caller must hold the lock.
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Malformed(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Storage(e.to_string())),
        }
    }

    // Caller must hold the lock.
    async fn save(&self, items: &[T]) -> Result<(), StoreError> {
        let data =
            serde_json::to_vec_pretty(items).map_err(|e| StoreError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Read a fresh snapshot of all items.
    pub async fn read_all(&self) -> Result<Vec<T>, StoreError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Apply a mutation under the lock. The whole document is reloaded,
    /// handed to `f`, and persisted only when `f` returns `Some`; a `None`
    /// return leaves the file untouched.
    pub async fn mutate<R, F>(&self, f: F) -> Result<Option<R>, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Option<R>,
    {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        match f(&mut items) {
            Some(out) => {
                self.save(&items).await?;
                Ok(Some(out))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_list_store_{}.json", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonListStore::<u64>::new(&tmp).await?;
        assert!(store.read_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn mutations_persist_and_reload() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonListStore::<u64>::new(&tmp).await?;

        store.mutate(|items| { items.push(1); Some(()) }).await?;
        store.mutate(|items| { items.push(2); Some(()) }).await?;
        assert_eq!(store.read_all().await?, vec![1, 2]);

        // a second store on the same path sees the persisted state
        let reloaded = JsonListStore::<u64>::new(&tmp).await?;
        assert_eq!(reloaded.read_all().await?, vec![1, 2]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn none_from_mutation_skips_the_write() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonListStore::<u64>::new(&tmp).await?;
        store.mutate(|items| { items.push(7); Some(()) }).await?;
        let before = tokio::fs::read(&tmp).await?;

        let out = store
            .mutate(|items| {
                items.push(8); // discarded: returning None means nothing is saved
                None::<()>
            })
            .await?;
        assert!(out.is_none());
        let after = tokio::fs::read(&tmp).await?;
        assert_eq!(before, after);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn garbage_on_disk_is_a_malformed_error() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        tokio::fs::write(&tmp, b"not json at all").await?;
        let store = JsonListStore::<u64>::new(&tmp).await?;
        assert!(matches!(store.read_all().await, Err(StoreError::Malformed(_))));
        // mutations reload first, so they fail the same way
        let res = store.mutate(|items| { items.push(1); Some(()) }).await;
        assert!(matches!(res, Err(StoreError::Malformed(_))));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn output_is_human_readable() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonListStore::<u64>::new(&tmp).await?;
        store.mutate(|items| { items.extend([1, 2]); Some(()) }).await?;
        let text = tokio::fs::read_to_string(&tmp).await?;
        // pretty-printed arrays span multiple lines
        assert!(text.contains('\n'));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
