use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;

use crate::error::StorageError;

/// In-process object store with the same semantics as the S3 backend:
/// keys are listed in lexicographic order, a missing key is `NotFound`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    objects: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    write_budget: Arc<Mutex<Option<usize>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow only `budget` more puts; later puts fail with
    /// [`StorageError::Unavailable`]. `None` lifts the limit. Reads and
    /// deletes are unaffected.
    pub fn limit_writes(&self, budget: Option<usize>) {
        if let Ok(mut guard) = self.write_budget.lock() {
            *guard = budget;
        }
    }

    fn take_write(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .write_budget
            .lock()
            .map_err(|_| StorageError::Unavailable("write budget lock poisoned".to_string()))?;
        match guard.as_mut() {
            Some(0) => Err(StorageError::Unavailable(format!("write rejected for {key}"))),
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    pub async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        self.take_write(key)?;
        self.objects.write().await.insert(key.to_string(), body);
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects.write().await.remove(key);
        Ok(())
    }

    pub async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        Ok(self
            .objects
            .read()
            .await
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }
}
