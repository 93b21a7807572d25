use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::Store;

/// Load and deserialize one JSON object.
pub async fn load_json<T: DeserializeOwned>(store: &Store, key: &str) -> Result<T, StorageError> {
    let body = store.get(key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Like [`load_json`], but a missing key is `Ok(None)`.
pub async fn load_json_opt<T: DeserializeOwned>(
    store: &Store,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match load_json(store, key).await {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Serialize and store one JSON object.
pub async fn save_json<T: Serialize>(store: &Store, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;
    store.put(key, body, Some("application/json")).await
}

/// Load every JSON object under `prefix`, in key order.
pub async fn list_json<T: DeserializeOwned>(
    store: &Store,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = store.list(prefix).await?;
    tracing::debug!(prefix, count = keys.len(), "loading objects");

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        values.push(load_json(store, key).await?);
    }
    Ok(values)
}
