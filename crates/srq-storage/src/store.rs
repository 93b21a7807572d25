use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::memory::MemoryStore;
use crate::objects;

/// An object store handle. Cheap to clone.
#[derive(Clone)]
pub enum Store {
    S3 { client: Client, bucket: String },
    Memory(MemoryStore),
}

impl Store {
    pub fn s3(client: Client, bucket: impl Into<String>) -> Self {
        Store::S3 {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn memory() -> Self {
        Store::Memory(MemoryStore::new())
    }

    pub async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        match self {
            Store::S3 { client, bucket } => objects::get_object(client, bucket, key).await,
            Store::Memory(mem) => mem.get(key).await,
        }
    }

    pub async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        match self {
            Store::S3 { client, bucket } => {
                objects::put_object(client, bucket, key, body, content_type).await
            }
            Store::Memory(mem) => mem.put(key, body).await,
        }
    }

    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Store::S3 { client, bucket } => objects::delete_object(client, bucket, key).await,
            Store::Memory(mem) => mem.delete(key).await,
        }
    }

    pub async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        match self {
            Store::S3 { client, bucket } => objects::list_objects(client, bucket, prefix).await,
            Store::Memory(mem) => mem.list(prefix).await,
        }
    }

    /// Whether an object exists at `key`.
    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self.get(key).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
