use std::sync::Arc;

use srq_storage::store::Store;

use crate::config::{ApiConfig, StorageBackend};

/// Token verification settings.
#[derive(Debug)]
pub struct AuthSettings {
    pub secret: Vec<u8>,
    pub issuer: Option<String>,
}

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    pub fn new(store: Store, config: &ApiConfig) -> Self {
        Self {
            store,
            auth: Arc::new(AuthSettings {
                secret: config.jwt_secret.as_bytes().to_vec(),
                issuer: config.jwt_issuer.clone(),
            }),
        }
    }
}

/// Open the store selected by `config`.
pub async fn connect_store(config: &ApiConfig) -> Store {
    match config.storage {
        StorageBackend::S3 => {
            let client = srq_storage::client::build_client().await;
            Store::s3(client, config.bucket.clone())
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Store::memory()
        }
    }
}
