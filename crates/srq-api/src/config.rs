use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Secret used when running against the in-memory store with no
/// `SRQ_JWT_SECRET` set. Never accepted for the S3 backend.
const DEV_JWT_SECRET: &str = "srq-dev-secret";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(()),
        }
    }
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub storage: StorageBackend,
    pub bucket: String,
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub seed_on_start: bool,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let storage = match get("SRQ_STORAGE") {
            Some(value) => value.parse::<StorageBackend>().map_err(|()| ConfigError::Invalid {
                var: "SRQ_STORAGE",
                value,
            })?,
            None => StorageBackend::S3,
        };

        let jwt_secret = match (get("SRQ_JWT_SECRET"), storage) {
            (Some(secret), _) => secret,
            (None, StorageBackend::Memory) => DEV_JWT_SECRET.to_string(),
            (None, StorageBackend::S3) => return Err(ConfigError::Missing("SRQ_JWT_SECRET")),
        };

        let seed_on_start = match get("SRQ_SEED_ON_START") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                var: "SRQ_SEED_ON_START",
                value,
            })?,
            None => false,
        };

        Ok(Self {
            storage,
            bucket: get("SRQ_BUCKET").unwrap_or_else(|| "srq".to_string()),
            jwt_secret,
            jwt_issuer: get("SRQ_JWT_ISSUER"),
            seed_on_start,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
