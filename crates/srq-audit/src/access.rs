use srq_core::keys;
use srq_core::models::access::AccessRecord;
use srq_storage::state::{list_json, save_json};
use srq_storage::store::Store;
use uuid::Uuid;

use crate::error::AuditError;

/// Append one access record for `user_id`.
pub async fn record_access(
    store: &Store,
    user_id: &str,
    ip: Option<String>,
) -> Result<AccessRecord, AuditError> {
    let record = AccessRecord {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        accessed_at: jiff::Timestamp::now(),
        ip,
    };
    save_json(store, &keys::access(user_id, record.id), &record).await?;
    Ok(record)
}

/// Access history, newest first. Restricted to one user when `user_id` is set.
pub async fn list_access(
    store: &Store,
    user_id: Option<&str>,
) -> Result<Vec<AccessRecord>, AuditError> {
    let prefix = match user_id {
        Some(id) => keys::user_access_prefix(id),
        None => keys::ACCESS_PREFIX.to_string(),
    };
    let mut records: Vec<AccessRecord> = list_json(store, &prefix).await?;
    records.sort_by(|a, b| b.accessed_at.cmp(&a.accessed_at));
    Ok(records)
}

/// Client address for a request: the first hop of `X-Forwarded-For` when
/// present, otherwise the peer address.
pub fn client_ip(forwarded_for: Option<&str>, peer: Option<String>) -> Option<String> {
    forwarded_for
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or(peer)
}
