use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One entry of the append-only access history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AccessRecord {
    pub id: Uuid,
    pub user_id: String,
    pub accessed_at: jiff::Timestamp,
    pub ip: Option<String>,
}
