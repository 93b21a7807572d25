use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::level::DistressLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestedActivity {
    pub id: Uuid,
    pub level: DistressLevel,
    pub description: String,
    /// Catalog insertion order, used to keep suggestions stable.
    pub position: u32,
}
