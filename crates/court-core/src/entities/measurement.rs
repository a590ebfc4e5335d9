use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Combine measurements for a prospect. Columns vary by event, so the row is
/// kept as an ordered field map.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}
