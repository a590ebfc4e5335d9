use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scout-assigned big-board ranks for one prospect.
///
/// The source row is `{"playerId": 1, "ESPN Rank": 3, "Sam Vecenie Rank": null, ...}`:
/// one column per scout, any of which may be null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoutRanking {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(flatten)]
    pub scouts: BTreeMap<String, Value>,
}

/// A single numeric rank extracted from a `ScoutRanking` row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoutRank {
    /// Source column name, e.g. `"ESPN Rank"`.
    pub scout: String,
    pub rank: f64,
}

impl ScoutRank {
    /// Scout label with the trailing ` Rank` removed.
    #[must_use]
    pub fn label(&self) -> &str {
        self.scout.strip_suffix(" Rank").unwrap_or(&self.scout)
    }
}

impl ScoutRanking {
    /// Every non-null numeric value in a column whose name contains `Rank`.
    #[must_use]
    pub fn ranks(&self) -> Vec<ScoutRank> {
        self.scouts
            .iter()
            .filter(|(key, _)| key.contains("Rank"))
            .filter_map(|(key, value)| {
                value.as_f64().map(|rank| ScoutRank {
                    scout: key.clone(),
                    rank,
                })
            })
            .collect()
    }
}
