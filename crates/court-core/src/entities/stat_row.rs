use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw statistical row as delivered by the source feeds.
///
/// Column names differ between feeds (`fgm` vs `FG`), so the row is kept as a
/// field map and read through [`crate::fields`] rather than a fixed struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatRow {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

/// Per-season totals for one player.
pub type SeasonLog = StatRow;

/// Single-game line for one player.
pub type GameLog = StatRow;

impl StatRow {
    /// Field value, treating JSON null as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    /// Field as a number. Numeric strings (`"12"`) are accepted.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        value_as_f64(self.get(key)?)
    }

    /// Field rendered as text. Numbers are formatted without quotes.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        value_as_text(self.get(key)?)
    }
}

pub(crate) fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
