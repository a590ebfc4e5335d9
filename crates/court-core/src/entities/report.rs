use serde::{Deserialize, Serialize};

/// Report identifier. Bundled reports carry opaque string ids; reports added
/// during a session get a numeric id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ReportId {
    Number(i64),
    Text(String),
}

/// A free-text scouting evaluation of one prospect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoutReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<ReportId>,
    pub player_id: i64,
    #[serde(alias = "scout", default)]
    pub scout_name: String,
    #[serde(alias = "report", default)]
    pub report_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::opt_string_or_number"
    )]
    pub rating: Option<String>,
}
