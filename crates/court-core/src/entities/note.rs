use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text scouting note written by front-office staff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoutingNote {
    pub id: i64,
    pub player: Option<String>,
    pub height: Option<String>,
    pub wingspan: Option<String>,
    pub age: Option<String>,
    pub college: Option<String>,
    pub position: Option<String>,
    pub intangibles: Option<String>,
    pub development_needs: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a scouting note, as sent by clients on create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteFields {
    #[serde(default, deserialize_with = "crate::de::opt_string_or_number")]
    pub player: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_string_or_number")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_string_or_number")]
    pub wingspan: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_string_or_number")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_string_or_number")]
    pub college: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_string_or_number")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_string_or_number")]
    pub intangibles: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_string_or_number")]
    pub development_needs: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_string_or_number")]
    pub notes: Option<String>,
}
