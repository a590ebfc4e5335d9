//! General application configuration.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default page size for records and stats queries.
const fn default_limit() -> u32 {
    50
}

fn default_season_opener() -> String {
    String::from("2025-10-24T00:00:00")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list/query commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Local date-time of the next season opener, `YYYY-MM-DDTHH:MM:SS`.
    #[serde(default = "default_season_opener")]
    pub season_opener: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            season_opener: default_season_opener(),
        }
    }
}

impl GeneralConfig {
    /// Parsed season opener.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the value is not an ISO local date-time.
    pub fn season_opener(&self) -> Result<NaiveDateTime, ConfigError> {
        NaiveDateTime::parse_from_str(&self.season_opener, "%Y-%m-%dT%H:%M:%S").map_err(|e| {
            ConfigError::InvalidValue {
                field: "general.season_opener".into(),
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 50);
        assert!(config.season_opener().is_ok());
    }

    #[test]
    fn rejects_malformed_opener() {
        let config = GeneralConfig {
            season_opener: "next october".into(),
            ..Default::default()
        };
        let err = config.season_opener().unwrap_err();
        assert!(err.to_string().contains("general.season_opener"));
    }
}
