//! Bundled draft dataset loader.
//!
//! The dataset is a single JSON document with one array per table:
//! `bio`, `seasonLogs`, `scoutRankings`, `scoutReports`, `measurements` and
//! `game_logs`. Every row is keyed by a numeric `playerId`. A missing array is
//! logged and treated as empty; it never fails the load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::{GameLog, Measurement, Prospect, ScoutRanking, ScoutReport, SeasonLog};
use crate::errors::DatasetError;

/// In-memory tables of the draft dataset.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Dataset {
    pub bio: Vec<Prospect>,
    pub season_logs: Vec<SeasonLog>,
    pub scout_rankings: Vec<ScoutRanking>,
    pub scout_reports: Vec<ScoutReport>,
    pub measurements: Vec<Measurement>,
    pub game_logs: Vec<GameLog>,
}

/// Wire shape of the document. `None` marks an array absent from the source.
#[derive(Debug, Deserialize)]
struct RawDataset {
    bio: Option<Vec<Prospect>>,
    #[serde(rename = "seasonLogs")]
    season_logs: Option<Vec<SeasonLog>>,
    #[serde(rename = "scoutRankings")]
    scout_rankings: Option<Vec<ScoutRanking>>,
    #[serde(rename = "scoutReports")]
    scout_reports: Option<Vec<ScoutReport>>,
    measurements: Option<Vec<Measurement>>,
    game_logs: Option<Vec<GameLog>>,
}

fn table_or_empty<T>(table: Option<Vec<T>>, name: &str) -> Vec<T> {
    table.unwrap_or_else(|| {
        tracing::warn!(table = name, "dataset is missing table; using an empty collection");
        Vec::new()
    })
}

impl Dataset {
    /// Parse a dataset document.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Parse` if the text is not a JSON object or a row
    /// lacks its `playerId`.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let dataset = Self {
            bio: table_or_empty(raw.bio, "bio"),
            season_logs: table_or_empty(raw.season_logs, "seasonLogs"),
            scout_rankings: table_or_empty(raw.scout_rankings, "scoutRankings"),
            scout_reports: table_or_empty(raw.scout_reports, "scoutReports"),
            measurements: table_or_empty(raw.measurements, "measurements"),
            game_logs: table_or_empty(raw.game_logs, "game_logs"),
        };
        tracing::debug!(
            prospects = dataset.bio.len(),
            season_logs = dataset.season_logs.len(),
            game_logs = dataset.game_logs.len(),
            reports = dataset.scout_reports.len(),
            "loaded draft dataset"
        );
        Ok(dataset)
    }

    /// Read and parse a dataset file.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Io` if the file cannot be read, or
    /// `DatasetError::Parse` if its contents are malformed.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Bio record for a player.
    #[must_use]
    pub fn prospect(&self, player_id: i64) -> Option<&Prospect> {
        self.bio.iter().find(|p| p.player_id == player_id)
    }

    /// Scout ranking row for a player.
    #[must_use]
    pub fn ranking(&self, player_id: i64) -> Option<&ScoutRanking> {
        self.scout_rankings.iter().find(|r| r.player_id == player_id)
    }

    /// Measurement row for a player.
    #[must_use]
    pub fn measurement(&self, player_id: i64) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.player_id == player_id)
    }

    /// Season logs for a player, in source order.
    pub fn season_logs_for(&self, player_id: i64) -> impl Iterator<Item = &SeasonLog> {
        self.season_logs.iter().filter(move |s| s.player_id == player_id)
    }

    /// Game logs for a player, in source order.
    pub fn game_logs_for(&self, player_id: i64) -> impl Iterator<Item = &GameLog> {
        self.game_logs.iter().filter(move |g| g.player_id == player_id)
    }

    /// Bundled scouting reports for a player, in source order.
    pub fn reports_for(&self, player_id: i64) -> impl Iterator<Item = &ScoutReport> {
        self.scout_reports.iter().filter(move |r| r.player_id == player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;

    #[test]
    fn missing_tables_default_to_empty() {
        let dataset = Dataset::from_json_str(r#"{"bio": [{"playerId": 1, "name": "A"}]}"#).unwrap();
        assert_eq!(dataset.bio.len(), 1);
        assert!(dataset.season_logs.is_empty());
        assert!(dataset.game_logs.is_empty());
        assert!(dataset.scout_rankings.is_empty());
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(Dataset::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn per_player_lookups_filter_by_identifier() {
        let dataset = Dataset::from_json_str(
            r#"{
                "bio": [{"playerId": 1, "name": "A"}, {"playerId": 2, "name": "B"}],
                "seasonLogs": [{"playerId": 1, "Season": "2024"}, {"playerId": 2, "Season": "2024"}],
                "game_logs": [{"playerId": 2, "pts": 10}, {"playerId": 2, "pts": 12}],
                "scoutRankings": [{"playerId": 2, "ESPN Rank": 4}],
                "scoutReports": [],
                "measurements": [{"playerId": 1, "wingspan": 84.5}]
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.prospect(2).map(|p| p.name.as_str()), Some("B"));
        assert!(dataset.prospect(3).is_none());
        assert_eq!(dataset.season_logs_for(1).count(), 1);
        assert_eq!(dataset.game_logs_for(2).count(), 2);
        assert!(dataset.ranking(1).is_none());
        assert!(dataset.measurement(1).is_some());
    }
}
