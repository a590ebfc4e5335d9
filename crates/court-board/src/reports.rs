//! Session-local scouting reports.
//!
//! Reports added during a session are never written back to the dataset. The
//! log is append-only and is passed by reference into profile assembly, where
//! its entries follow the bundled reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use court_core::entities::{ReportId, ScoutReport};

/// A report as typed by a user, before it gets an id and date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub scout_name: String,
    pub report_text: String,
    #[serde(default)]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportLog {
    entries: Vec<ScoutReport>,
    last_id: i64,
}

impl ReportLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report for `player_id`.
    ///
    /// Returns `None` without recording anything when the scout name or report
    /// text is blank. Ids are epoch milliseconds of `now`, bumped when needed so
    /// they stay strictly increasing.
    pub fn add(
        &mut self,
        player_id: i64,
        draft: ReportDraft,
        now: DateTime<Utc>,
    ) -> Option<&ScoutReport> {
        let scout_name = draft.scout_name.trim();
        let report_text = draft.report_text.trim();
        if scout_name.is_empty() || report_text.is_empty() {
            return None;
        }

        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        self.entries.push(ScoutReport {
            report_id: Some(ReportId::Number(id)),
            player_id,
            scout_name: scout_name.to_string(),
            report_text: report_text.to_string(),
            date: Some(now.date_naive().format("%Y-%m-%d").to_string()),
            rating: draft
                .rating
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        });
        tracing::debug!(player_id, report_id = id, "session report added");
        self.entries.last()
    }

    /// Session reports for one player, in the order they were added.
    pub fn for_player(&self, player_id: i64) -> impl Iterator<Item = &ScoutReport> {
        self.entries.iter().filter(move |r| r.player_id == player_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
