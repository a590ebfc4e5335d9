//! Team records: filtered listing and distinct filter values.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::CourtDb;
use crate::error::DatabaseError;
use crate::helpers::{collect_column, collect_json};
use crate::query::TeamRecordQuery;

/// Distinct values offered as record filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilterOptions {
    pub seasons: Vec<Json>,
    pub coaches: Vec<Json>,
    pub playoffs: Vec<Json>,
}

impl CourtDb {
    /// Team records matching `filter`, each row verbatim as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the query fails.
    pub async fn team_records(&self, filter: &TeamRecordQuery) -> Result<Vec<Json>, DatabaseError> {
        let rows = self.query_built(&filter.build()).await?;
        let records = collect_json(rows).await?;
        tracing::debug!(count = records.len(), "team records fetched");
        Ok(records)
    }

    /// Distinct seasons, coaches and playoff results for filter menus.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if any of the lookups fails.
    pub async fn record_filter_options(&self) -> Result<RecordFilterOptions, DatabaseError> {
        let seasons = self
            .query("SELECT DISTINCT season FROM teamrecords ORDER BY season DESC", ())
            .await?;
        let coaches = self
            .query("SELECT DISTINCT coaches FROM teamrecords ORDER BY coaches", ())
            .await?;
        let playoffs = self
            .query(
                "SELECT DISTINCT playoffs FROM teamrecords WHERE playoffs IS NOT NULL ORDER BY playoffs",
                (),
            )
            .await?;

        let options = RecordFilterOptions {
            seasons: collect_column(seasons).await?,
            coaches: collect_column(coaches).await?,
            playoffs: collect_column(playoffs).await?,
        };
        tracing::debug!(
            seasons = options.seasons.len(),
            coaches = options.coaches.len(),
            playoffs = options.playoffs.len(),
            "filter options fetched"
        );
        Ok(options)
    }
}
