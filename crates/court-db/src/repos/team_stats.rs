//! Team stats listing.

use serde_json::Value as Json;

use crate::CourtDb;
use crate::error::DatabaseError;
use crate::helpers::collect_json;
use crate::query::TeamStatsQuery;

impl CourtDb {
    /// Team stat rows matching `filter`, each row verbatim as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the query fails.
    pub async fn team_stats(&self, filter: &TeamStatsQuery) -> Result<Vec<Json>, DatabaseError> {
        let rows = self.query_built(&filter.build()).await?;
        let stats = collect_json(rows).await?;
        tracing::debug!(count = stats.len(), "team stats fetched");
        Ok(stats)
    }
}
