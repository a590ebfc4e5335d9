//! Bulk loading of team tables from JSON rows.
//!
//! Keys are matched against the table's known columns; anything else is
//! ignored so exported sheets with extra columns load cleanly.

use serde_json::Value as Json;

use crate::CourtDb;
use crate::error::DatabaseError;
use crate::helpers::json_to_sql;

/// A team table that can be bulk-loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamTable {
    Records,
    Stats,
}

impl TeamTable {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Records => "teamrecords",
            Self::Stats => "mavsteamstats",
        }
    }

    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Records => &[
                "season", "lg", "team", "w", "l", "wl", "finish", "srs", "pace", "rel_pace",
                "ortg", "rel_ortg", "drtg", "rel_drtg", "playoffs", "coaches", "top_ws",
            ],
            Self::Stats => &[
                "Season", "Age", "G", "MP", "FG", "FGA", "FG_percent", "3P", "3PA",
                "3P_percent", "2P", "2PA", "2P_percent", "FT", "FTA", "FT_percent", "ORB", "DRB",
                "TRB", "AST", "STL", "BLK", "TOV", "PF", "PTS",
            ],
        }
    }
}

impl CourtDb {
    /// Insert JSON objects into a team table in one transaction. Returns the
    /// number of rows inserted.
    ///
    /// Every row is checked before anything is written, so a bad row leaves
    /// the table untouched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` if a row is not a JSON object or has no
    /// known columns, or `DatabaseError::LibSql` if an insert fails.
    pub async fn import_rows(&self, table: TeamTable, rows: &[Json]) -> Result<usize, DatabaseError> {
        let statements = rows
            .iter()
            .enumerate()
            .map(|(index, row)| insert_statement(table, index, row))
            .collect::<Result<Vec<_>, _>>()?;

        let tx = self.conn().transaction().await?;
        for (sql, params) in statements {
            tracing::debug!(sql, params = params.len(), "import insert");
            tx.execute(&sql, libsql::params_from_iter(params)).await?;
        }
        tx.commit().await?;

        tracing::info!(table = table.name(), rows = rows.len(), "imported team rows");
        Ok(rows.len())
    }
}

fn insert_statement(
    table: TeamTable,
    index: usize,
    row: &Json,
) -> Result<(String, Vec<libsql::Value>), DatabaseError> {
    let object = row.as_object().ok_or_else(|| {
        DatabaseError::Query(format!("row {index} for {} is not an object", table.name()))
    })?;

    let present: Vec<&str> = table
        .columns()
        .iter()
        .copied()
        .filter(|column| object.contains_key(*column))
        .collect();
    if present.is_empty() {
        return Err(DatabaseError::Query(format!(
            "row {index} for {} has no known columns",
            table.name()
        )));
    }

    let columns = present
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=present.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let params = present
        .iter()
        .map(|column| object.get(*column).map_or(libsql::Value::Null, json_to_sql))
        .collect();

    Ok((
        format!("INSERT INTO {} ({columns}) VALUES ({placeholders})", table.name()),
        params,
    ))
}
