//! # court-db
//!
//! libSQL persistence for the courtside API: scouting notes (typed CRUD),
//! franchise team records and team stats (filtered, returned verbatim).
//!
//! Uses the `libsql` crate (C `SQLite` fork) against a local file or
//! `:memory:`. Placeholders are positional `?N`.

pub mod error;
pub mod helpers;
mod migrations;
pub mod query;
pub mod repos;

use error::DatabaseError;
use libsql::{Builder, params::IntoParams};

/// Central database handle for courtside state.
pub struct CourtDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CourtDb {
    /// Open a local database at the given path. Runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let court_db = Self { db, conn };
        court_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(court_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run a query, logging the statement.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the statement fails.
    pub async fn query(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<libsql::Rows, DatabaseError> {
        tracing::debug!(sql, "executing query");
        Ok(self.conn.query(sql, params).await?)
    }

    /// Run a statement that returns no rows, yielding the affected row count.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the statement fails.
    pub async fn execute(&self, sql: &str, params: impl IntoParams) -> Result<u64, DatabaseError> {
        tracing::debug!(sql, "executing statement");
        Ok(self.conn.execute(sql, params).await?)
    }

    /// Run a built filter query with its positional parameters.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the statement fails.
    pub async fn query_built(
        &self,
        built: &query::BuiltQuery,
    ) -> Result<libsql::Rows, DatabaseError> {
        tracing::debug!(sql = %built.sql, params = ?built.params, "executing filter query");
        Ok(self
            .conn
            .query(&built.sql, libsql::params_from_iter(built.params.clone()))
            .await?)
    }
}
