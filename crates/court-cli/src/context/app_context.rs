use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use court_config::CourtConfig;
use court_core::dataset::Dataset;
use court_db::CourtDb;

/// Shared application state. The database and dataset are opened on demand
/// so commands that need neither stay cheap.
pub struct AppContext {
    pub config: CourtConfig,
}

impl AppContext {
    #[must_use]
    pub const fn new(config: CourtConfig) -> Self {
        Self { config }
    }

    /// Open the notes/team database, creating its directory if needed.
    pub async fn open_db(&self) -> anyhow::Result<CourtDb> {
        let db_path = &self.config.database.path;
        if !self.config.database.is_in_memory() {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        CourtDb::open_local(db_path)
            .await
            .with_context(|| format!("failed to open database at {db_path}"))
    }

    /// Load the bundled draft dataset.
    pub fn load_dataset(&self) -> anyhow::Result<Dataset> {
        let path = Path::new(&self.config.dataset.path);
        Dataset::load(path).context("failed to load draft dataset")
    }

    /// Local calendar date, used for ages.
    #[must_use]
    pub fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
