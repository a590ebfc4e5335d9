//! Bundled draft dataset location.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("data/draft_data.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Path to the JSON document holding bio, logs, rankings and reports.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
