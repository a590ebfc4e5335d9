//! Relational store configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from(".courtside/courtside.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// libSQL database file, or `:memory:` for a throwaway store.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the database lives only in memory.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_project_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, ".courtside/courtside.db");
        assert!(!config.is_in_memory());
    }
}
