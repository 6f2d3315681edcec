//! Connection settings for the seeders.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE: &str = "cremoso";

/// Where the seeders write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// MongoDB connection string.
    pub uri: String,

    /// Target database name.
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Reads `MONGODB_URI` and `MONGODB_DATABASE`, falling back to the local defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            uri: lookup("MONGODB_URI")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.uri),
            database: lookup("MONGODB_DATABASE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.database),
        }
    }
}
