//! Application-level configuration helpers

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application metadata and logging defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name
    pub app_name: String,
    /// Environment (development, production, ...)
    pub environment: String,
    /// Filter used when `RUST_LOG` is not set
    pub default_log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "findash".to_string(),
            environment: "development".to_string(),
            default_log_filter: "warn,findash=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `FINDASH_ENV` and `FINDASH_LOG`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(environment) = std::env::var("FINDASH_ENV") {
            config.environment = environment;
        }
        if let Ok(filter) = std::env::var("FINDASH_LOG") {
            config.default_log_filter = filter;
        }
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

/// Load variables from a `.env` file in the current directory or its parents
///
/// Returns the file that was loaded. Variables already set in the process
/// environment win over the file.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
