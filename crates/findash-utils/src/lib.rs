//! Shared utilities for findash
//!
//! Logging setup and configuration helpers used by the findash binaries.

pub mod config;
pub mod logging;

pub use config::{AppConfig, load_dotenv};
pub use logging::{init_json_tracing, init_tracing, init_tracing_with_default};
