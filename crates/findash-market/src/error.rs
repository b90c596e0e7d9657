//! Error types for market-data collaborators

use thiserror::Error;

/// Failures surfaced by stock history and headline sources
///
/// None of these are retried; callers decide what to show the user.
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// The provider has no data for the symbol
    #[error("Symbol not found: {symbol} ({reason})")]
    NotFound {
        symbol: String,
        reason: String,
    },

    /// The provider could not be reached
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The provider answered with something we cannot use
    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse {
        provider: String,
        reason: String,
    },

    /// Empty or malformed symbol supplied by the caller
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// Unrecognized history period code
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl MarketDataError {
    /// Short tag naming the failure class
    pub fn kind(&self) -> &'static str {
        match self {
            MarketDataError::NotFound { .. } => "NotFound",
            MarketDataError::NetworkError(_) => "NetworkError",
            MarketDataError::InvalidResponse { .. } => "InvalidResponse",
            MarketDataError::InvalidSymbol(_) => "InvalidSymbol",
            MarketDataError::InvalidPeriod(_) => "InvalidPeriod",
            MarketDataError::ConfigError(_) => "ConfigError",
        }
    }

    pub(crate) fn invalid_response(provider: &str, reason: impl Into<String>) -> Self {
        MarketDataError::InvalidResponse {
            provider: provider.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for MarketDataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MarketDataError::invalid_response("http", err.to_string())
        } else {
            MarketDataError::NetworkError(err.to_string())
        }
    }
}

/// Result type alias for market-data operations
pub type Result<T> = std::result::Result<T, MarketDataError>;
