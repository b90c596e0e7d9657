//! Collaborator traits implemented by the provider clients

use crate::error::Result;
use crate::models::{Fundamentals, HistoryPeriod, PriceBar};
use async_trait::async_trait;

/// Anything that can return daily price history for a symbol
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockHistorySource: Send + Sync {
    /// Provider name used in logs and error messages
    fn provider(&self) -> &'static str;

    /// Fetch bars for `symbol`, oldest first
    ///
    /// An empty history is reported as [`MarketDataError::NotFound`](crate::MarketDataError::NotFound).
    async fn fetch_history(&self, symbol: &str, period: HistoryPeriod) -> Result<Vec<PriceBar>>;

    /// Fetch the fundamentals snapshot for `symbol`
    async fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals>;
}

/// Anything that can return the latest market headlines
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    fn provider(&self) -> &'static str;

    /// Fetch up to the configured number of headlines; may be empty
    async fn fetch_headlines(&self) -> Result<Vec<String>>;
}
