//! Yahoo Finance price history client

use crate::config::DashboardConfig;
use crate::error::{MarketDataError, Result};
use crate::models::{Fundamentals, HistoryPeriod, PriceBar};
use crate::source::StockHistorySource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

const PROVIDER: &str = "Yahoo Finance";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Yahoo Finance API client
#[derive(Debug, Clone)]
pub struct YahooFinanceClient {
    timeout: Duration,
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Create from dashboard configuration
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_timeout(config.request_timeout)
    }

    fn connector(&self) -> Result<yahoo::YahooConnector> {
        yahoo::YahooConnector::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| MarketDataError::ConfigError(format!("{PROVIDER} client: {e}")))
    }

    /// Get daily bars between two instants
    pub async fn get_history_between(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PriceBar>> {
        let provider = self.connector()?;

        // Convert chrono DateTime to time OffsetDateTime
        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| MarketDataError::InvalidPeriod(format!("invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| MarketDataError::InvalidPeriod(format!("invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| classify_error(symbol, &e))?;

        let quotes = response.quotes().map_err(|e| classify_error(symbol, &e))?;

        let bars: Vec<PriceBar> = quotes
            .iter()
            .filter_map(|q| {
                let date = DateTime::from_timestamp(q.timestamp, 0)?.date_naive();
                Some(PriceBar {
                    date,
                    open: q.open,
                    high: q.high,
                    low: q.low,
                    close: q.close,
                    volume: q.volume,
                })
            })
            .collect();

        if bars.is_empty() {
            return Err(MarketDataError::NotFound {
                symbol: symbol.to_string(),
                reason: "no data found, check the ticker symbol".to_string(),
            });
        }

        debug!(symbol, bars = bars.len(), "Fetched Yahoo Finance history");
        Ok(bars)
    }

    /// Get market cap, trailing P/E, 52-week range and dividend yield
    pub async fn get_fundamentals(&self, symbol: &str) -> Result<Fundamentals> {
        let mut provider = self.connector()?;

        let info = provider
            .get_ticker_info(symbol)
            .await
            .map_err(|e| classify_error(symbol, &e))?;

        let detail = info
            .quote_summary
            .and_then(|summary| summary.result)
            .and_then(|results| results.into_iter().next())
            .and_then(|data| data.summary_detail)
            .ok_or_else(|| MarketDataError::NotFound {
                symbol: symbol.to_string(),
                reason: "no summary detail in quote summary".to_string(),
            })?;

        Ok(Fundamentals {
            market_cap: detail.market_cap,
            trailing_pe: detail.trailing_pe,
            fifty_two_week_high: detail.fifty_two_week_high,
            fifty_two_week_low: detail.fifty_two_week_low,
            dividend_yield: detail.dividend_yield,
        })
    }
}

fn is_not_found_reason(reason: &str) -> bool {
    reason.contains("404") || reason.to_ascii_lowercase().contains("not found")
}

/// Map a connector error onto the dashboard's error tags
fn classify_error(symbol: &str, err: &yahoo::YahooError) -> MarketDataError {
    use yahoo::YahooError;

    match err {
        YahooError::ConnectionFailed(_) | YahooError::NoResponse => {
            warn!(symbol, error = %err, "Yahoo Finance unreachable");
            MarketDataError::NetworkError(format!("{PROVIDER}: {err}"))
        },
        YahooError::NoResult | YahooError::NoQuotes | YahooError::ApiError(_) => {
            MarketDataError::NotFound {
                symbol: symbol.to_string(),
                reason: err.to_string(),
            }
        },
        YahooError::FetchFailed(reason) if is_not_found_reason(reason) => {
            MarketDataError::NotFound {
                symbol: symbol.to_string(),
                reason: err.to_string(),
            }
        },
        _ => MarketDataError::invalid_response(PROVIDER, err.to_string()),
    }
}

#[async_trait]
impl StockHistorySource for YahooFinanceClient {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_history(&self, symbol: &str, period: HistoryPeriod) -> Result<Vec<PriceBar>> {
        let end = Utc::now();
        let start = period.start_from(end);
        self.get_history_between(symbol, start, end).await
    }

    async fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals> {
        self.get_fundamentals(symbol).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yahoo::YahooError;

    fn kind_of(err: &YahooError) -> &'static str {
        classify_error("AAPL", err).kind()
    }

    #[test]
    fn test_classify_missing_data_as_not_found() {
        assert_eq!(kind_of(&YahooError::NoResult), "NotFound");
        assert_eq!(kind_of(&YahooError::NoQuotes), "NotFound");
        assert_eq!(
            kind_of(&YahooError::FetchFailed("Ticker ZZZZ not found".to_string())),
            "NotFound"
        );
        assert_eq!(
            kind_of(&YahooError::FetchFailed("HTTP error: 404 Not Found".to_string())),
            "NotFound"
        );
    }

    #[test]
    fn test_classify_no_response_as_network_error() {
        let err = classify_error("AAPL", &YahooError::NoResponse);
        assert!(matches!(err, MarketDataError::NetworkError(_)));
    }

    #[test]
    fn test_classify_provider_failures_as_invalid_response() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cases = [
            YahooError::FetchFailed("HTTP error: 500 Internal Server Error".to_string()),
            YahooError::TooManyRequests("GET chart".to_string()),
            YahooError::Unauthorized,
            YahooError::InvalidCrumb,
            YahooError::NoCookies,
            YahooError::DataInconsistency,
            YahooError::DeserializeFailedDebug("<html>".to_string()),
            YahooError::DeserializeFailed(bad_json),
        ];

        for err in &cases {
            assert_eq!(kind_of(err), "InvalidResponse", "{err}");
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // The deadline expires before any response can arrive
        let client = YahooFinanceClient::with_timeout(Duration::from_nanos(1));
        let err = client
            .fetch_history("AAPL", HistoryPeriod::FiveDays)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "NetworkError");
    }

    #[test]
    fn test_timeout_from_config() {
        let config = DashboardConfig::builder()
            .request_timeout(Duration::from_secs(7))
            .build()
            .unwrap();
        let client = YahooFinanceClient::from_config(&config);
        assert_eq!(client.timeout, Duration::from_secs(7));
        assert_eq!(YahooFinanceClient::new().timeout, DEFAULT_TIMEOUT);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_history() {
        let client = YahooFinanceClient::new();
        let bars = client
            .fetch_history("AAPL", HistoryPeriod::OneMonth)
            .await
            .unwrap();

        assert!(!bars.is_empty());
        assert!(bars.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(bars[0].close > 0.0);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_unknown_symbol() {
        let client = YahooFinanceClient::new();
        let err = client
            .fetch_history("INVALID_SYMBOL_12345", HistoryPeriod::FiveDays)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "NotFound");
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_fundamentals() {
        let fundamentals = YahooFinanceClient::new()
            .fetch_fundamentals("MSFT")
            .await
            .unwrap();
        assert!(fundamentals.market_cap.is_some());
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(YahooFinanceClient::new().provider(), "Yahoo Finance");
    }
}
