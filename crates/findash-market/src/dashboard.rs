//! Facade over the configured history and headline sources

use crate::api::{AlphaVantageClient, FinnhubClient, WebHeadlineSource, YahooFinanceClient};
use crate::config::{DashboardConfig, DataProvider, NewsProvider};
use crate::error::{MarketDataError, Result};
use crate::models::{Fundamentals, HistoryPeriod, PriceBar, StockSummary};
use crate::source::{HeadlineSource, StockHistorySource};
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Price history for one symbol with its summary and fundamentals
#[derive(Debug, Clone, Serialize)]
pub struct StockOverview {
    pub symbol: String,
    pub period: HistoryPeriod,
    pub provider: &'static str,
    pub bars: Vec<PriceBar>,
    pub summary: StockSummary,
    pub fundamentals: Fundamentals,
}

/// Stock history and headline retrieval for the dashboard
///
/// Each call goes straight to the underlying source: no retry, no caching.
pub struct MarketDashboard {
    history: Arc<dyn StockHistorySource>,
    headlines: Arc<dyn HeadlineSource>,
    max_headlines: usize,
}

impl MarketDashboard {
    pub fn new(
        history: Arc<dyn StockHistorySource>,
        headlines: Arc<dyn HeadlineSource>,
        max_headlines: usize,
    ) -> Self {
        Self {
            history,
            headlines,
            max_headlines,
        }
    }

    /// Build the sources selected in `config`
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("findash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MarketDataError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        let history: Arc<dyn StockHistorySource> = match config.history_provider {
            DataProvider::Yahoo => Arc::new(YahooFinanceClient::from_config(config)),
            DataProvider::AlphaVantage => {
                Arc::new(AlphaVantageClient::from_config(config, client.clone())?)
            },
        };

        let headlines: Arc<dyn HeadlineSource> = match config.news_provider {
            NewsProvider::Web => Arc::new(WebHeadlineSource::from_config(config, client)?),
            NewsProvider::Finnhub => Arc::new(FinnhubClient::from_config(config, client)?),
        };

        info!(
            history = history.provider(),
            news = headlines.provider(),
            "Market dashboard ready"
        );

        Ok(Self::new(history, headlines, config.max_headlines))
    }

    /// Fetch history for `symbol` and summarize it
    ///
    /// The symbol is trimmed and upper-cased before the request. Fundamentals
    /// are fetched once history succeeds; failing that they are left empty.
    pub async fn stock_overview(&self, symbol: &str, period: HistoryPeriod) -> Result<StockOverview> {
        let symbol = normalize_symbol(symbol)?;

        let bars = self
            .history
            .fetch_history(&symbol, period)
            .await
            .inspect_err(|e| warn!(%symbol, kind = e.kind(), error = %e, "History fetch failed"))?;

        let summary = StockSummary::from_bars(&bars).ok_or_else(|| MarketDataError::NotFound {
            symbol: symbol.clone(),
            reason: "no data found, check the ticker symbol".to_string(),
        })?;

        let fundamentals = self
            .history
            .fetch_fundamentals(&symbol)
            .await
            .unwrap_or_else(|e| {
                warn!(%symbol, kind = e.kind(), error = %e, "Fundamentals fetch failed");
                Fundamentals::default()
            });

        Ok(StockOverview {
            symbol,
            period,
            provider: self.history.provider(),
            bars,
            summary,
            fundamentals,
        })
    }

    /// Fetch the latest headlines, capped at the configured maximum
    pub async fn latest_headlines(&self) -> Result<Vec<String>> {
        let mut headlines = self
            .headlines
            .fetch_headlines()
            .await
            .inspect_err(|e| warn!(kind = e.kind(), error = %e, "Headline fetch failed"))?;

        headlines.truncate(self.max_headlines);
        Ok(headlines)
    }
}

fn normalize_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
        return Err(MarketDataError::InvalidSymbol(symbol.to_string()));
    }
    Ok(symbol.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MockHeadlineSource, MockStockHistorySource};
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn bar(day: u32, close: f64) -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000,
        }
    }

    fn dashboard(history: MockStockHistorySource, headlines: MockHeadlineSource) -> MarketDashboard {
        MarketDashboard::new(Arc::new(history), Arc::new(headlines), 5)
    }

    #[tokio::test]
    async fn test_stock_overview_normalizes_symbol() {
        let mut history = MockStockHistorySource::new();
        history
            .expect_fetch_history()
            .with(eq("AAPL"), eq(HistoryPeriod::OneMonth))
            .times(1)
            .returning(|_, _| Ok(vec![bar(1, 100.0), bar(2, 102.0)]));
        history
            .expect_fetch_fundamentals()
            .with(eq("AAPL"))
            .times(1)
            .returning(|_| {
                Ok(Fundamentals {
                    market_cap: Some(3_000_000_000_000),
                    trailing_pe: Some(31.5),
                    ..Default::default()
                })
            });
        history.expect_provider().return_const("mock");

        let overview = dashboard(history, MockHeadlineSource::new())
            .stock_overview("  aapl ", HistoryPeriod::OneMonth)
            .await
            .unwrap();

        assert_eq!(overview.symbol, "AAPL");
        assert_eq!(overview.provider, "mock");
        assert_eq!(overview.summary.bars, 2);
        assert!((overview.summary.change_percent - 2.0).abs() < 1e-9);
        assert_eq!(overview.fundamentals.market_cap, Some(3_000_000_000_000));
        assert_eq!(overview.fundamentals.dividend_yield, None);
    }

    #[tokio::test]
    async fn test_fundamentals_failure_keeps_history() {
        let mut history = MockStockHistorySource::new();
        history
            .expect_fetch_history()
            .returning(|_, _| Ok(vec![bar(1, 50.0), bar(2, 49.0)]));
        history
            .expect_fetch_fundamentals()
            .times(1)
            .returning(|_| Err(MarketDataError::invalid_response("mock", "Invalid Crumb")));
        history.expect_provider().return_const("mock");

        let overview = dashboard(history, MockHeadlineSource::new())
            .stock_overview("IBM", HistoryPeriod::FiveDays)
            .await
            .unwrap();

        assert_eq!(overview.summary.bars, 2);
        assert!(overview.fundamentals.is_empty());
    }

    #[tokio::test]
    async fn test_stock_overview_surfaces_not_found() {
        let mut history = MockStockHistorySource::new();
        history.expect_fetch_history().returning(|symbol, _| {
            Err(MarketDataError::NotFound {
                symbol: symbol.to_string(),
                reason: "unknown".to_string(),
            })
        });

        let err = dashboard(history, MockHeadlineSource::new())
            .stock_overview("ZZZZ", HistoryPeriod::FiveDays)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "NotFound");
    }

    #[tokio::test]
    async fn test_stock_overview_surfaces_network_error() {
        let mut history = MockStockHistorySource::new();
        history
            .expect_fetch_history()
            .returning(|_, _| Err(MarketDataError::NetworkError("connection refused".to_string())));
        history.expect_fetch_fundamentals().never();

        let err = dashboard(history, MockHeadlineSource::new())
            .stock_overview("MSFT", HistoryPeriod::OneYear)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "NetworkError");
    }

    #[tokio::test]
    async fn test_empty_history_is_not_found() {
        let mut history = MockStockHistorySource::new();
        history.expect_fetch_history().returning(|_, _| Ok(Vec::new()));
        history.expect_fetch_fundamentals().never();

        let err = dashboard(history, MockHeadlineSource::new())
            .stock_overview("TSLA", HistoryPeriod::OneMonth)
            .await
            .unwrap_err();

        assert!(matches!(err, MarketDataError::NotFound { symbol, .. } if symbol == "TSLA"));
    }

    #[tokio::test]
    async fn test_blank_symbol_rejected_before_fetch() {
        let mut history = MockStockHistorySource::new();
        history.expect_fetch_history().never();

        let board = dashboard(history, MockHeadlineSource::new());
        let err = board.stock_overview("   ", HistoryPeriod::OneMonth).await.unwrap_err();
        assert_eq!(err.kind(), "InvalidSymbol");

        let err = board.stock_overview("BRK B", HistoryPeriod::OneMonth).await.unwrap_err();
        assert_eq!(err.kind(), "InvalidSymbol");
    }

    #[tokio::test]
    async fn test_latest_headlines_capped() {
        let mut headlines = MockHeadlineSource::new();
        headlines
            .expect_fetch_headlines()
            .returning(|| Ok((1..=8).map(|i| format!("Headline {i}")).collect()));

        let result = dashboard(MockStockHistorySource::new(), headlines)
            .latest_headlines()
            .await
            .unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result[0], "Headline 1");
    }

    #[tokio::test]
    async fn test_latest_headlines_empty_and_error() {
        let mut empty = MockHeadlineSource::new();
        empty.expect_fetch_headlines().returning(|| Ok(Vec::new()));
        let result = dashboard(MockStockHistorySource::new(), empty)
            .latest_headlines()
            .await
            .unwrap();
        assert!(result.is_empty());

        let mut failing = MockHeadlineSource::new();
        failing.expect_fetch_headlines().returning(|| {
            Err(MarketDataError::InvalidResponse {
                provider: "web".to_string(),
                reason: "HTTP error: 503".to_string(),
            })
        });
        let err = dashboard(MockStockHistorySource::new(), failing)
            .latest_headlines()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "InvalidResponse");
    }

    #[test]
    fn test_from_config_default() {
        let board = MarketDashboard::from_config(&DashboardConfig::default()).unwrap();
        assert_eq!(board.history.provider(), "Yahoo Finance");
        assert_eq!(board.headlines.provider(), "web");
    }

    #[test]
    fn test_from_config_invalid() {
        let config = DashboardConfig {
            news_provider: NewsProvider::Finnhub,
            ..Default::default()
        };
        assert!(MarketDashboard::from_config(&config).is_err());
    }
}
