//! Alpha Vantage daily time series and company overview client

use crate::config::DashboardConfig;
use crate::error::{MarketDataError, Result};
use crate::models::{Fundamentals, HistoryPeriod, PriceBar};
use crate::source::StockHistorySource;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde_json::Value;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER: &str = "Alpha Vantage";
const DAILY_SERIES_KEY: &str = "Time Series (Daily)";

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Alpha Vantage API client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    rate_limiter: SharedRateLimiter,
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client with API key and rate limit
    ///
    /// # Arguments
    /// * `api_key` - Alpha Vantage API key
    /// * `rate_limit` - Maximum requests per minute (5 on the free tier)
    pub fn new(api_key: impl Into<String>, rate_limit: u32) -> Self {
        Self::with_client(Client::new(), api_key, rate_limit)
    }

    fn with_client(client: Client, api_key: impl Into<String>, rate_limit: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::MIN));

        Self {
            client,
            api_key: api_key.into(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Create from dashboard configuration
    pub fn from_config(config: &DashboardConfig, client: Client) -> Result<Self> {
        let api_key = config.alpha_vantage_api_key.clone().ok_or_else(|| {
            MarketDataError::ConfigError("ALPHA_VANTAGE_API_KEY is not set".to_string())
        })?;

        Ok(Self::with_client(client, api_key, config.alpha_vantage_rate_limit))
    }

    /// Get the compact daily time series (about 100 trading days), oldest first
    pub async fn get_daily(&self, symbol: &str) -> Result<Vec<PriceBar>> {
        // Wait for rate limiter
        self.rate_limiter.until_ready().await;

        let params = [
            ("function", "TIME_SERIES_DAILY"),
            ("symbol", symbol),
            ("outputsize", "compact"),
            ("apikey", self.api_key.as_str()),
        ];

        let response = self.client.get(BASE_URL).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(MarketDataError::invalid_response(
                PROVIDER,
                format!("HTTP error: {}", response.status()),
            ));
        }

        let data: Value = response.json().await?;
        let bars = parse_daily_series(symbol, &data)?;

        debug!(symbol, bars = bars.len(), "Fetched Alpha Vantage daily series");
        Ok(bars)
    }

    /// Get the company overview fundamentals
    pub async fn get_company_overview(&self, symbol: &str) -> Result<Fundamentals> {
        self.rate_limiter.until_ready().await;

        let params = [
            ("function", "OVERVIEW"),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];

        let response = self.client.get(BASE_URL).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(MarketDataError::invalid_response(
                PROVIDER,
                format!("HTTP error: {}", response.status()),
            ));
        }

        let data: Value = response.json().await?;
        parse_overview(symbol, &data)
    }
}

/// Reject error and throttle payloads
fn check_payload(symbol: &str, data: &Value) -> Result<()> {
    if let Some(error) = data.get("Error Message") {
        return Err(MarketDataError::NotFound {
            symbol: symbol.to_string(),
            reason: error.as_str().unwrap_or("unknown symbol").to_string(),
        });
    }

    for throttle_key in ["Note", "Information"] {
        if let Some(note) = data.get(throttle_key) {
            return Err(MarketDataError::invalid_response(
                PROVIDER,
                format!("request throttled: {}", note.as_str().unwrap_or_default()),
            ));
        }
    }

    Ok(())
}

/// Parse a `TIME_SERIES_DAILY` payload into bars ordered oldest first
pub fn parse_daily_series(symbol: &str, data: &Value) -> Result<Vec<PriceBar>> {
    check_payload(symbol, data)?;

    let series = data
        .get(DAILY_SERIES_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| MarketDataError::invalid_response(PROVIDER, "no time series data found"))?;

    let mut bars = Vec::with_capacity(series.len());
    for (day, values) in series {
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| {
            MarketDataError::invalid_response(PROVIDER, format!("bad date {day:?}: {e}"))
        })?;

        bars.push(PriceBar {
            date,
            open: field(values, "1. open", day)?,
            high: field(values, "2. high", day)?,
            low: field(values, "3. low", day)?,
            close: field(values, "4. close", day)?,
            volume: field(values, "5. volume", day)?,
        });
    }

    if bars.is_empty() {
        return Err(MarketDataError::NotFound {
            symbol: symbol.to_string(),
            reason: "empty time series".to_string(),
        });
    }

    bars.sort_by_key(|bar| bar.date);
    Ok(bars)
}

fn field<T: std::str::FromStr>(values: &Value, key: &str, day: &str) -> Result<T> {
    values
        .get(key)
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| {
            MarketDataError::invalid_response(PROVIDER, format!("missing or bad {key:?} on {day}"))
        })
}

/// Parse an `OVERVIEW` payload
///
/// Values Alpha Vantage reports as "None" or "-" come back as `None`.
pub fn parse_overview(symbol: &str, data: &Value) -> Result<Fundamentals> {
    check_payload(symbol, data)?;

    // Unknown symbols get an empty object
    if data.as_object().is_none_or(serde_json::Map::is_empty) {
        return Err(MarketDataError::NotFound {
            symbol: symbol.to_string(),
            reason: "no company overview".to_string(),
        });
    }

    Ok(Fundamentals {
        market_cap: optional_field(data, "MarketCapitalization"),
        trailing_pe: optional_field(data, "TrailingPE").or_else(|| optional_field(data, "PERatio")),
        fifty_two_week_high: optional_field(data, "52WeekHigh"),
        fifty_two_week_low: optional_field(data, "52WeekLow"),
        dividend_yield: optional_field(data, "DividendYield"),
    })
}

fn optional_field<T: std::str::FromStr>(data: &Value, key: &str) -> Option<T> {
    data.get(key).and_then(Value::as_str).and_then(|raw| raw.parse().ok())
}

#[async_trait]
impl StockHistorySource for AlphaVantageClient {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_history(&self, symbol: &str, period: HistoryPeriod) -> Result<Vec<PriceBar>> {
        let mut bars = self.get_daily(symbol).await?;

        if period != HistoryPeriod::Max {
            let start = period.start_from(Utc::now()).date_naive();
            bars.retain(|bar| bar.date >= start);
        }

        if bars.is_empty() {
            return Err(MarketDataError::NotFound {
                symbol: symbol.to_string(),
                reason: format!("no bars within {period}"),
            });
        }

        Ok(bars)
    }

    async fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals> {
        self.get_company_overview(symbol).await
    }
}
