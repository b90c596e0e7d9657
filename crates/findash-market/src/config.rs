//! Configuration for market-data collaborators

use crate::error::{MarketDataError, Result};
use crate::models::HistoryPeriod;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default page scraped for headlines
pub const DEFAULT_NEWS_URL: &str = "https://www.financialnews.com/latest";

/// Source of stock price history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DataProvider {
    /// Yahoo Finance (default, no API key required)
    #[default]
    Yahoo,
    /// Alpha Vantage (requires API key)
    AlphaVantage,
}

/// Source of market headlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NewsProvider {
    /// Scrape headings from a news web page
    #[default]
    Web,
    /// Finnhub general market news (requires API key)
    Finnhub,
}

/// Configuration handed to collaborator constructors at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Provider used for price history
    pub history_provider: DataProvider,

    /// Provider used for headlines
    pub news_provider: NewsProvider,

    /// Page scraped by the web headline source
    pub news_url: String,

    /// CSS selector matching headline elements on `news_url`
    pub headline_selector: String,

    /// Maximum number of headlines returned
    pub max_headlines: usize,

    /// Period used when the caller does not pick one
    pub default_period: HistoryPeriod,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Alpha Vantage requests per minute (free tier: 5)
    pub alpha_vantage_rate_limit: u32,

    /// Finnhub requests per minute (free tier: 60)
    pub finnhub_rate_limit: u32,

    /// Alpha Vantage API key (optional)
    pub alpha_vantage_api_key: Option<String>,

    /// Finnhub API key (optional)
    pub finnhub_api_key: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            history_provider: DataProvider::Yahoo,
            news_provider: NewsProvider::Web,
            news_url: DEFAULT_NEWS_URL.to_string(),
            headline_selector: "h2".to_string(),
            max_headlines: 5,
            default_period: HistoryPeriod::OneMonth,
            request_timeout: Duration::from_secs(30),
            alpha_vantage_rate_limit: 5,
            finnhub_rate_limit: 60,
            alpha_vantage_api_key: None,
            finnhub_api_key: None,
        }
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl DashboardConfig {
    /// Create a new configuration builder
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Fill API keys and the news URL from the environment
    ///
    /// Reads `ALPHA_VANTAGE_API_KEY`, `FINNHUB_API_KEY` and `FINDASH_NEWS_URL`.
    pub fn with_env_keys(mut self) -> Self {
        if let Some(key) = env_value("ALPHA_VANTAGE_API_KEY") {
            self.alpha_vantage_api_key = Some(key);
        }
        if let Some(key) = env_value("FINNHUB_API_KEY") {
            self.finnhub_api_key = Some(key);
        }
        if let Some(url) = env_value("FINDASH_NEWS_URL") {
            self.news_url = url;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.history_provider == DataProvider::AlphaVantage
            && self.alpha_vantage_api_key.is_none()
        {
            return Err(MarketDataError::ConfigError(
                "Alpha Vantage API key required when using AlphaVantage provider".to_string(),
            ));
        }

        if self.news_provider == NewsProvider::Finnhub && self.finnhub_api_key.is_none() {
            return Err(MarketDataError::ConfigError(
                "Finnhub API key required when using Finnhub news provider".to_string(),
            ));
        }

        if self.news_provider == NewsProvider::Web && !self.news_url.starts_with("http") {
            return Err(MarketDataError::ConfigError(format!(
                "news_url must be an http(s) URL, got {:?}",
                self.news_url
            )));
        }

        if self.max_headlines == 0 {
            return Err(MarketDataError::ConfigError(
                "max_headlines must be greater than 0".to_string(),
            ));
        }

        if self.alpha_vantage_rate_limit == 0 || self.finnhub_rate_limit == 0 {
            return Err(MarketDataError::ConfigError(
                "rate limits must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for DashboardConfig
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    history_provider: Option<DataProvider>,
    news_provider: Option<NewsProvider>,
    news_url: Option<String>,
    headline_selector: Option<String>,
    max_headlines: Option<usize>,
    default_period: Option<HistoryPeriod>,
    request_timeout: Option<Duration>,
    alpha_vantage_rate_limit: Option<u32>,
    finnhub_rate_limit: Option<u32>,
    alpha_vantage_api_key: Option<String>,
    finnhub_api_key: Option<String>,
}

impl DashboardConfigBuilder {
    pub fn history_provider(mut self, provider: DataProvider) -> Self {
        self.history_provider = Some(provider);
        self
    }

    pub fn news_provider(mut self, provider: NewsProvider) -> Self {
        self.news_provider = Some(provider);
        self
    }

    pub fn news_url(mut self, url: impl Into<String>) -> Self {
        self.news_url = Some(url.into());
        self
    }

    pub fn headline_selector(mut self, selector: impl Into<String>) -> Self {
        self.headline_selector = Some(selector.into());
        self
    }

    pub fn max_headlines(mut self, max: usize) -> Self {
        self.max_headlines = Some(max);
        self
    }

    pub fn default_period(mut self, period: HistoryPeriod) -> Self {
        self.default_period = Some(period);
        self
    }

    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    pub fn alpha_vantage_rate_limit(mut self, per_minute: u32) -> Self {
        self.alpha_vantage_rate_limit = Some(per_minute);
        self
    }

    pub fn finnhub_rate_limit(mut self, per_minute: u32) -> Self {
        self.finnhub_rate_limit = Some(per_minute);
        self
    }

    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    pub fn finnhub_api_key(mut self, key: impl Into<String>) -> Self {
        self.finnhub_api_key = Some(key.into());
        self
    }

    /// Load API keys and news URL from environment, keeping explicit values
    pub fn with_env_keys(mut self) -> Self {
        if self.alpha_vantage_api_key.is_none() {
            self.alpha_vantage_api_key = env_value("ALPHA_VANTAGE_API_KEY");
        }
        if self.finnhub_api_key.is_none() {
            self.finnhub_api_key = env_value("FINNHUB_API_KEY");
        }
        if self.news_url.is_none() {
            self.news_url = env_value("FINDASH_NEWS_URL");
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DashboardConfig> {
        let defaults = DashboardConfig::default();

        let config = DashboardConfig {
            history_provider: self.history_provider.unwrap_or(defaults.history_provider),
            news_provider: self.news_provider.unwrap_or(defaults.news_provider),
            news_url: self.news_url.unwrap_or(defaults.news_url),
            headline_selector: self.headline_selector.unwrap_or(defaults.headline_selector),
            max_headlines: self.max_headlines.unwrap_or(defaults.max_headlines),
            default_period: self.default_period.unwrap_or(defaults.default_period),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            alpha_vantage_rate_limit: self
                .alpha_vantage_rate_limit
                .unwrap_or(defaults.alpha_vantage_rate_limit),
            finnhub_rate_limit: self.finnhub_rate_limit.unwrap_or(defaults.finnhub_rate_limit),
            alpha_vantage_api_key: self.alpha_vantage_api_key,
            finnhub_api_key: self.finnhub_api_key,
        };

        config.validate()?;
        Ok(config)
    }
}
