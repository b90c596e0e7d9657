//! Finnhub market news client

use crate::config::DashboardConfig;
use crate::error::{MarketDataError, Result};
use crate::source::HeadlineSource;
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

const BASE_URL: &str = "https://finnhub.io/api/v1";
const PROVIDER: &str = "Finnhub";

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Finnhub news article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinnhubNewsArticle {
    /// Article category
    #[serde(default)]
    pub category: String,
    /// Publish time (UNIX timestamp)
    #[serde(default)]
    pub datetime: i64,
    /// News headline
    pub headline: String,
    /// News source
    #[serde(default)]
    pub source: String,
    /// Article URL
    #[serde(default)]
    pub url: String,
}

/// Finnhub client for news API
pub struct FinnhubClient {
    client: Client,
    api_key: String,
    limit: usize,
    rate_limiter: SharedRateLimiter,
}

impl FinnhubClient {
    /// Create a new Finnhub client with rate limiting
    ///
    /// # Arguments
    /// * `api_key` - Finnhub API key
    /// * `rate_limit` - Requests per minute (free tier: 60)
    /// * `limit` - Maximum headlines returned by [`HeadlineSource::fetch_headlines`]
    pub fn new(client: Client, api_key: impl Into<String>, rate_limit: u32, limit: usize) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::MIN));

        Self {
            client,
            api_key: api_key.into(),
            limit,
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Create from dashboard configuration
    pub fn from_config(config: &DashboardConfig, client: Client) -> Result<Self> {
        let api_key = config
            .finnhub_api_key
            .clone()
            .ok_or_else(|| MarketDataError::ConfigError("FINNHUB_API_KEY is not set".to_string()))?;

        Ok(Self::new(
            client,
            api_key,
            config.finnhub_rate_limit,
            config.max_headlines,
        ))
    }

    /// Get general market news
    ///
    /// # Arguments
    /// * `category` - News category (general, forex, crypto, merger)
    pub async fn get_market_news(&self, category: &str) -> Result<Vec<FinnhubNewsArticle>> {
        self.rate_limiter.until_ready().await;

        let response = self
            .client
            .get(format!("{BASE_URL}/news"))
            .query(&[("category", category), ("token", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::invalid_response(
                PROVIDER,
                format!("API error {status}: {body}"),
            ));
        }

        response
            .json::<Vec<FinnhubNewsArticle>>()
            .await
            .map_err(|e| MarketDataError::invalid_response(PROVIDER, format!("failed to parse response: {e}")))
    }
}

/// Non-empty headlines from `articles`, at most `limit`
pub fn headlines_from_articles(articles: &[FinnhubNewsArticle], limit: usize) -> Vec<String> {
    articles
        .iter()
        .map(|article| article.headline.trim())
        .filter(|headline| !headline.is_empty())
        .take(limit)
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl HeadlineSource for FinnhubClient {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_headlines(&self) -> Result<Vec<String>> {
        let articles = self.get_market_news("general").await?;
        let headlines = headlines_from_articles(&articles, self.limit);
        debug!(count = headlines.len(), "Fetched Finnhub headlines");
        Ok(headlines)
    }
}
