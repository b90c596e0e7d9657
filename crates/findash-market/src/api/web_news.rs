//! Headline scraping from a news web page

use crate::config::DashboardConfig;
use crate::error::{MarketDataError, Result};
use crate::source::HeadlineSource;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

const PROVIDER: &str = "web";

/// Reads headlines from the heading elements of a news page
#[derive(Debug, Clone)]
pub struct WebHeadlineSource {
    client: Client,
    url: String,
    selector: String,
    limit: usize,
}

impl WebHeadlineSource {
    /// Create a source for `url`, matching headlines with the CSS `selector`
    pub fn new(
        client: Client,
        url: impl Into<String>,
        selector: impl Into<String>,
        limit: usize,
    ) -> Result<Self> {
        let selector = selector.into();
        parse_selector(&selector)?;

        Ok(Self {
            client,
            url: url.into(),
            selector,
            limit,
        })
    }

    /// Create from dashboard configuration
    pub fn from_config(config: &DashboardConfig, client: Client) -> Result<Self> {
        Self::new(
            client,
            config.news_url.clone(),
            config.headline_selector.clone(),
            config.max_headlines,
        )
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| {
        MarketDataError::ConfigError(format!("invalid headline selector {selector:?}: {e}"))
    })
}

/// Extract up to `limit` headline texts from an HTML document
///
/// Inner whitespace is collapsed and elements without text are skipped.
pub fn extract_headlines(html: &str, selector: &str, limit: usize) -> Result<Vec<String>> {
    let selector = parse_selector(selector)?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .map(|element| {
            element
                .text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .take(limit)
        .collect())
}

#[async_trait]
impl HeadlineSource for WebHeadlineSource {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_headlines(&self) -> Result<Vec<String>> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(MarketDataError::invalid_response(
                &self.url,
                format!("HTTP error: {}", response.status()),
            ));
        }

        let body = response.text().await?;
        let headlines = extract_headlines(&body, &self.selector, self.limit)?;

        debug!(url = %self.url, count = headlines.len(), "Scraped headlines");
        Ok(headlines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <h1>Market News</h1>
            <h2>Stocks rally as inflation cools</h2>
            <h2>
                Fed holds   rates <em>steady</em>
            </h2>
            <h2>   </h2>
            <h2>Oil slips on supply outlook</h2>
            <h2>Tech earnings beat estimates</h2>
            <h2>Dollar edges higher</h2>
            <h2>Bond yields fall</h2>
        </body></html>
    "#;

    #[test]
    fn test_extract_headlines_limit_and_cleanup() {
        let headlines = extract_headlines(PAGE, "h2", 5).unwrap();
        assert_eq!(
            headlines,
            vec![
                "Stocks rally as inflation cools",
                "Fed holds rates steady",
                "Oil slips on supply outlook",
                "Tech earnings beat estimates",
                "Dollar edges higher",
            ]
        );
    }

    #[test]
    fn test_extract_headlines_empty_page() {
        let headlines = extract_headlines("<html><body><p>nothing</p></body></html>", "h2", 5).unwrap();
        assert!(headlines.is_empty());
    }

    #[test]
    fn test_custom_selector() {
        let html = r#"<div><a class="headline">One</a><a>Two</a></div>"#;
        let headlines = extract_headlines(html, "a.headline", 5).unwrap();
        assert_eq!(headlines, vec!["One"]);
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let err = WebHeadlineSource::new(Client::new(), "https://example.com", "h2[", 5).unwrap_err();
        assert_eq!(err.kind(), "ConfigError");
    }
}
