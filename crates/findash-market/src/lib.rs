//! Market-data collaborators for findash
//!
//! This crate fetches the data the dashboard shows next to forecast reports:
//!
//! - Daily price history from Yahoo Finance (no key) or Alpha Vantage
//! - The latest market headlines, scraped from a news page or read from Finnhub
//!
//! Every provider sits behind a trait ([`StockHistorySource`],
//! [`HeadlineSource`]) and reports failures as a tagged [`MarketDataError`].
//! Requests are made once; nothing is retried or cached.
//!
//! # Example
//!
//! ```rust,ignore
//! use findash_market::{DashboardConfig, HistoryPeriod, MarketDashboard};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DashboardConfig::builder().with_env_keys().build()?;
//!     let dashboard = MarketDashboard::from_config(&config)?;
//!
//!     let overview = dashboard.stock_overview("AAPL", HistoryPeriod::OneMonth).await?;
//!     println!("{} last close {:.2}", overview.symbol, overview.summary.last_close);
//!
//!     for headline in dashboard.latest_headlines().await? {
//!         println!("- {headline}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod source;

pub use config::{DashboardConfig, DataProvider, NewsProvider};
pub use dashboard::{MarketDashboard, StockOverview};
pub use error::{MarketDataError, Result};
pub use models::{Fundamentals, HistoryPeriod, PriceBar, StockSummary};
pub use source::{HeadlineSource, StockHistorySource};
