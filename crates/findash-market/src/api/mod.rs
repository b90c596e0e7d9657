//! API clients for stock data and news providers

pub mod alpha_vantage;
pub mod finnhub;
pub mod web_news;
pub mod yahoo;

pub use alpha_vantage::AlphaVantageClient;
pub use finnhub::{FinnhubClient, FinnhubNewsArticle};
pub use web_news::WebHeadlineSource;
pub use yahoo::YahooFinanceClient;
