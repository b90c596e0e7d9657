//! Forecast report generation
//!
//! This crate is the pure core of findash. It turns a [`ForecastRequest`]
//! (industry, metrics, market condition, investment goal, time frame) into a
//! [`ForecastReport`] in four steps:
//!
//! 1. [`analyze_industry`] looks up a fixed insight for the industry
//! 2. [`analyze_metrics`] looks up a fixed summary per selected metric
//! 3. [`generate_forecast`] draws a synthetic growth rate and risk level
//! 4. [`render_report`] assembles the Markdown document
//!
//! Nothing here performs I/O or returns errors. Unknown options degrade to
//! fallback sentences.
//!
//! # Example
//!
//! ```rust
//! use findash_forecast::{ForecastRequest, Industry, InvestmentGoal, Metric, ReportGenerator, TimeFrame};
//!
//! let request = ForecastRequest::new(
//!     Industry::Technology,
//!     InvestmentGoal::ShortTermGains,
//!     TimeFrame::Quarterly,
//! )
//! .with_metrics([Metric::RevenueGrowth, Metric::ProfitMargins])
//! .with_market_condition("High inflation");
//!
//! let report = ReportGenerator::new().generate_report(&request);
//! println!("{}", report.document);
//! ```

pub mod analysis;
pub mod catalog;
pub mod forecast;
pub mod prompts;
pub mod report;

pub use analysis::{MetricAnalysis, analyze_industry, analyze_metrics};
pub use catalog::{Industry, InvestmentGoal, Metric, TimeFrame};
pub use forecast::{ForecastRequest, ForecastResult, RiskLevel, generate_forecast};
pub use prompts::{REFINED_PROMPTS, RefinedPrompt};
pub use report::{ForecastReport, ReportGenerator, render_report};

/// Run the whole pipeline with a fresh OS-seeded generator
pub fn generate_forecast_report(request: &ForecastRequest) -> ForecastReport {
    ReportGenerator::new().generate_report(request)
}
