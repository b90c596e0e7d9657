//! Report assembly and the pipeline entry point

use crate::analysis::{MetricAnalysis, analyze_industry, analyze_metrics};
use crate::forecast::{ForecastRequest, ForecastResult, generate_forecast};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

/// Title line of every rendered report
pub const REPORT_TITLE: &str = "AI-Generated Financial Forecasting and Analysis Report";

/// Everything produced for one forecast request
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub result: ForecastResult,
    pub industry_insight: &'static str,
    pub metric_analysis: MetricAnalysis,
    /// Markdown document
    pub document: String,
}

/// Render the Markdown report for a forecast
///
/// Sections always appear in the same order: title, header, metric analysis,
/// forecast results, detailed analysis, model critique.
pub fn render_report(result: &ForecastResult, metric_analysis: &MetricAnalysis) -> String {
    let mut doc = String::with_capacity(2048);

    doc.push_str(&format!("# {REPORT_TITLE}\n\n"));
    doc.push_str(&format!("**Industry Focus:** {}  \n", result.industry));
    doc.push_str(&format!("**Investment Goal:** {}  \n", result.investment_goal));
    doc.push_str(&format!("**Time Frame:** {}  \n", result.time_frame));
    doc.push_str("\n---\n\n");

    doc.push_str("## Selected Metrics Analysis:\n");
    if metric_analysis.is_empty() {
        doc.push_str("- _No metrics selected._\n");
    }
    for (metric, description) in metric_analysis.iter() {
        doc.push_str(&format!("- **{metric}:** {description}\n"));
    }
    doc.push_str("\n---\n\n");

    let market_condition = match result.market_condition.trim() {
        "" => "N/A",
        text => text,
    };
    doc.push_str("## Forecast Results:\n");
    doc.push_str(&format!(
        "- **Forecast Growth Rate (%):** {:.2}%  \n",
        result.growth_rate_percent
    ));
    doc.push_str(&format!("- **Risk Level:** {}  \n", result.risk_level));
    doc.push_str(&format!("- **Market Condition:** {market_condition}  \n\n"));

    doc.push_str("### Detailed Analysis:\n");
    doc.push_str(&format!(
        "- **Market Trend Analysis:**  \n  {}\n\n",
        result.market_trend_analysis
    ));
    doc.push_str(&format!(
        "- **Company Financial Projection:**  \n  {}\n\n",
        result.financial_projection
    ));
    doc.push_str(&format!(
        "- **Investment Strategy Recommendations:**  \n  {}\n",
        result.strategy_recommendation
    ));
    doc.push_str("\n---\n\n");

    doc.push_str("## Model Critique:\n");
    doc.push_str(&result.model_critique);
    doc.push_str("\n\n---\n");

    doc
}

/// Runs the full pipeline: industry lookup, metric lookup, forecast, report
///
/// The generator owns its random source. Use [`ReportGenerator::with_seed`]
/// or [`ReportGenerator::from_rng`] for reproducible output.
///
/// # Examples
///
/// ```
/// use findash_forecast::{ForecastRequest, Industry, InvestmentGoal, ReportGenerator, TimeFrame};
///
/// let mut generator = ReportGenerator::with_seed(11);
/// let request = ForecastRequest::new(
///     Industry::Technology,
///     InvestmentGoal::ShortTermGains,
///     TimeFrame::Quarterly,
/// );
/// let report = generator.generate_report(&request);
///
/// assert!(report.document.starts_with("# AI-Generated Financial Forecasting"));
/// assert_eq!(report.metric_analysis.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ReportGenerator<R = StdRng> {
    rng: R,
}

impl ReportGenerator<StdRng> {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ReportGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ReportGenerator<R> {
    /// Create a generator around any random source
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate just the forecast record
    pub fn generate_forecast(&mut self, request: &ForecastRequest) -> ForecastResult {
        generate_forecast(request, &mut self.rng)
    }

    /// Generate the forecast and its rendered report
    pub fn generate_report(&mut self, request: &ForecastRequest) -> ForecastReport {
        let industry_insight = analyze_industry(&request.industry);
        let metric_analysis = analyze_metrics(&request.metrics);
        let result = self.generate_forecast(request);
        let document = render_report(&result, &metric_analysis);

        debug!(
            industry = %result.industry,
            metrics = metric_analysis.len(),
            growth_rate = result.growth_rate_percent,
            risk = %result.risk_level,
            "Generated forecast report"
        );

        ForecastReport {
            result,
            industry_insight,
            metric_analysis,
            document,
        }
    }
}
