//! Synthetic forecast generation
//!
//! The forecast is a placeholder: a random growth rate and risk level next to
//! narrative sentences interpolated from the request. Randomness always comes
//! from a caller-supplied [`Rng`], so a seeded RNG gives reproducible output.

use crate::catalog::{Industry, InvestmentGoal, Metric, TimeFrame};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest growth rate a forecast can report, in percent
pub const MIN_GROWTH_RATE: f64 = 3.0;

/// Highest growth rate a forecast can report, in percent
pub const MAX_GROWTH_RATE: f64 = 15.0;

const MODEL_CRITIQUE: &str = "The report provides coherent insights with clear financial terminology. \
However, integration with real-time data and further prompt refinement would enhance actionable recommendations.";

/// User inputs for a forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub industry: Industry,
    pub metrics: Vec<Metric>,
    /// Free text, e.g. "High inflation, rising rates"
    pub market_condition: String,
    pub investment_goal: InvestmentGoal,
    pub time_frame: TimeFrame,
}

impl ForecastRequest {
    /// Create a request with the default metric selection and no market condition
    pub fn new(industry: Industry, investment_goal: InvestmentGoal, time_frame: TimeFrame) -> Self {
        Self {
            industry,
            metrics: Metric::DEFAULT_SELECTION.to_vec(),
            market_condition: String::new(),
            investment_goal,
            time_frame,
        }
    }

    /// Replace the metric selection; duplicates are dropped, first occurrence wins
    pub fn with_metrics(mut self, metrics: impl IntoIterator<Item = Metric>) -> Self {
        self.metrics.clear();
        for metric in metrics {
            if !self.metrics.contains(&metric) {
                self.metrics.push(metric);
            }
        }
        self
    }

    pub fn with_market_condition(mut self, condition: impl Into<String>) -> Self {
        self.market_condition = condition.into();
        self
    }
}

/// Simulated risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthetic forecast: the echoed request plus generated fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub industry: Industry,
    pub metrics: Vec<Metric>,
    pub market_condition: String,
    pub investment_goal: InvestmentGoal,
    pub time_frame: TimeFrame,
    /// Uniform over [3.0, 15.0], rounded to 2 decimals
    pub growth_rate_percent: f64,
    pub risk_level: RiskLevel,
    pub market_trend_analysis: String,
    pub financial_projection: String,
    pub strategy_recommendation: String,
    pub model_critique: String,
}

/// Build a forecast for `request`, drawing the random fields from `rng`
///
/// # Examples
///
/// ```
/// use findash_forecast::{ForecastRequest, Industry, InvestmentGoal, TimeFrame, generate_forecast};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let request = ForecastRequest::new(
///     Industry::Retail,
///     InvestmentGoal::RiskManagement,
///     TimeFrame::Annual,
/// );
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = generate_forecast(&request, &mut rng);
///
/// assert_eq!(result.industry, Industry::Retail);
/// assert!((3.0..=15.0).contains(&result.growth_rate_percent));
/// ```
pub fn generate_forecast<R: Rng>(request: &ForecastRequest, rng: &mut R) -> ForecastResult {
    let growth_rate_percent = round_to_cents(rng.random_range(MIN_GROWTH_RATE..=MAX_GROWTH_RATE));
    let risk_level = RiskLevel::ALL[rng.random_range(0..RiskLevel::ALL.len())];

    let industry = request.industry.name();
    let time_frame = request.time_frame.name().to_lowercase();
    let goal = request.investment_goal.name().to_lowercase();

    ForecastResult {
        industry: request.industry.clone(),
        metrics: request.metrics.clone(),
        market_condition: request.market_condition.clone(),
        investment_goal: request.investment_goal.clone(),
        time_frame: request.time_frame.clone(),
        growth_rate_percent,
        risk_level,
        market_trend_analysis: format!(
            "In the {industry} sector, current trends show moderate growth driven by key factors \
             including innovation and regulatory shifts."
        ),
        financial_projection: format!(
            "Based on selected metrics, the company's financials project stable revenue growth \
             with improving profit margins over the {time_frame} period."
        ),
        strategy_recommendation: format!(
            "To achieve {goal}, a diversified approach is recommended that leverages \
             sector-specific strengths in {industry}."
        ),
        model_critique: MODEL_CRITIQUE.to_string(),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
