//! Fixed option sets offered to the user when requesting a forecast
//!
//! Every option type carries an `Other` variant so that values outside the
//! fixed set can still flow through the pipeline; lookups on them degrade to
//! fallback text instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry focus of a forecast
///
/// # Examples
///
/// ```
/// use findash_forecast::Industry;
///
/// assert_eq!(Industry::from_name("Technology"), Industry::Technology);
/// assert!(!Industry::from_name("technology").is_known());
/// assert_eq!(Industry::Healthcare.name(), "Healthcare");
/// assert!(!Industry::from_name("Unknown Sector").is_known());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    Technology,
    Healthcare,
    Manufacturing,
    Finance,
    Retail,
    /// Any industry outside the fixed set
    Other(String),
}

impl Industry {
    /// The fixed option set, in display order
    pub const ALL: [Industry; 5] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Manufacturing,
        Industry::Finance,
        Industry::Retail,
    ];

    /// Display name, also used as the lookup key
    pub fn name(&self) -> &str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Manufacturing => "Manufacturing",
            Industry::Finance => "Finance",
            Industry::Retail => "Retail",
            Industry::Other(name) => name,
        }
    }

    /// Parse an exact display name; anything else becomes `Other`
    pub fn from_name(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|known| known.name() == s)
            .unwrap_or_else(|| Industry::Other(s.to_string()))
    }

    /// Check if this is one of the fixed options
    pub fn is_known(&self) -> bool {
        !matches!(self, Industry::Other(_))
    }
}

/// Financial metric selected for analysis
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Metric {
    RevenueGrowth,
    ProfitMargins,
    CashFlow,
    MarketCap,
    PeRatio,
    /// Any metric outside the fixed set
    Other(String),
}

impl Metric {
    /// The fixed option set, in display order
    pub const ALL: [Metric; 5] = [
        Metric::RevenueGrowth,
        Metric::ProfitMargins,
        Metric::CashFlow,
        Metric::MarketCap,
        Metric::PeRatio,
    ];

    /// Metrics selected when the user makes no choice
    pub const DEFAULT_SELECTION: [Metric; 2] = [Metric::RevenueGrowth, Metric::ProfitMargins];

    pub fn name(&self) -> &str {
        match self {
            Metric::RevenueGrowth => "Revenue Growth",
            Metric::ProfitMargins => "Profit Margins",
            Metric::CashFlow => "Cash Flow",
            Metric::MarketCap => "Market Cap",
            Metric::PeRatio => "P/E Ratio",
            Metric::Other(name) => name,
        }
    }

    pub fn from_name(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|known| known.name() == s)
            .unwrap_or_else(|| Metric::Other(s.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Metric::Other(_))
    }
}

/// What the investor is trying to achieve
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvestmentGoal {
    ShortTermGains,
    LongTermStability,
    RiskManagement,
    Other(String),
}

impl InvestmentGoal {
    pub const ALL: [InvestmentGoal; 3] = [
        InvestmentGoal::ShortTermGains,
        InvestmentGoal::LongTermStability,
        InvestmentGoal::RiskManagement,
    ];

    pub fn name(&self) -> &str {
        match self {
            InvestmentGoal::ShortTermGains => "Short-term Gains",
            InvestmentGoal::LongTermStability => "Long-term Stability",
            InvestmentGoal::RiskManagement => "Risk Management",
            InvestmentGoal::Other(name) => name,
        }
    }

    pub fn from_name(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|known| known.name() == s)
            .unwrap_or_else(|| InvestmentGoal::Other(s.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, InvestmentGoal::Other(_))
    }
}

/// Horizon the forecast covers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeFrame {
    Quarterly,
    Annual,
    FiveYearOutlook,
    Other(String),
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 3] = [
        TimeFrame::Quarterly,
        TimeFrame::Annual,
        TimeFrame::FiveYearOutlook,
    ];

    pub fn name(&self) -> &str {
        match self {
            TimeFrame::Quarterly => "Quarterly",
            TimeFrame::Annual => "Annual",
            TimeFrame::FiveYearOutlook => "5-Year Outlook",
            TimeFrame::Other(name) => name,
        }
    }

    pub fn from_name(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|known| known.name() == s)
            .unwrap_or_else(|| TimeFrame::Other(s.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TimeFrame::Other(_))
    }
}

macro_rules! impl_name_conversions {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl From<&str> for $ty {
                fn from(s: &str) -> Self {
                    $ty::from_name(s)
                }
            }

            impl From<String> for $ty {
                fn from(s: String) -> Self {
                    $ty::from_name(&s)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.name().to_string()
                }
            }
        )+
    };
}

impl_name_conversions!(Industry, Metric, InvestmentGoal, TimeFrame);
