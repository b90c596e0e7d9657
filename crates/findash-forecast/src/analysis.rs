//! Industry and metric lookups
//!
//! Both lookups never fail: `Other` values map to a fallback sentence.

use crate::catalog::{Industry, Metric};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Returned by [`analyze_industry`] for `Industry::Other`
pub const INDUSTRY_FALLBACK: &str = "No insights available.";

/// Returned by [`analyze_metrics`] for `Metric::Other`
pub const METRIC_FALLBACK: &str = "No data available.";

fn industry_insight(industry: &Industry) -> Option<&'static str> {
    let text = match industry {
        Industry::Technology => {
            "High innovation, rapid change, and potential volatility characterize the tech sector."
        },
        Industry::Healthcare => {
            "Steady growth, regulatory oversight, and high demand for services define the healthcare industry."
        },
        Industry::Manufacturing => {
            "Capital-intensive with cyclical demand, manufacturing trends are influenced by global supply chains."
        },
        Industry::Finance => {
            "Highly sensitive to interest rates and economic cycles, the finance sector is dynamic and regulated."
        },
        Industry::Retail => {
            "Driven by consumer spending and market trends, the retail sector faces both growth opportunities and challenges."
        },
        Industry::Other(_) => return None,
    };
    Some(text)
}

fn metric_summary(metric: &Metric) -> Option<&'static str> {
    let text = match metric {
        Metric::RevenueGrowth => "Measures how quickly a company's sales are growing.",
        Metric::ProfitMargins => "Indicates profitability relative to revenue.",
        Metric::CashFlow => "Reflects liquidity and the company's ability to fund operations.",
        Metric::MarketCap => "Represents the company's overall market value.",
        Metric::PeRatio => "Evaluates the company's share price relative to its earnings.",
        Metric::Other(_) => return None,
    };
    Some(text)
}

/// Look up the fixed insight sentence for an industry
///
/// # Examples
///
/// ```
/// use findash_forecast::{Industry, analyze_industry};
///
/// assert_eq!(
///     analyze_industry(&Industry::Finance),
///     "Highly sensitive to interest rates and economic cycles, the finance sector is dynamic and regulated."
/// );
/// assert_eq!(analyze_industry(&"Unknown Sector".into()), "No insights available.");
/// ```
pub fn analyze_industry(industry: &Industry) -> &'static str {
    industry_insight(industry).unwrap_or(INDUSTRY_FALLBACK)
}

/// Look up the fixed summary sentence for each requested metric
///
/// The result has exactly one entry per distinct metric, in request order.
pub fn analyze_metrics(metrics: &[Metric]) -> MetricAnalysis {
    let mut entries: Vec<(Metric, &'static str)> = Vec::with_capacity(metrics.len());
    for metric in metrics {
        if entries.iter().any(|(seen, _)| seen == metric) {
            continue;
        }
        let summary = metric_summary(metric).unwrap_or(METRIC_FALLBACK);
        entries.push((metric.clone(), summary));
    }
    MetricAnalysis { entries }
}

/// Ordered mapping from metric to its summary sentence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetricAnalysis {
    entries: Vec<(Metric, &'static str)>,
}

impl MetricAnalysis {
    /// Summary for a metric, if it was analyzed
    pub fn get(&self, metric: &Metric) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(m, _)| m == metric)
            .map(|(_, text)| *text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Metric, &'static str)> {
        self.entries.iter().map(|(m, text)| (m, *text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object so `--json` output reads like the on-screen mapping.
impl Serialize for MetricAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (metric, text) in &self.entries {
            map.serialize_entry(metric.name(), text)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_industry_has_an_insight() {
        for industry in Industry::ALL {
            let insight = analyze_industry(&industry);
            assert_ne!(insight, INDUSTRY_FALLBACK, "missing insight for {industry}");
        }
        assert_eq!(
            analyze_industry(&Industry::Technology),
            "High innovation, rapid change, and potential volatility characterize the tech sector."
        );
    }

    #[test]
    fn test_unknown_industry_falls_back() {
        assert_eq!(analyze_industry(&Industry::from_name("Unknown Sector")), INDUSTRY_FALLBACK);
        assert_eq!(analyze_industry(&Industry::Other(String::new())), INDUSTRY_FALLBACK);
    }

    #[test]
    fn test_analyze_metrics_one_entry_per_metric() {
        let analysis = analyze_metrics(&[Metric::CashFlow, Metric::PeRatio]);
        assert_eq!(analysis.len(), 2);
        assert_eq!(
            analysis.get(&Metric::CashFlow),
            Some("Reflects liquidity and the company's ability to fund operations.")
        );
        assert_eq!(
            analysis.get(&Metric::PeRatio),
            Some("Evaluates the company's share price relative to its earnings.")
        );
        assert_eq!(analysis.get(&Metric::MarketCap), None);
    }

    #[test]
    fn test_analyze_metrics_every_subset() {
        // 31 non-empty subsets of the fixed set
        for mask in 1u32..(1 << Metric::ALL.len()) {
            let subset: Vec<Metric> = Metric::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, m)| m)
                .collect();

            let analysis = analyze_metrics(&subset);
            assert_eq!(analysis.len(), subset.len());
            for metric in &subset {
                let expected = metric_summary(metric);
                assert!(expected.is_some());
                assert_eq!(analysis.get(metric), expected);
            }
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(analyze_industry(&"technology".into()), INDUSTRY_FALLBACK);
        assert_eq!(analyze_industry(&"Technology ".into()), INDUSTRY_FALLBACK);

        let analysis = analyze_metrics(&[Metric::from("revenue growth")]);
        assert_eq!(analysis.len(), 1);
        assert_eq!(
            analysis.get(&Metric::Other("revenue growth".to_string())),
            Some(METRIC_FALLBACK)
        );
    }

    #[test]
    fn test_other_variant_never_matches_a_known_name() {
        assert_eq!(
            analyze_industry(&Industry::Other("Technology".to_string())),
            INDUSTRY_FALLBACK
        );
        let analysis = analyze_metrics(&[Metric::Other("Cash Flow".to_string())]);
        assert_eq!(analysis.get(&Metric::Other("Cash Flow".to_string())), Some(METRIC_FALLBACK));
    }

    #[test]
    fn test_unknown_metric_falls_back() {
        let analysis = analyze_metrics(&[Metric::from_name("EBITDA"), Metric::MarketCap]);
        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis.get(&Metric::Other("EBITDA".to_string())), Some(METRIC_FALLBACK));
    }

    #[test]
    fn test_duplicates_collapse_and_order_is_kept() {
        let analysis = analyze_metrics(&[
            Metric::ProfitMargins,
            Metric::RevenueGrowth,
            Metric::ProfitMargins,
        ]);
        let names: Vec<&str> = analysis.iter().map(|(m, _)| m.name()).collect();
        assert_eq!(names, vec!["Profit Margins", "Revenue Growth"]);
    }

    #[test]
    fn test_empty_selection() {
        assert!(analyze_metrics(&[]).is_empty());
    }

    #[test]
    fn test_serialize_as_object() {
        let analysis = analyze_metrics(&[Metric::MarketCap]);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Market Cap": "Represents the company's overall market value." })
        );
    }
}
