//! Price history types shared by all data providers

use crate::error::{MarketDataError, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One daily OHLCV bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Lookback window for a history request, e.g. `1mo` or `ytd`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum HistoryPeriod {
    OneDay,
    FiveDays,
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    FiveYears,
    TenYears,
    YearToDate,
    Max,
}

impl HistoryPeriod {
    pub const ALL: [HistoryPeriod; 11] = [
        HistoryPeriod::OneDay,
        HistoryPeriod::FiveDays,
        HistoryPeriod::OneMonth,
        HistoryPeriod::ThreeMonths,
        HistoryPeriod::SixMonths,
        HistoryPeriod::OneYear,
        HistoryPeriod::TwoYears,
        HistoryPeriod::FiveYears,
        HistoryPeriod::TenYears,
        HistoryPeriod::YearToDate,
        HistoryPeriod::Max,
    ];

    /// Provider-style code such as `1mo`
    pub fn code(self) -> &'static str {
        match self {
            HistoryPeriod::OneDay => "1d",
            HistoryPeriod::FiveDays => "5d",
            HistoryPeriod::OneMonth => "1mo",
            HistoryPeriod::ThreeMonths => "3mo",
            HistoryPeriod::SixMonths => "6mo",
            HistoryPeriod::OneYear => "1y",
            HistoryPeriod::TwoYears => "2y",
            HistoryPeriod::FiveYears => "5y",
            HistoryPeriod::TenYears => "10y",
            HistoryPeriod::YearToDate => "ytd",
            HistoryPeriod::Max => "max",
        }
    }

    /// Start of the window ending at `end`
    pub fn start_from(self, end: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            HistoryPeriod::OneDay => end - Duration::days(1),
            HistoryPeriod::FiveDays => end - Duration::days(5),
            HistoryPeriod::OneMonth => end - Duration::days(30),
            HistoryPeriod::ThreeMonths => end - Duration::days(90),
            HistoryPeriod::SixMonths => end - Duration::days(180),
            HistoryPeriod::OneYear => end - Duration::days(365),
            HistoryPeriod::TwoYears => end - Duration::days(730),
            HistoryPeriod::FiveYears => end - Duration::days(1825),
            HistoryPeriod::TenYears => end - Duration::days(3650),
            HistoryPeriod::YearToDate => NaiveDate::from_ymd_opt(end.year(), 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map_or(end - Duration::days(365), |start| start.and_utc()),
            HistoryPeriod::Max => end - Duration::days(36500),
        }
    }
}

impl fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HistoryPeriod {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|period| period.code() == wanted)
            .ok_or_else(|| MarketDataError::InvalidPeriod(s.to_string()))
    }
}

impl TryFrom<String> for HistoryPeriod {
    type Error = MarketDataError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<HistoryPeriod> for String {
    fn from(period: HistoryPeriod) -> Self {
        period.code().to_string()
    }
}

/// Headline figures for a run of bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub first_close: f64,
    pub last_close: f64,
    pub change_percent: f64,
    pub period_high: f64,
    pub period_low: f64,
    pub last_volume: u64,
    pub bars: usize,
}

impl StockSummary {
    /// Summarize bars ordered oldest first; `None` when there are no bars
    pub fn from_bars(bars: &[PriceBar]) -> Option<Self> {
        let first = bars.first()?;
        let last = bars.last()?;

        let period_high = bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let period_low = bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);
        let change_percent = if first.close == 0.0 {
            0.0
        } else {
            (last.close - first.close) / first.close * 100.0
        };

        Some(Self {
            first_date: first.date,
            last_date: last.date,
            first_close: first.close,
            last_close: last.close,
            change_percent,
            period_high,
            period_low,
            last_volume: last.volume,
            bars: bars.len(),
        })
    }
}

/// Per-ticker fundamentals shown next to the price table
///
/// Providers leave a field `None` when they do not report it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    pub market_cap: Option<u64>,
    pub trailing_pe: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    /// Fraction of the share price, e.g. `0.005` for 0.5%
    pub dividend_yield: Option<f64>,
}

impl Fundamentals {
    /// True when no field is known
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, low: f64, high: f64, close: f64, volume: u64) -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            open: close,
            high,
            low,
            close,
            volume,
        }
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("1mo".parse::<HistoryPeriod>().unwrap(), HistoryPeriod::OneMonth);
        assert_eq!(" YTD ".parse::<HistoryPeriod>().unwrap(), HistoryPeriod::YearToDate);
        assert!(matches!(
            "2w".parse::<HistoryPeriod>(),
            Err(MarketDataError::InvalidPeriod(p)) if p == "2w"
        ));
    }

    #[test]
    fn test_period_codes_round_trip() {
        for period in HistoryPeriod::ALL {
            assert_eq!(period.code().parse::<HistoryPeriod>().unwrap(), period);
        }
    }

    #[test]
    fn test_start_from() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc();

        assert_eq!(HistoryPeriod::FiveDays.start_from(end), end - Duration::days(5));
        assert_eq!(
            HistoryPeriod::YearToDate.start_from(end).date_naive(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_summary() {
        let bars = vec![
            bar(1, 98.0, 102.0, 100.0, 1_000),
            bar(4, 95.0, 111.0, 110.0, 2_000),
            bar(5, 104.0, 108.0, 105.0, 1_500),
        ];
        let summary = StockSummary::from_bars(&bars).unwrap();

        assert_eq!(summary.bars, 3);
        assert!((summary.change_percent - 5.0).abs() < 1e-9);
        assert!((summary.period_high - 111.0).abs() < f64::EPSILON);
        assert!((summary.period_low - 95.0).abs() < f64::EPSILON);
        assert_eq!(summary.last_volume, 1_500);
        assert_eq!(summary.last_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_summary_empty() {
        assert!(StockSummary::from_bars(&[]).is_none());
    }

    #[test]
    fn test_fundamentals_is_empty() {
        assert!(Fundamentals::default().is_empty());
        let fundamentals = Fundamentals {
            trailing_pe: Some(28.4),
            ..Default::default()
        };
        assert!(!fundamentals.is_empty());
    }

    #[test]
    fn test_period_serde() {
        let json = serde_json::to_string(&HistoryPeriod::SixMonths).unwrap();
        assert_eq!(json, "\"6mo\"");
        assert!(serde_json::from_str::<HistoryPeriod>("\"7mo\"").is_err());
    }
}
