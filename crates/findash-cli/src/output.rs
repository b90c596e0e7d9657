//! Terminal rendering for CLI output

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use findash_forecast::{Industry, InvestmentGoal, Metric, RefinedPrompt, TimeFrame};
use findash_market::{Fundamentals, HistoryPeriod, StockOverview};

/// Price table with the most recent `rows` bars, newest last
pub fn stock_table(overview: &StockOverview, rows: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Open", "High", "Low", "Close", "Volume"]);

    let skip = overview.bars.len().saturating_sub(rows);
    for bar in overview.bars.iter().skip(skip) {
        table.add_row(vec![
            Cell::new(bar.date),
            price_cell(bar.open),
            price_cell(bar.high),
            price_cell(bar.low),
            price_cell(bar.close),
            Cell::new(bar.volume).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn price_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right)
}

/// One-paragraph summary printed under the price table
pub fn stock_summary(overview: &StockOverview) -> String {
    let s = &overview.summary;
    format!(
        "{symbol} ({provider}, {period}): {bars} bars from {first} to {last}\n\
         Last close: {last_close:.2} ({change:+.2}% over period)\n\
         Period range: {low:.2} - {high:.2}\n\
         Last volume: {volume}\n\
         {fundamentals}",
        symbol = overview.symbol,
        provider = overview.provider,
        period = overview.period,
        bars = s.bars,
        first = s.first_date,
        last = s.last_date,
        last_close = s.last_close,
        change = s.change_percent,
        low = s.period_low,
        high = s.period_high,
        volume = s.last_volume,
        fundamentals = fundamentals_line(&overview.fundamentals),
    )
}

/// Market cap, trailing P/E, 52-week range and dividend yield; "N/A" where missing
fn fundamentals_line(f: &Fundamentals) -> String {
    fn or_na(value: Option<String>) -> String {
        value.unwrap_or_else(|| "N/A".to_string())
    }

    format!(
        "Market cap: {cap} | P/E (TTM): {pe} | 52-week range: {low} - {high} | Dividend yield: {dividend}",
        cap = or_na(f.market_cap.map(compact_amount)),
        pe = or_na(f.trailing_pe.map(|v| format!("{v:.2}"))),
        low = or_na(f.fifty_two_week_low.map(|v| format!("{v:.2}"))),
        high = or_na(f.fifty_two_week_high.map(|v| format!("{v:.2}"))),
        dividend = or_na(f.dividend_yield.map(|v| format!("{:.2}%", v * 100.0))),
    )
}

fn compact_amount(value: u64) -> String {
    let value = value as f64;
    match value {
        v if v >= 1e12 => format!("{:.2}T", v / 1e12),
        v if v >= 1e9 => format!("{:.2}B", v / 1e9),
        v if v >= 1e6 => format!("{:.2}M", v / 1e6),
        v => format!("{v:.0}"),
    }
}

/// Numbered headline list, or a notice when there are none
pub fn headline_list(headlines: &[String]) -> String {
    if headlines.is_empty() {
        return "No recent financial news available.".to_string();
    }
    headlines
        .iter()
        .enumerate()
        .map(|(idx, headline)| format!("{}. {headline}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every option the `forecast` command understands
pub fn option_listing() -> String {
    fn section<I: IntoIterator<Item = String>>(title: &str, names: I) -> String {
        let mut out = format!("{title}:\n");
        for name in names {
            out.push_str(&format!("  - {name}\n"));
        }
        out
    }

    [
        section("Industries", Industry::ALL.map(String::from)),
        section("Metrics", Metric::ALL.map(String::from)),
        section("Investment goals", InvestmentGoal::ALL.map(String::from)),
        section("Time frames", TimeFrame::ALL.map(String::from)),
        section("History periods", HistoryPeriod::ALL.map(String::from)),
    ]
    .join("\n")
}

pub fn prompt_listing(prompts: &[RefinedPrompt]) -> String {
    prompts
        .iter()
        .map(|p| format!("{}:\n  {}\n", p.title, p.prompt))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use findash_market::{PriceBar, StockSummary};

    fn overview() -> StockOverview {
        let bars: Vec<PriceBar> = (1..=4)
            .map(|day| PriceBar {
                date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
                open: 10.0,
                high: 11.0,
                low: 9.0,
                close: 10.0 + f64::from(day),
                volume: 500,
            })
            .collect();
        let summary = StockSummary::from_bars(&bars).unwrap();
        StockOverview {
            symbol: "ACME".to_string(),
            period: HistoryPeriod::OneMonth,
            provider: "test",
            bars,
            summary,
            fundamentals: Fundamentals::default(),
        }
    }

    #[test]
    fn test_stock_table_keeps_latest_rows() {
        let rendered = stock_table(&overview(), 2).to_string();
        assert!(!rendered.contains("2024-07-02"));
        assert!(rendered.contains("2024-07-03"));
        assert!(rendered.contains("2024-07-04"));
        assert!(rendered.contains("14.00"));
    }

    #[test]
    fn test_stock_summary() {
        let text = stock_summary(&overview());
        assert!(text.starts_with("ACME (test, 1mo): 4 bars"));
        assert!(text.contains("Last close: 14.00 (+27.27% over period)"));
        assert!(text.ends_with(
            "Market cap: N/A | P/E (TTM): N/A | 52-week range: N/A - N/A | Dividend yield: N/A"
        ));
    }

    #[test]
    fn test_stock_summary_with_fundamentals() {
        let mut overview = overview();
        overview.fundamentals = Fundamentals {
            market_cap: Some(2_850_000_000_000),
            trailing_pe: Some(29.4571),
            fifty_two_week_high: Some(199.62),
            fifty_two_week_low: Some(164.08),
            dividend_yield: Some(0.0051),
        };

        let text = stock_summary(&overview);
        assert!(text.contains("Market cap: 2.85T | P/E (TTM): 29.46"));
        assert!(text.contains("52-week range: 164.08 - 199.62 | Dividend yield: 0.51%"));
    }

    #[test]
    fn test_compact_amount() {
        assert_eq!(compact_amount(512_300_000), "512.30M");
        assert_eq!(compact_amount(75_000_000_000), "75.00B");
        assert_eq!(compact_amount(999), "999");
    }

    #[test]
    fn test_headline_list() {
        assert_eq!(headline_list(&[]), "No recent financial news available.");
        let list = headline_list(&["A".to_string(), "B".to_string()]);
        assert_eq!(list, "1. A\n2. B");
    }

    #[test]
    fn test_option_listing() {
        let text = option_listing();
        assert!(text.contains("  - P/E Ratio"));
        assert!(text.contains("  - 5-Year Outlook"));
        assert!(text.contains("  - ytd"));
    }
}
