//! findash command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Forecast report (Markdown on stdout)
//! findash forecast --industry Technology --metric "Revenue Growth" --metric "Profit Margins" \
//!     --market-condition "High inflation" --goal "Short-term Gains" --time-frame Quarterly
//!
//! # Last month of prices for a symbol
//! findash stock AAPL --period 1mo
//!
//! # Latest headlines
//! findash news
//! ```
//!
//! API keys are read from the environment or a `.env` file
//! (`ALPHA_VANTAGE_API_KEY`, `FINNHUB_API_KEY`, `FINDASH_NEWS_URL`).

mod output;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use findash_forecast::{
    ForecastRequest, Industry, InvestmentGoal, Metric, REFINED_PROMPTS, ReportGenerator, TimeFrame,
};
use findash_market::{
    DashboardConfig, DataProvider, HistoryPeriod, MarketDashboard, MarketDataError, NewsProvider,
};
use findash_utils::{AppConfig, init_json_tracing, init_tracing_with_default, load_dotenv};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "findash")]
#[command(about = "Financial dashboard: stock history, market news and mock forecast reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a forecast report
    Forecast {
        /// Industry focus
        #[arg(short, long, default_value = "Technology")]
        industry: String,

        /// Metric to analyze (repeatable; defaults to Revenue Growth and Profit Margins)
        #[arg(short, long = "metric", value_name = "METRIC")]
        metrics: Vec<String>,

        /// Market conditions, e.g. "Inflation rate, interest rate"
        #[arg(short = 'c', long, default_value = "")]
        market_condition: String,

        /// Investment goal
        #[arg(short, long, default_value = "Short-term Gains")]
        goal: String,

        /// Time frame
        #[arg(short, long, default_value = "Quarterly")]
        time_frame: String,

        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full report as JSON instead of Markdown
        #[arg(long)]
        json: bool,

        /// Also write the Markdown report to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show recent price history for a stock symbol
    Stock {
        /// Ticker symbol, e.g. AAPL
        #[arg(value_name = "SYMBOL")]
        symbol: String,

        /// Lookback period (1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max)
        #[arg(short, long, value_parser = parse_period)]
        period: Option<HistoryPeriod>,

        /// History provider
        #[arg(long, value_enum, default_value_t = HistoryProviderArg::Yahoo)]
        provider: HistoryProviderArg,

        /// Number of most recent bars to print
        #[arg(short, long, default_value_t = 10)]
        rows: usize,

        /// Print bars and summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the latest financial headlines
    News {
        /// Headline source
        #[arg(long, value_enum, default_value_t = NewsSourceArg::Web)]
        source: NewsSourceArg,
    },
    /// List the valid forecast options
    Options,
    /// Show example prompts for generative financial analysis
    Prompts,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HistoryProviderArg {
    Yahoo,
    AlphaVantage,
}

impl From<HistoryProviderArg> for DataProvider {
    fn from(arg: HistoryProviderArg) -> Self {
        match arg {
            HistoryProviderArg::Yahoo => DataProvider::Yahoo,
            HistoryProviderArg::AlphaVantage => DataProvider::AlphaVantage,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NewsSourceArg {
    Web,
    Finnhub,
}

impl From<NewsSourceArg> for NewsProvider {
    fn from(arg: NewsSourceArg) -> Self {
        match arg {
            NewsSourceArg::Web => NewsProvider::Web,
            NewsSourceArg::Finnhub => NewsProvider::Finnhub,
        }
    }
}

fn parse_period(s: &str) -> Result<HistoryPeriod, String> {
    s.parse().map_err(|e: MarketDataError| e.to_string())
}

/// Attach the error tag so scripts can tell failure classes apart
fn tagged(err: MarketDataError) -> anyhow::Error {
    anyhow!("[{}] {err}", err.kind())
}

/// Map user input onto a known option name, ignoring case and surrounding
/// whitespace; unmatched input is passed on trimmed
fn canonical_name<'a>(input: &str, mut known: impl Iterator<Item = &'a str>) -> String {
    let input = input.trim();
    known
        .find(|name| name.eq_ignore_ascii_case(input))
        .unwrap_or(input)
        .to_string()
}

fn build_request(
    industry: &str,
    metrics: &[String],
    market_condition: String,
    goal: &str,
    time_frame: &str,
) -> ForecastRequest {
    let request = ForecastRequest::new(
        Industry::from_name(&canonical_name(industry, Industry::ALL.iter().map(Industry::name))),
        InvestmentGoal::from_name(&canonical_name(
            goal,
            InvestmentGoal::ALL.iter().map(InvestmentGoal::name),
        )),
        TimeFrame::from_name(&canonical_name(time_frame, TimeFrame::ALL.iter().map(TimeFrame::name))),
    )
    .with_market_condition(market_condition);

    if metrics.is_empty() {
        request
    } else {
        request.with_metrics(metrics.iter().map(|m| {
            Metric::from_name(&canonical_name(m, Metric::ALL.iter().map(Metric::name)))
        }))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = load_dotenv();
    let app = AppConfig::from_env();
    if app.is_production() {
        init_json_tracing(&app.default_log_filter);
    } else {
        init_tracing_with_default(&app.default_log_filter);
    }

    if let Some(path) = dotenv_path {
        debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();
    info!(app = %app.app_name, environment = %app.environment, "Starting findash");

    match cli.command {
        Commands::Forecast {
            industry,
            metrics,
            market_condition,
            goal,
            time_frame,
            seed,
            json,
            output,
        } => {
            let request = build_request(&industry, &metrics, market_condition, &goal, &time_frame);
            let mut generator = match seed {
                Some(seed) => ReportGenerator::with_seed(seed),
                None => ReportGenerator::new(),
            };
            let report = generator.generate_report(&request);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Industry Insight: {}\n", report.industry_insight);
                println!("{}", report.document);
            }

            if let Some(path) = output {
                std::fs::write(&path, &report.document)
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                info!("Report written to {}", path.display());
            }
        },
        Commands::Stock {
            symbol,
            period,
            provider,
            rows,
            json,
        } => {
            let config = DashboardConfig::builder()
                .history_provider(provider.into())
                .with_env_keys()
                .build()
                .map_err(tagged)?;
            let period = period.unwrap_or(config.default_period);
            let dashboard = MarketDashboard::from_config(&config).map_err(tagged)?;

            let overview = dashboard
                .stock_overview(&symbol, period)
                .await
                .map_err(tagged)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                println!("{}", output::stock_table(&overview, rows));
                println!("{}", output::stock_summary(&overview));
            }
        },
        Commands::News { source } => {
            let config = DashboardConfig::builder()
                .news_provider(source.into())
                .with_env_keys()
                .build()
                .map_err(tagged)?;
            let dashboard = MarketDashboard::from_config(&config).map_err(tagged)?;

            let headlines = dashboard.latest_headlines().await.map_err(tagged)?;
            println!("{}", output::headline_list(&headlines));
        },
        Commands::Options => {
            println!("{}", output::option_listing());
        },
        Commands::Prompts => {
            println!("{}", output::prompt_listing(&REFINED_PROMPTS));
        },
    }

    Ok(())
}
