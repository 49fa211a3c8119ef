//! CLI argument definitions for yieldscout.
//!
//! # Arguments
//!
//! | Argument | Description |
//! |----------|-------------|
//! | `RANGE_START` | First day of the range (`YYYY-MM-DD`, UTC) |
//! | `RANGE_END` | Last day of the range, inclusive |
//! | `MIN_TVL` | Minimum TVL in USD a pool must exceed on some day |
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--endpoint` | public Uniswap V3 subgraph | GraphQL endpoint |
//! | `--api-key` | none | Bearer token for gateway endpoints |
//! | `--timeout-ms` | `30000` | Per-request timeout |
//! | `--page-size` | `1000` | Pools requested per page |
//! | `--inclusive-min-tvl` | `false` | Accept days whose TVL equals the minimum |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! yieldscout 2022-05-01 2022-05-07 1000000
//! yieldscout 2022-05-01 2022-05-07 -1 --format json --pretty
//! ```

use clap::{Parser, ValueEnum};
use yieldscout_core::{
    HttpAuth, SubgraphConfig, TvlComparison, DEFAULT_SUBGRAPH_ENDPOINT, FETCH_BATCH_COUNT,
};

/// Find the most profitable Uniswap V3 pool over a date range.
#[derive(Debug, Parser)]
#[command(
    name = "yieldscout",
    author,
    version,
    about = "Find the most profitable Uniswap V3 pool over a date range"
)]
pub struct Cli {
    /// First day of the range (YYYY-MM-DD, UTC).
    pub range_start: String,

    /// Last day of the range, inclusive (YYYY-MM-DD, UTC).
    pub range_end: String,

    /// Minimum TVL in USD; pools must exceed it on at least one day.
    #[arg(allow_negative_numbers = true)]
    pub min_tvl: String,

    /// Subgraph GraphQL endpoint.
    #[arg(long, default_value = DEFAULT_SUBGRAPH_ENDPOINT)]
    pub endpoint: String,

    /// Bearer token sent to the endpoint.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Pools requested per page.
    #[arg(long, default_value_t = FETCH_BATCH_COUNT)]
    pub page_size: usize,

    /// Treat a day whose TVL equals the minimum as exceeding it.
    #[arg(long, default_value_t = false)]
    pub inclusive_min_tvl: bool,

    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl Cli {
    pub fn comparison(&self) -> TvlComparison {
        if self.inclusive_min_tvl {
            TvlComparison::Inclusive
        } else {
            TvlComparison::Strict
        }
    }

    pub fn subgraph_config(&self) -> SubgraphConfig {
        let auth = self
            .api_key
            .clone()
            .map_or(HttpAuth::None, HttpAuth::BearerToken);

        SubgraphConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_timeout_ms(self.timeout_ms)
            .with_auth(auth)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// Single JSON object.
    Json,
}
