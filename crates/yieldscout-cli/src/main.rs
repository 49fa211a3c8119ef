mod cli;
mod error;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yieldscout_core::{
    most_profitable, DateRange, FetchConfig, MinTvl, PoolFetcher, ReqwestHttpClient,
    SubgraphClient,
};

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::Report;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    // All input is validated before the first request goes out.
    let range = DateRange::parse(&cli.range_start, &cli.range_end)?;
    let min_tvl = MinTvl::parse(&cli.min_tvl, cli.comparison())?;
    let config = FetchConfig::new(cli.page_size)?;

    let client = SubgraphClient::new(Arc::new(ReqwestHttpClient::new()), cli.subgraph_config());
    let fetcher = PoolFetcher::with_config(client, config);
    let pools = fetcher.fetch_pools(range, min_tvl).await?;

    let winner = most_profitable(&pools);
    match winner {
        Some(pool) => info!(pool = %pool.id, "Most profitable pool found"),
        None => info!("No pool is considered most profitable"),
    }

    let report = Report {
        range_start: range.start(),
        range_end: range.end(),
        min_tvl,
        pools_considered: pools.len(),
        most_profitable: winner,
    };
    output::render(&report, cli.format, cli.pretty)
}
