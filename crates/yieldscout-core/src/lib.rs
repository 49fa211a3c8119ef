//! # Yieldscout Core
//!
//! Fetches Uniswap V3 pool day data from a subgraph, aggregates per-pool
//! profitability over a date range, and selects the most profitable pool.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Dates, thresholds, pools and range statistics |
//! | [`error`] | Validation and fetch errors |
//! | [`fetcher`] | Cursor-paginated fetch-and-aggregate pipeline |
//! | [`http_client`] | HTTP transport abstraction (reqwest or fakes) |
//! | [`selector`] | Most-profitable pool selection |
//! | [`subgraph`] | GraphQL query collaborator |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / User     │
//! └────────┬────────┘
//!          │ DateRange, MinTvl
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  PoolFetcher    │────▶│ PoolQuery        │────▶│ HttpClient       │
//! │  (pagination)   │     │ (SubgraphClient) │     │ (reqwest/fake)   │
//! └────────┬────────┘     └──────────────────┘     └──────────────────┘
//!          │ Vec<Pool>
//!          ▼
//! ┌─────────────────┐
//! │ most_profitable │
//! └─────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use yieldscout_core::{
//!     most_profitable, DateRange, MinTvl, PoolFetcher, ReqwestHttpClient, SubgraphClient,
//!     SubgraphConfig,
//! };
//!
//! let client = SubgraphClient::new(Arc::new(ReqwestHttpClient::new()), SubgraphConfig::default());
//! let range = DateRange::parse("2022-05-01", "2022-05-07")?;
//! let pools = PoolFetcher::new(client).fetch_pools(range, MinTvl::strict(100_000.0)).await?;
//! if let Some(pool) = most_profitable(&pools) {
//!     println!("Most profitable pool: {pool}");
//! }
//! ```

pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod selector;
pub mod subgraph;

pub use domain::{
    CalendarDate, DateRange, MinTvl, Pool, PoolDay, PoolDayRangeStats, TvlComparison,
    DAYS_PER_YEAR,
};

pub use error::{FetchError, ValidationError};

pub use fetcher::{fetch_all_pools, FetchConfig, PoolFetcher, FETCH_BATCH_COUNT};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use selector::most_profitable;

pub use subgraph::{
    PageRequest, PoolDayRecord, PoolPage, PoolQuery, PoolRecord, QueryError, QueryErrorKind,
    SubgraphClient, SubgraphConfig, TokenRecord, DEFAULT_SUBGRAPH_ENDPOINT,
};
