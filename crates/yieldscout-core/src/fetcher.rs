//! Cursor-paginated pool fetcher.
//!
//! Pages through a [`PoolQuery`] strictly in sequence, parses each day's
//! decimal text once, and keeps only pools whose TVL crossed the minimum on
//! at least one day of the range.

use tracing::{debug, info};

use crate::subgraph::{PageRequest, PoolQuery, PoolRecord};
use crate::{
    CalendarDate, DateRange, FetchError, MinTvl, Pool, PoolDay, PoolDayRangeStats,
    ValidationError,
};

/// How many pools to request with each query.
pub const FETCH_BATCH_COUNT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    page_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: FETCH_BATCH_COUNT,
        }
    }
}

impl FetchConfig {
    pub fn new(page_size: usize) -> Result<Self, ValidationError> {
        if page_size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(Self { page_size })
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Drives pagination against an injected query collaborator.
pub struct PoolFetcher<Q> {
    query: Q,
    config: FetchConfig,
}

impl<Q: PoolQuery> PoolFetcher<Q> {
    pub fn new(query: Q) -> Self {
        Self::with_config(query, FetchConfig::default())
    }

    pub fn with_config(query: Q, config: FetchConfig) -> Self {
        Self { query, config }
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Fetch every pool with day data in `range` whose TVL exceeded `min_tvl`
    /// on some day. Ordering follows the source's identifier ordering.
    pub async fn fetch_pools(
        &self,
        range: DateRange,
        min_tvl: MinTvl,
    ) -> Result<Vec<Pool>, FetchError> {
        info!(
            start = %range.start(),
            end = %range.end(),
            min_tvl = min_tvl.value,
            comparison = ?min_tvl.comparison,
            "Fetching all liquidity pools and date range data"
        );

        let mut request = PageRequest {
            first: self.config.page_size,
            last_id: String::new(),
            date_gte: range.start().unix_timestamp(),
            date_lte: range.end().unix_timestamp(),
        };
        let mut pools = Vec::new();
        let mut page = 0_usize;

        loop {
            let response = self.query.fetch_page(&request).await?;

            let Some(last) = response.pools.last() else {
                break;
            };
            if last.id.as_str() <= request.last_id.as_str() {
                return Err(FetchError::CursorStalled {
                    cursor: request.last_id,
                });
            }
            let next_cursor = last.id.clone();

            for record in &response.pools {
                if let Some(pool) = aggregate_pool(record, range, min_tvl)? {
                    pools.push(pool);
                } else {
                    debug!(pool = %record.id, "Pool never exceeded minimum TVL; skipping");
                }
            }

            page += 1;
            info!(page, cursor = %next_cursor, "Fetched {} pools", response.pools.len());
            request.last_id = next_cursor;
        }

        info!(pages = page, included = pools.len(), "Finished fetching pools");
        Ok(pools)
    }
}

/// Fetch with the default page size and a strict `>` minimum-TVL comparison.
pub async fn fetch_all_pools<Q: PoolQuery>(
    query: Q,
    range: DateRange,
    min_tvl: f64,
) -> Result<Vec<Pool>, FetchError> {
    PoolFetcher::new(query)
        .fetch_pools(range, MinTvl::strict(min_tvl))
        .await
}

fn aggregate_pool(
    record: &PoolRecord,
    range: DateRange,
    min_tvl: MinTvl,
) -> Result<Option<Pool>, FetchError> {
    let mut days = Vec::with_capacity(record.pool_day_data.len());
    let mut exceeds_min_tvl = false;

    for raw in &record.pool_day_data {
        let fees_usd = parse_usd("fees USD", &record.id, &raw.fees_usd)?;
        let tvl_usd = parse_usd("tvl USD", &record.id, &raw.tvl_usd)?;
        let date = CalendarDate::from_unix_timestamp(raw.date).map_err(|_| FetchError::Parse {
            field: "date",
            pool: record.id.clone(),
            value: raw.date.to_string(),
        })?;

        if !range.contains(date) {
            debug!(pool = %record.id, %date, "Ignoring day outside requested range");
            continue;
        }

        exceeds_min_tvl |= min_tvl.is_exceeded_by(tvl_usd);
        days.push(PoolDay {
            date,
            fees_usd,
            tvl_usd,
        });
    }

    if !exceeds_min_tvl {
        return Ok(None);
    }

    Ok(Some(Pool {
        id: record.id.clone(),
        token0_name: record.token0.name.clone(),
        token1_name: record.token1.name.clone(),
        day_range_stats: PoolDayRangeStats::from_days(range, &days),
    }))
}

fn parse_usd(field: &'static str, pool: &str, raw: &str) -> Result<f64, FetchError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FetchError::Parse {
            field,
            pool: pool.to_owned(),
            value: raw.to_owned(),
        })
}
