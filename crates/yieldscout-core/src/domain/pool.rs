use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{CalendarDate, DateRange};

/// Annualized profit assumes exactly 365 days in a year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// One day's fee and TVL observation for a pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoolDay {
    pub date: CalendarDate,
    pub fees_usd: f64,
    pub tvl_usd: f64,
}

/// Pool statistics aggregated over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoolDayRangeStats {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    /// Number of day records observed inside the range.
    pub length: usize,
    pub sum_fees: f64,
    pub sum_total_value_locked: f64,
    /// Fees earned per USD deposited over the range.
    pub profit_over_range: f64,
    pub profit_annualized: f64,
}

impl PoolDayRangeStats {
    pub fn from_days(range: DateRange, days: &[PoolDay]) -> Self {
        let (sum_fees, sum_total_value_locked) = days
            .iter()
            .fold((0.0, 0.0), |(fees, tvl), day| {
                (fees + day.fees_usd, tvl + day.tvl_usd)
            });
        let length = days.len();

        // Non-positive summed TVL (zero or malformed negative feeds) earns nothing.
        let profit_over_range = if sum_total_value_locked > 0.0 {
            sum_fees / sum_total_value_locked
        } else {
            0.0
        };

        let profit_annualized = if length > 0 {
            (profit_over_range / length as f64) * DAYS_PER_YEAR
        } else {
            0.0
        };

        Self {
            start_date: range.start(),
            end_date: range.end(),
            length,
            sum_fees,
            sum_total_value_locked,
            profit_over_range,
            profit_annualized,
        }
    }
}

/// Liquidity pool with stats for the queried range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pool {
    pub id: String,
    pub token0_name: String,
    pub token1_name: String,
    pub day_range_stats: PoolDayRangeStats,
}

impl Display for Pool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let stats = &self.day_range_stats;
        write!(
            f,
            "\n\tPool Address: {}\n\tTokens: {} <-> {}\n\tRange: {} to {}\n\tRange Length: {}\n\tProfit Over Range (Earned per $1 USD Deposited): {:.2}%\n\tProfit Annualized (APR): {:.2}%",
            self.id,
            self.token0_name,
            self.token1_name,
            stats.start_date,
            stats.end_date,
            stats.length,
            stats.profit_over_range * 100.0,
            stats.profit_annualized * 100.0,
        )
    }
}
