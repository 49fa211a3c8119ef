//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CalendarDate`] | UTC calendar day (`YYYY-MM-DD`) |
//! | [`DateRange`] | Inclusive, validated window of days |
//! | [`MinTvl`] | Minimum-TVL threshold and its comparison mode |
//! | [`PoolDay`] | One day's fees/TVL observation |
//! | [`PoolDayRangeStats`] | Aggregate statistics over a range |
//! | [`Pool`] | Pool identity plus range statistics |

mod date;
mod pool;
mod threshold;

pub use date::{CalendarDate, DateRange};
pub use pool::{Pool, PoolDay, PoolDayRangeStats, DAYS_PER_YEAR};
pub use threshold::{MinTvl, TvlComparison};
