use crate::Pool;

/// Pool with the greatest profit over range.
///
/// Ties keep the pool that appears first; an empty slice yields `None`.
pub fn most_profitable(pools: &[Pool]) -> Option<&Pool> {
    let mut best: Option<&Pool> = None;

    for pool in pools {
        let is_better = best.is_none_or(|current| {
            pool.day_range_stats.profit_over_range > current.day_range_stats.profit_over_range
        });
        if is_better {
            best = Some(pool);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateRange, PoolDayRangeStats};

    fn pool(id: &str, profit_over_range: f64) -> Pool {
        let range = DateRange::parse("2022-05-06", "2022-05-06").expect("valid range");
        Pool {
            id: id.to_owned(),
            token0_name: String::new(),
            token1_name: String::new(),
            day_range_stats: PoolDayRangeStats {
                profit_over_range,
                ..PoolDayRangeStats::from_days(range, &[])
            },
        }
    }

    #[test]
    fn picks_highest_profit_over_range() {
        let pools = vec![
            pool("0x123", 0.004),
            pool("0x456", 0.001),
            pool("0x567", 0.000),
            pool("0x89a", 0.145),
        ];

        assert_eq!(most_profitable(&pools).map(|p| p.id.as_str()), Some("0x89a"));
    }

    #[test]
    fn first_pool_wins_ties() {
        let pools = vec![pool("0xa", 0.2), pool("0xb", 0.5), pool("0xc", 0.5)];

        assert_eq!(most_profitable(&pools).map(|p| p.id.as_str()), Some("0xb"));
    }

    #[test]
    fn empty_input_has_no_winner() {
        assert!(most_profitable(&[]).is_none());
    }

    #[test]
    fn single_zero_profit_pool_is_returned() {
        let pools = vec![pool("0x0", 0.0)];

        assert_eq!(most_profitable(&pools).map(|p| p.id.as_str()), Some("0x0"));
    }
}
