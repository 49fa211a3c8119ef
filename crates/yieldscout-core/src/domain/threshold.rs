use serde::Serialize;

use crate::ValidationError;

/// How a day's TVL is compared against the minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TvlComparison {
    /// TVL must be strictly greater than the minimum.
    #[default]
    Strict,
    /// TVL equal to the minimum also qualifies.
    Inclusive,
}

/// Minimum TVL (USD) a pool must exceed on at least one day in range.
///
/// Negative values disable filtering for any pool with a non-negative day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinTvl {
    pub value: f64,
    pub comparison: TvlComparison,
}

impl MinTvl {
    pub const fn strict(value: f64) -> Self {
        Self {
            value,
            comparison: TvlComparison::Strict,
        }
    }

    pub const fn inclusive(value: f64) -> Self {
        Self {
            value,
            comparison: TvlComparison::Inclusive,
        }
    }

    pub fn parse(input: &str, comparison: TvlComparison) -> Result<Self, ValidationError> {
        let value = input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ValidationError::InvalidThreshold {
                value: input.to_owned(),
            })?;

        Ok(Self { value, comparison })
    }

    pub fn is_exceeded_by(&self, tvl_usd: f64) -> bool {
        match self.comparison {
            TvlComparison::Strict => tvl_usd > self.value,
            TvlComparison::Inclusive => tvl_usd >= self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_threshold_excludes_equal_tvl() {
        let min = MinTvl::strict(1_000.0);
        assert!(!min.is_exceeded_by(1_000.0));
        assert!(min.is_exceeded_by(1_000.01));
    }

    #[test]
    fn inclusive_threshold_accepts_equal_tvl() {
        let min = MinTvl::inclusive(1_000.0);
        assert!(min.is_exceeded_by(1_000.0));
        assert!(!min.is_exceeded_by(999.99));
    }

    #[test]
    fn parses_decimal_and_negative_thresholds() {
        let min = MinTvl::parse("2500.5", TvlComparison::Strict).expect("valid");
        assert_eq!(min.value, 2_500.5);

        let min = MinTvl::parse("-1", TvlComparison::Strict).expect("valid");
        assert!(min.is_exceeded_by(0.0));
    }

    #[test]
    fn rejects_non_numeric_or_non_finite_threshold() {
        for raw in ["abc", "", "NaN", "inf"] {
            let err = MinTvl::parse(raw, TvlComparison::Strict).expect_err("must fail");
            assert!(matches!(err, ValidationError::InvalidThreshold { .. }));
        }
    }
}
