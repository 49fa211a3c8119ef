use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::ValidationError;

const STANDARD_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Calendar day in UTC, formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), STANDARD_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    /// Day containing the given Unix timestamp (seconds, UTC).
    pub fn from_unix_timestamp(seconds: i64) -> Result<Self, ValidationError> {
        OffsetDateTime::from_unix_timestamp(seconds)
            .map(|value| Self(value.date()))
            .map_err(|_| ValidationError::TimestampOutOfRange { value: seconds })
    }

    /// Unix seconds at UTC midnight.
    pub fn unix_timestamp(self) -> i64 {
        self.0.midnight().assume_utc().unix_timestamp()
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(STANDARD_DATE_FORMAT)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Inclusive `[start, end]` window of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidRange {
                start: start.format_iso(),
                end: end.format_iso(),
            });
        }

        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(CalendarDate::parse(start)?, CalendarDate::parse(end)?)
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn parses_standard_date_to_utc_midnight() {
        let date = CalendarDate::parse("2022-05-06").expect("must parse");
        let inner = date.into_inner();

        assert_eq!(inner.year(), 2022);
        assert_eq!(inner.month(), Month::May);
        assert_eq!(inner.day(), 6);
        assert_eq!(date.unix_timestamp(), 1_651_795_200);
    }

    #[test]
    fn rejects_malformed_date() {
        let err = CalendarDate::parse("05/06/2022").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));

        let err = CalendarDate::parse("2022-02-30").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn unix_timestamp_maps_to_containing_day() {
        let date = CalendarDate::from_unix_timestamp(1_651_795_200 + 3_600).expect("in range");
        assert_eq!(date.format_iso(), "2022-05-06");
    }

    #[test]
    fn range_rejects_start_after_end() {
        let err = DateRange::parse("2022-05-07", "2022-05-06").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidRange { .. }));
    }

    #[test]
    fn single_day_range_contains_its_day() {
        let range = DateRange::parse("2022-05-06", "2022-05-06").expect("valid range");
        assert!(range.contains(range.start()));
        assert!(!range.contains(CalendarDate::parse("2022-05-07").expect("valid")));
    }

    #[test]
    fn serializes_as_iso_string() {
        let date = CalendarDate::parse("2022-05-06").expect("must parse");
        assert_eq!(
            serde_json::to_string(&date).expect("serializable"),
            "\"2022-05-06\""
        );
    }
}
