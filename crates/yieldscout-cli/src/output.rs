use std::io::{self, Write};

use serde::Serialize;
use yieldscout_core::{CalendarDate, MinTvl, Pool};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Result of a run, rendered as text or JSON.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub range_start: CalendarDate,
    pub range_end: CalendarDate,
    pub min_tvl: MinTvl,
    pub pools_considered: usize,
    pub most_profitable: Option<&'a Pool>,
}

pub fn render(report: &Report<'_>, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), report, format, pretty)
}

pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report<'_>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => match report.most_profitable {
            Some(pool) => writeln!(writer, "Most profitable pool: {pool}")?,
            None => writeln!(writer, "No pool is considered most profitable")?,
        },
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(writer, "{payload}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use yieldscout_core::{DateRange, PoolDay, PoolDayRangeStats};

    fn range() -> DateRange {
        DateRange::parse("2022-05-06", "2022-05-07").expect("valid range")
    }

    fn sample_pool() -> Pool {
        let day = PoolDay {
            date: range().start(),
            fees_usd: 50.0,
            tvl_usd: 10_000.0,
        };
        Pool {
            id: String::from("0x89a"),
            token0_name: String::from("Dai Stablecoin"),
            token1_name: String::from("USD Coin"),
            day_range_stats: PoolDayRangeStats::from_days(range(), &[day]),
        }
    }

    fn report(pool: Option<&Pool>) -> Report<'_> {
        Report {
            range_start: range().start(),
            range_end: range().end(),
            min_tvl: MinTvl::strict(1_000.0),
            pools_considered: usize::from(pool.is_some()),
            most_profitable: pool,
        }
    }

    fn render_to_string(report: &Report<'_>, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, report, format, false).expect("render");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn text_reports_missing_winner() {
        let rendered = render_to_string(&report(None), OutputFormat::Text);
        assert_eq!(rendered, "No pool is considered most profitable\n");
    }

    #[test]
    fn text_reports_winner_summary() {
        let pool = sample_pool();
        let rendered = render_to_string(&report(Some(&pool)), OutputFormat::Text);

        assert!(rendered.starts_with("Most profitable pool: "));
        assert!(rendered.contains("Pool Address: 0x89a"));
        assert!(rendered.contains("Profit Over Range (Earned per $1 USD Deposited): 0.50%"));
    }

    #[test]
    fn json_contains_range_and_winner() {
        let pool = sample_pool();
        let rendered = render_to_string(&report(Some(&pool)), OutputFormat::Json);
        let value: Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value["range_start"], "2022-05-06");
        assert_eq!(value["range_end"], "2022-05-07");
        assert_eq!(value["min_tvl"]["comparison"], "strict");
        assert_eq!(value["most_profitable"]["id"], "0x89a");
        assert_eq!(value["most_profitable"]["day_range_stats"]["length"], 1);
    }

    #[test]
    fn json_null_when_no_winner() {
        let rendered = render_to_string(&report(None), OutputFormat::Json);
        let value: Value = serde_json::from_str(&rendered).expect("valid json");

        assert!(value["most_profitable"].is_null());
    }
}
