//! History command for windowed usage queries.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use wmon_core::UsageMonitor;

/// Runs the history command, listing records one per line.
pub fn run<W: Write>(
    writer: &mut W,
    monitor: &UsageMonitor,
    meter: &str,
    start: NaiveDate,
    end: NaiveDate,
    json: bool,
) -> Result<()> {
    let records = monitor.get_usage_history(meter, start, end);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(());
    }

    if records.is_empty() {
        writeln!(writer, "No usage records for {meter} between {start} and {end}.")?;
        return Ok(());
    }

    for record in &records {
        writeln!(writer, "{record}")?;
    }

    Ok(())
}
