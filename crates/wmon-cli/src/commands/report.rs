//! Report command for rendering a trailing-window usage report.

use std::io::Write;

use anyhow::Result;
use wmon_core::{Report, UsageMonitor};

/// Runs the report command.
///
/// The period string is a display label only; the query window is always the
/// trailing 30 days.
pub fn run<W: Write>(
    writer: &mut W,
    monitor: &UsageMonitor,
    meter: &str,
    period: &str,
    json: bool,
) -> Result<()> {
    let report = monitor.generate_report(meter, period);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(writer, "{}", report.render())?;
        writeln!(writer, "{}", report.summary())?;
    }

    Ok(())
}
