//! Record command for ingesting a single daily reading.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use wmon_core::UsageMonitor;

/// Runs the record command, printing the admission outcome and any alerts
/// the ingestion raised.
pub fn run<W: Write>(
    writer: &mut W,
    monitor: &UsageMonitor,
    meter: &str,
    date: NaiveDate,
    amount: f64,
) -> Result<()> {
    if !monitor.add_usage_record(meter, date, amount) {
        writeln!(
            writer,
            "Error: Invalid input. Please enter a valid water usage amount."
        )?;
        return Ok(());
    }

    writeln!(writer, "Water usage recorded successfully!")?;

    let alerts = monitor.alerts();
    if !alerts.is_empty() {
        writeln!(writer, "Abnormal usage detected:")?;
        for alert in &alerts {
            writeln!(writer, "{alert}")?;
        }
    }

    Ok(())
}
