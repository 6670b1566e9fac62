//! Demo command: a deterministic end-to-end scenario.
//!
//! Seeds a week of readings for two meters, lets the detector trip on the
//! heavy one, mirrors today's threshold crossing into the alert center, and
//! renders a report. Replaces the mock-data console generators of earlier
//! iterations with real core operations.

use std::io::Write;

use anyhow::Result;
use chrono::{Duration, Local};
use wmon_core::{AlertCenter, Report, UsageMonitor};

/// Daily readings seeded for the heavy meter, oldest first.
const HEAVY_WEEK: [f64; 7] = [180.0, 210.0, 260.0, 240.0, 275.0, 230.0, 355.0];

/// Runs the demo scenario.
pub fn run<W: Write>(
    writer: &mut W,
    monitor: &UsageMonitor,
    center: &AlertCenter,
    threshold: f64,
) -> Result<()> {
    let today = Local::now().date_naive();

    writeln!(writer, "Seeding one week of readings...")?;
    for (i, amount) in HEAVY_WEEK.iter().enumerate() {
        let date = today - Duration::days((HEAVY_WEEK.len() - 1 - i) as i64);
        monitor.add_usage_record("WM001", date, *amount);
        writeln!(writer, "  WM001 {date}: {amount:.1} L")?;
    }
    for days_ago in 0..7 {
        monitor.add_usage_record("WM002", today - Duration::days(days_ago), 120.0);
    }
    writeln!(writer, "  WM002: 120.0 L daily for the same week")?;

    // Today's reading crossed the threshold; mirror it into the UI-facing log.
    let todays_usage = HEAVY_WEEK[HEAVY_WEEK.len() - 1];
    if todays_usage > threshold {
        center.add_high_usage(Some("WM001"), todays_usage, threshold);
    }

    writeln!(writer)?;
    writeln!(writer, "Alert center:")?;
    writeln!(writer, "{}", center.format_alerts().trim_end_matches('\n'))?;

    writeln!(writer)?;
    writeln!(writer, "Detector history:")?;
    for alert in monitor.alerts() {
        writeln!(writer, "{alert}")?;
    }

    let report = monitor.generate_report("WM001", "demo week");
    writeln!(writer)?;
    writeln!(writer, "{}", report.render())?;
    writeln!(writer, "{}", report.summary())?;

    Ok(())
}
