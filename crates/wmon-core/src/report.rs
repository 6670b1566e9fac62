//! Retrospective usage reports.

use std::fmt::Write;

use chrono::{Local, NaiveDate, Utc};
use serde::Serialize;

use crate::record::UsageRecord;

/// Capability contract for derived report artifacts.
///
/// A report renders entirely from its own immutable state; generating the
/// text twice yields the same artifact regardless of what happened to the
/// record store in between. One concrete variant exists today, with room for
/// others (e.g. an alert-summary report) behind the same contract.
pub trait Report {
    /// Opaque identifier assigned at construction.
    fn report_id(&self) -> &str;

    /// The meter this report covers.
    fn meter_id(&self) -> &str;

    /// The date this report instance was created.
    fn generated_date(&self) -> NaiveDate;

    /// Renders the full multi-section textual artifact.
    fn render(&self) -> String;

    /// Renders a concise one-line summary.
    fn summary(&self) -> String;
}

/// A usage report over a snapshot of records.
///
/// The snapshot is taken when the monitor builds the report and never
/// changes afterwards, even if the underlying store does. Snapshot order is
/// the date-ascending order produced by the history query.
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    report_id: String,
    meter_id: String,
    generated_date: NaiveDate,
    records: Vec<UsageRecord>,
    period: String,
}

impl UsageReport {
    pub(crate) fn new(meter_id: &str, records: Vec<UsageRecord>, period: &str) -> Self {
        // Millisecond-stamped IDs are unique enough for one process; two
        // reports built in the same millisecond share an ID.
        Self {
            report_id: format!("RPT{}", Utc::now().timestamp_millis()),
            meter_id: meter_id.to_string(),
            generated_date: Local::now().date_naive(),
            records,
            period: period.to_string(),
        }
    }

    /// Returns the snapshotted records in query order.
    #[must_use]
    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    /// Returns the human-readable period label.
    #[must_use]
    pub fn period(&self) -> &str {
        &self.period
    }

    fn total_usage(&self) -> f64 {
        self.records.iter().map(UsageRecord::usage_amount).sum()
    }
}

impl Report for UsageReport {
    fn report_id(&self) -> &str {
        &self.report_id
    }

    fn meter_id(&self) -> &str {
        &self.meter_id
    }

    fn generated_date(&self) -> NaiveDate {
        self.generated_date
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "=====================================").unwrap();
        writeln!(out, "        WATER USAGE REPORT").unwrap();
        writeln!(out, "=====================================").unwrap();
        writeln!(out).unwrap();
        writeln!(out, "Report ID: {}", self.report_id).unwrap();
        writeln!(out, "Meter ID: {}", self.meter_id).unwrap();
        writeln!(out, "Period: {}", self.period).unwrap();
        writeln!(out, "Generated: {}", self.generated_date).unwrap();
        writeln!(out).unwrap();

        if self.records.is_empty() {
            writeln!(out, "No usage records found for this period.").unwrap();
        } else {
            writeln!(out, "USAGE RECORDS:").unwrap();
            writeln!(out, "Date          Usage (Liters)").unwrap();
            writeln!(out, "-------------------------").unwrap();
            for record in &self.records {
                let date = record.date().to_string();
                writeln!(out, "{date:<12}  {:>8.2}", record.usage_amount()).unwrap();
            }
            writeln!(out).unwrap();
            writeln!(out, "Total Usage: {:.2} liters", self.total_usage()).unwrap();
            // Average over records found, not days elapsed.
            let average = self.total_usage() / self.records.len() as f64;
            writeln!(out, "Average Daily: {average:.2} liters").unwrap();
        }

        out.push_str("=====================================");
        out
    }

    fn summary(&self) -> String {
        if self.records.is_empty() {
            return format!("No usage data available for {}", self.period);
        }
        format!(
            "Period: {} | Total: {:.2} liters | Records: {}",
            self.period,
            self.total_usage(),
            self.records.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, date: (i32, u32, u32), amount: f64) -> UsageRecord {
        UsageRecord::new(
            id,
            "WM001",
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            amount,
        )
    }

    #[test]
    fn render_full_report() {
        let records = vec![
            record(1, (2024, 1, 5), 120.5),
            record(2, (2024, 1, 6), 340.25),
            record(3, (2024, 1, 7), 89.0),
        ];
        let report = UsageReport::new("WM001", records, "2024-01-01 to 2024-01-31");

        let output = report
            .render()
            .replace(report.report_id(), "[REPORT_ID]")
            .replace(&report.generated_date().to_string(), "[TODAY]");
        insta::assert_snapshot!(output);
    }

    #[test]
    fn empty_report_renders_no_data_message() {
        let report = UsageReport::new("WM003", Vec::new(), "last month");
        let rendered = report.render();

        assert!(rendered.contains("No usage records found for this period."));
        assert!(!rendered.contains("USAGE RECORDS:"));
        assert!(rendered.ends_with("====================================="));
    }

    #[test]
    fn report_id_carries_rpt_prefix() {
        let report = UsageReport::new("WM001", Vec::new(), "any");
        assert!(report.report_id().starts_with("RPT"));
        assert!(report.report_id()[3..].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn summary_lists_period_total_and_count() {
        let records = vec![record(1, (2024, 1, 5), 100.0), record(2, (2024, 1, 6), 50.5)];
        let report = UsageReport::new("WM001", records, "2024-01");
        assert_eq!(
            report.summary(),
            "Period: 2024-01 | Total: 150.50 liters | Records: 2"
        );
    }

    #[test]
    fn summary_on_empty_snapshot_is_exact() {
        let report = UsageReport::new("WM001", Vec::new(), "2024-01-01 to 2024-01-31");
        assert_eq!(
            report.summary(),
            "No usage data available for 2024-01-01 to 2024-01-31"
        );
    }

    #[test]
    fn average_divides_by_record_count() {
        // Two records five days apart still average over 2, not 5.
        let records = vec![record(1, (2024, 1, 1), 100.0), record(2, (2024, 1, 6), 200.0)];
        let report = UsageReport::new("WM001", records, "jan");
        assert!(report.render().contains("Average Daily: 150.00 liters"));
    }
}
