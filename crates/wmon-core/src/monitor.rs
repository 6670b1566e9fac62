//! The monitoring orchestrator: validated ingestion, abnormal-usage
//! detection, and report generation over an in-memory record store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Duration, Local, NaiveDate};

use crate::alert::{Alert, AlertSequence, AlertType};
use crate::meter::WaterMeter;
use crate::record::UsageRecord;
use crate::report::UsageReport;
use crate::validator;

/// Tuning knobs for abnormal-usage detection.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Average daily usage above which a high-usage alert is raised.
    /// Default: 200.0 liters/day.
    pub high_usage_threshold: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            high_usage_threshold: 200.0,
        }
    }
}

/// Everything guarded by the monitor's lock. The record-ID counter lives
/// here so ID issuance and insertion are one atomic step.
#[derive(Debug)]
struct MonitorState {
    meters: Vec<WaterMeter>,
    records: Vec<UsageRecord>,
    alerts: Vec<Alert>,
    next_record_id: u64,
}

/// Central coordinator for meters, usage records, and detection alerts.
///
/// The monitor keeps its own alert history, separate from the presentation
/// layer's [`crate::AlertCenter`] log; both draw IDs from the same shared
/// [`AlertSequence`] so alert IDs stay process-unique.
///
/// All operations synchronize internally and complete without blocking on
/// anything but the store lock, so a monitor can be shared across threads
/// as-is.
#[derive(Debug)]
pub struct UsageMonitor {
    state: Mutex<MonitorState>,
    config: MonitorConfig,
    alert_ids: Arc<AlertSequence>,
}

impl UsageMonitor {
    /// Creates a monitor seeded with the default meter registry.
    #[must_use]
    pub fn new(config: MonitorConfig, alert_ids: Arc<AlertSequence>) -> Self {
        let meters = vec![
            WaterMeter::new("WM001", "Building A", "John Doe"),
            WaterMeter::new("WM002", "Building B", "Jane Smith"),
            WaterMeter::new("WM003", "Building C", "Bob Johnson"),
        ];
        Self {
            state: Mutex::new(MonitorState {
                meters,
                records: Vec::new(),
                alerts: Vec::new(),
                next_record_id: 1,
            }),
            config,
            alert_ids,
        }
    }

    fn lock(&self) -> MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ingests a usage reading after running all three validation checks.
    ///
    /// Returns whether the record was admitted. On rejection nothing is
    /// mutated: no record, no alert, no error value beyond the `false`.
    /// On admission the meter is immediately re-checked for abnormal usage.
    pub fn add_usage_record(&self, meter_id: &str, date: NaiveDate, amount: f64) -> bool {
        if !validator::is_valid_meter_id(meter_id)
            || !validator::is_valid_usage_amount(amount)
            || !validator::is_valid_date(date)
        {
            tracing::debug!(meter_id, %date, amount, "usage record rejected");
            return false;
        }

        {
            let mut state = self.lock();
            let record_id = state.next_record_id;
            state.next_record_id += 1;
            state
                .records
                .push(UsageRecord::new(record_id, meter_id, date, amount));
        }

        self.check_for_abnormal_usage(meter_id);
        true
    }

    /// Re-evaluates the trailing seven days of readings for one meter.
    ///
    /// With fewer than two records in the window there is nothing to judge
    /// and no alert is raised. Otherwise the average is taken over the
    /// records found (not over seven days) and compared against the
    /// configured threshold; crossing it appends one `HIGH_USAGE` alert to
    /// the monitor's history.
    #[allow(clippy::cast_precision_loss)]
    pub fn check_for_abnormal_usage(&self, meter_id: &str) -> bool {
        let today = Local::now().date_naive();
        let recent = self.get_usage_history(meter_id, today - Duration::days(7), today);
        if recent.len() < 2 {
            return false;
        }

        let total: f64 = recent.iter().map(UsageRecord::usage_amount).sum();
        let average_daily = total / recent.len() as f64;
        if average_daily <= self.config.high_usage_threshold {
            return false;
        }

        let alert = Alert::new(
            self.alert_ids.next(),
            meter_id,
            AlertType::HighUsage,
            format!("High water usage detected: {average_daily:.2} L/day average"),
        );
        tracing::warn!(meter_id, average_daily, "{}", alert.details());
        self.lock().alerts.push(alert);
        true
    }

    /// Builds a usage report for the trailing 30 days.
    ///
    /// `period` is a display label only; it does not influence the query
    /// window.
    #[must_use]
    pub fn generate_report(&self, meter_id: &str, period: &str) -> UsageReport {
        let end = Local::now().date_naive();
        let start = end - Duration::days(30);
        let records = self.get_usage_history(meter_id, start, end);
        UsageReport::new(meter_id, records, period)
    }

    /// Returns the meter's records with dates in `[start, end]` inclusive,
    /// sorted ascending by date (insertion order preserved for ties).
    #[must_use]
    pub fn get_usage_history(
        &self,
        meter_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<UsageRecord> {
        let mut records: Vec<UsageRecord> = {
            let state = self.lock();
            state
                .records
                .iter()
                .filter(|record| record.meter_id() == meter_id)
                .filter(|record| record.date() >= start && record.date() <= end)
                .cloned()
                .collect()
        };
        records.sort_by_key(UsageRecord::date);
        records
    }

    /// Checks whether a meter exists and can therefore be bound to a user.
    ///
    /// No binding is stored; this is a capability check at the boundary.
    #[must_use]
    pub fn bind_meter_to_user(&self, user_id: &str, meter_id: &str) -> bool {
        let bound = self
            .lock()
            .meters
            .iter()
            .any(|meter| meter.meter_id() == meter_id);
        tracing::debug!(user_id, meter_id, bound, "meter bind check");
        bound
    }

    /// Returns a snapshot of the meter registry.
    #[must_use]
    pub fn meters(&self) -> Vec<WaterMeter> {
        self.lock().meters.clone()
    }

    /// Returns a snapshot of all usage records in arrival order.
    #[must_use]
    pub fn usage_records(&self) -> Vec<UsageRecord> {
        self.lock().records.clone()
    }

    /// Returns a snapshot of the monitor's own alert history.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.lock().alerts.clone()
    }
}

impl Default for UsageMonitor {
    /// A monitor with default thresholds and a private alert sequence.
    fn default() -> Self {
        Self::new(MonitorConfig::default(), Arc::new(AlertSequence::new()))
    }
}
