//! Append-only alert log shared with the presentation layer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;

use crate::alert::{Alert, AlertSequence, AlertType};

/// Meter label recorded when no meter ID accompanies an alert.
const UNKNOWN_METER: &str = "UNKNOWN";

/// Centralized log for recording, formatting, and clearing abnormal-usage
/// alerts.
///
/// Constructed explicitly and threaded to the collaborators that need it;
/// one instance per process is the expected arrangement. Append, read, and
/// clear are internally synchronized, and reads hand out snapshots so that
/// callers never iterate under the log's lock.
#[derive(Debug)]
pub struct AlertCenter {
    alerts: Mutex<Vec<Alert>>,
    ids: Arc<AlertSequence>,
}

impl AlertCenter {
    /// Creates an empty alert log drawing IDs from the given sequence.
    #[must_use]
    pub fn new(ids: Arc<AlertSequence>) -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
            ids,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Alert>> {
        // A poisoned lock means a panic elsewhere while appending; the log
        // itself is still a valid Vec.
        self.alerts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a `HIGH_USAGE` alert for the given meter.
    ///
    /// The message carries the measured usage, the crossed threshold, and a
    /// minute-resolution timestamp. A missing meter ID is recorded as the
    /// literal `UNKNOWN`.
    pub fn add_high_usage(&self, meter_id: Option<&str>, usage: f64, threshold: f64) {
        let message = format!(
            "Today's usage {usage:.1} L exceeds threshold {threshold:.1} L at {}",
            Local::now().format("%Y-%m-%d %H:%M")
        );
        self.push(meter_id, AlertType::HighUsage, message);
    }

    /// Records a `LOW_USAGE` alert for the given meter.
    pub fn add_low_usage(&self, meter_id: Option<&str>, usage: f64, threshold: f64) {
        let message = format!(
            "Today's usage {usage:.1} L is below threshold {threshold:.1} L at {}",
            Local::now().format("%Y-%m-%d %H:%M")
        );
        self.push(meter_id, AlertType::LowUsage, message);
    }

    fn push(&self, meter_id: Option<&str>, alert_type: AlertType, message: String) {
        let alert = Alert::new(
            self.ids.next(),
            meter_id.unwrap_or(UNKNOWN_METER),
            alert_type,
            message,
        );
        tracing::warn!(meter_id = alert.meter_id(), %alert_type, "alert recorded");
        self.lock().push(alert);
    }

    /// Returns a snapshot of the recorded alerts in insertion order.
    ///
    /// The copy is independent of the internal log; later appends or clears
    /// do not show through, and mutating the result has no effect here.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.lock().clone()
    }

    /// Formats all recorded alerts, one per line.
    ///
    /// Returns `"No abnormal usage alerts currently."` when the log is empty.
    #[must_use]
    pub fn format_alerts(&self) -> String {
        let snapshot = self.alerts();
        if snapshot.is_empty() {
            return "No abnormal usage alerts currently.".to_string();
        }
        let mut out = String::new();
        for alert in &snapshot {
            out.push_str(&alert.details());
            out.push('\n');
        }
        out
    }

    /// Removes all recorded alerts. Previously returned snapshots are
    /// unaffected.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> AlertCenter {
        AlertCenter::new(Arc::new(AlertSequence::new()))
    }

    #[test]
    fn empty_log_formats_placeholder() {
        assert_eq!(
            center().format_alerts(),
            "No abnormal usage alerts currently."
        );
    }

    #[test]
    fn high_usage_message_carries_values_and_timestamp() {
        let center = center();
        center.add_high_usage(Some("WM001"), 250.0, 180.0);

        let alerts = center.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].meter_id(), "WM001");
        assert_eq!(alerts[0].alert_type(), AlertType::HighUsage);
        assert!(
            alerts[0]
                .alert_message()
                .starts_with("Today's usage 250.0 L exceeds threshold 180.0 L at ")
        );

        let formatted = center.format_alerts();
        assert!(formatted.starts_with("Alert[1]: HIGH_USAGE - Today's usage 250.0 L"));
        assert!(formatted.contains("(WM001) on "));
        assert!(formatted.ends_with('\n'));
    }

    #[test]
    fn low_usage_message_uses_below_wording() {
        let center = center();
        center.add_low_usage(Some("WM002"), 5.0, 20.0);

        let alerts = center.alerts();
        assert!(
            alerts[0]
                .alert_message()
                .starts_with("Today's usage 5.0 L is below threshold 20.0 L at ")
        );
    }

    #[test]
    fn missing_meter_recorded_as_unknown() {
        let center = center();
        center.add_high_usage(None, 300.0, 200.0);
        assert_eq!(center.alerts()[0].meter_id(), "UNKNOWN");
    }

    #[test]
    fn snapshots_are_independent_of_later_mutation() {
        let center = center();
        center.add_high_usage(Some("WM001"), 250.0, 200.0);

        let before_clear = center.alerts();
        center.clear();

        assert_eq!(before_clear.len(), 1);
        assert!(center.alerts().is_empty());
        assert_eq!(
            center.format_alerts(),
            "No abnormal usage alerts currently."
        );
    }

    #[test]
    fn ids_increase_across_appends() {
        let center = center();
        center.add_high_usage(Some("WM001"), 250.0, 200.0);
        center.add_low_usage(Some("WM001"), 1.0, 20.0);

        let alerts = center.alerts();
        assert!(alerts[0].alert_id() < alerts[1].alert_id());
    }

    #[test]
    fn concurrent_appends_preserve_every_entry() {
        let center = Arc::new(center());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let center = Arc::clone(&center);
            handles.push(std::thread::spawn(move || {
                for _ in 0..50 {
                    center.add_high_usage(Some("WM001"), 300.0, 200.0);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let alerts = center.alerts();
        assert_eq!(alerts.len(), 400);
        let mut ids: Vec<u64> = alerts.iter().map(Alert::alert_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 400);
    }
}
