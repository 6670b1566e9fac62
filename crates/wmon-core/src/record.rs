//! Usage record entities.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// A single dated liters-measurement for a meter.
///
/// Records are created only through the monitor's validated ingestion path,
/// which assigns the monotonic `record_id` as part of insertion. The ID and
/// meter reference are fixed for the record's life; date and amount may be
/// corrected after the fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageRecord {
    record_id: u64,
    meter_id: String,
    date: NaiveDate,
    usage_amount: f64,
}

impl UsageRecord {
    pub(crate) fn new(
        record_id: u64,
        meter_id: impl Into<String>,
        date: NaiveDate,
        usage_amount: f64,
    ) -> Self {
        Self {
            record_id,
            meter_id: meter_id.into(),
            date,
            usage_amount,
        }
    }

    /// Returns the process-unique record identifier.
    #[must_use]
    pub const fn record_id(&self) -> u64 {
        self.record_id
    }

    /// Returns the meter this record belongs to.
    #[must_use]
    pub fn meter_id(&self) -> &str {
        &self.meter_id
    }

    /// Returns the calendar date the usage was measured on.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the measured usage in liters.
    #[must_use]
    pub const fn usage_amount(&self) -> f64 {
        self.usage_amount
    }

    /// Corrects the measurement date.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Corrects the measured usage in liters.
    pub fn set_usage_amount(&mut self, usage_amount: f64) {
        self.usage_amount = usage_amount;
    }
}

impl fmt::Display for UsageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record[{}]: {} - {:.2} liters on {}",
            self.record_id, self.meter_id, self.usage_amount, self.date
        )
    }
}
