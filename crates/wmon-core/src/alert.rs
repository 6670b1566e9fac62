//! Alert entities and the process-wide alert ID sequence.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for unknown alert type strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown alert type: {0}")]
pub struct UnknownAlertType(String);

/// Category of a raised alert.
///
/// The string forms (`HIGH_USAGE`, `LOW_USAGE`) are the canonical rendering
/// used in alert lines and serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertType {
    /// Consumption crossed the upper threshold.
    HighUsage,
    /// Consumption fell below the lower threshold.
    LowUsage,
}

impl AlertType {
    /// Canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighUsage => "HIGH_USAGE",
            Self::LowUsage => "LOW_USAGE",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlertType {
    type Err = UnknownAlertType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH_USAGE" => Ok(Self::HighUsage),
            "LOW_USAGE" => Ok(Self::LowUsage),
            _ => Err(UnknownAlertType(s.to_string())),
        }
    }
}

impl Serialize for AlertType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AlertType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Issues process-unique, strictly increasing alert IDs.
///
/// One sequence is shared by every alert-producing collaborator so that IDs
/// stay unique across the alert center's log and the monitor's own history.
#[derive(Debug)]
pub struct AlertSequence(AtomicU64);

impl AlertSequence {
    /// Creates a sequence starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU64::new(1))
    }

    pub(crate) fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for AlertSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// A raised notice that a measurement or aggregate crossed a threshold.
///
/// Immutable once created. The creation date is stamped from the local
/// system clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    alert_id: u64,
    meter_id: String,
    alert_type: AlertType,
    alert_message: String,
    alert_date: NaiveDate,
}

impl Alert {
    pub(crate) fn new(
        alert_id: u64,
        meter_id: impl Into<String>,
        alert_type: AlertType,
        alert_message: impl Into<String>,
    ) -> Self {
        Self {
            alert_id,
            meter_id: meter_id.into(),
            alert_type,
            alert_message: alert_message.into(),
            alert_date: Local::now().date_naive(),
        }
    }

    /// Returns the process-unique alert identifier.
    #[must_use]
    pub const fn alert_id(&self) -> u64 {
        self.alert_id
    }

    /// Returns the meter that triggered the alert.
    #[must_use]
    pub fn meter_id(&self) -> &str {
        &self.meter_id
    }

    /// Returns the alert category.
    #[must_use]
    pub const fn alert_type(&self) -> AlertType {
        self.alert_type
    }

    /// Returns the human-readable description of the condition.
    #[must_use]
    pub fn alert_message(&self) -> &str {
        &self.alert_message
    }

    /// Returns the date the alert was created.
    #[must_use]
    pub const fn alert_date(&self) -> NaiveDate {
        self.alert_date
    }

    /// One-line rendering used by logs and list views.
    #[must_use]
    pub fn details(&self) -> String {
        format!(
            "Alert[{}]: {} - {} ({}) on {}",
            self.alert_id, self.alert_type, self.alert_message, self.meter_id, self.alert_date
        )
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.details())
    }
}
