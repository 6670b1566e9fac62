//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Water-usage monitor.
///
/// Tracks per-meter daily readings, flags abnormal consumption, and renders
/// retrospective usage reports. State is in-memory and scoped to one
/// invocation.
#[derive(Debug, Parser)]
#[command(name = "wmon", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a daily usage reading for a meter.
    Record {
        /// The meter ID (e.g. WM001).
        #[arg(long)]
        meter: String,

        /// The reading date (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// The measured usage in liters.
        #[arg(long)]
        amount: f64,
    },

    /// Generate a usage report over the trailing 30 days.
    Report {
        /// The meter ID.
        #[arg(long)]
        meter: String,

        /// Free-text period label shown on the report.
        #[arg(long)]
        period: Option<String>,

        /// Output the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show usage history for a meter within a date range.
    History {
        /// The meter ID.
        #[arg(long)]
        meter: String,

        /// Start of the range (inclusive).
        #[arg(long)]
        start: NaiveDate,

        /// End of the range (inclusive).
        #[arg(long)]
        end: NaiveDate,

        /// Output the records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show or clear abnormal-usage alerts.
    Alerts {
        /// Clear the alert log instead of listing it.
        #[arg(long)]
        clear: bool,

        /// Output the alerts as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the registered meters.
    Meters {
        /// Output the registry as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run a seeded end-to-end demonstration scenario.
    Demo,
}
