use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wmon_cli::commands::{alerts, demo, history, meters, record, report};
use wmon_cli::{Cli, Commands, Config};
use wmon_core::{AlertCenter, AlertSequence, MonitorConfig, UsageMonitor};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    // One alert-ID sequence for the whole process, shared by both alert logs.
    let alert_ids = Arc::new(AlertSequence::new());
    let alert_center = AlertCenter::new(Arc::clone(&alert_ids));
    let monitor = UsageMonitor::new(
        MonitorConfig {
            high_usage_threshold: config.high_usage_threshold,
        },
        alert_ids,
    );

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Some(Commands::Record {
            meter,
            date,
            amount,
        }) => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            record::run(&mut stdout, &monitor, meter, date, *amount)?;
        }
        Some(Commands::Report {
            meter,
            period,
            json,
        }) => {
            let period = period.clone().unwrap_or_else(|| {
                let end = Local::now().date_naive();
                format!("{} to {end}", end - Duration::days(30))
            });
            report::run(&mut stdout, &monitor, meter, &period, *json)?;
        }
        Some(Commands::History {
            meter,
            start,
            end,
            json,
        }) => {
            history::run(&mut stdout, &monitor, meter, *start, *end, *json)?;
        }
        Some(Commands::Alerts { clear, json }) => {
            alerts::run(&mut stdout, &alert_center, *clear, *json)?;
        }
        Some(Commands::Meters { json }) => {
            meters::run(&mut stdout, &monitor, *json)?;
        }
        Some(Commands::Demo) => {
            demo::run(
                &mut stdout,
                &monitor,
                &alert_center,
                config.high_usage_threshold,
            )?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
