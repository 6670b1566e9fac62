//! Water-usage monitor CLI library.
//!
//! This crate provides the console interface over the monitoring core. All
//! state lives for the length of one invocation; the commands exist to
//! exercise and demonstrate the core operations.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
