//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Average daily usage, in liters, above which a high-usage alert is
    /// raised.
    pub high_usage_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            high_usage_threshold: 200.0,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (WMON_*)
        figment = figment.merge(Env::prefixed("WMON_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for wmon.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wmon"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_two_hundred() {
        let config = Config::default();
        assert!((config.high_usage_threshold - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn config_file_overrides_default_threshold() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "high_usage_threshold = 150.0").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert!((config.high_usage_threshold - 150.0).abs() < f64::EPSILON);
    }
}
