use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result, bail};
use gridboard_core::{AUTO_REFRESH_INTERVAL_SECS, DEFAULT_DAG_RUN_DISPLAY_NUMBER};
use serde::Deserialize;

const CONFIG_FILE: &str = "gridboard.toml";

/// Top-level deployment configuration loaded from `gridboard.toml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Webserver display settings.
    #[serde(default)]
    pub webserver: WebserverConfig,
}

impl DashboardConfig {
    /// Load configuration from `gridboard.toml` inside `dir`.
    ///
    /// A missing file is not an error; the built-in display defaults apply.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let config_path = dir.as_ref().join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.webserver.validate()
    }
}

/// Webserver display settings block.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WebserverConfig {
    /// Seconds between automatic grid refreshes.
    #[serde(default = "default_auto_refresh_interval")]
    pub auto_refresh_interval: u64,
    /// Number of recent DAG runs shown when no explicit count is requested.
    #[serde(default = "default_display_number")]
    pub default_dag_run_display_number: usize,
}

impl Default for WebserverConfig {
    fn default() -> Self {
        Self {
            auto_refresh_interval: AUTO_REFRESH_INTERVAL_SECS,
            default_dag_run_display_number: DEFAULT_DAG_RUN_DISPLAY_NUMBER,
        }
    }
}

impl WebserverConfig {
    /// Auto-refresh cadence as a [`Duration`].
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.auto_refresh_interval)
    }

    fn validate(&self) -> Result<()> {
        if self.auto_refresh_interval == 0 {
            bail!("webserver.auto_refresh_interval must be greater than zero");
        }
        if self.default_dag_run_display_number == 0 {
            bail!("webserver.default_dag_run_display_number must be greater than zero");
        }
        Ok(())
    }
}

const fn default_auto_refresh_interval() -> u64 {
    AUTO_REFRESH_INTERVAL_SECS
}

const fn default_display_number() -> usize {
    DEFAULT_DAG_RUN_DISPLAY_NUMBER
}
