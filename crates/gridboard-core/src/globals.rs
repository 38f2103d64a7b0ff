//! Aggregate snapshot of the dashboard globals.
//!
//! The web UI receives these values once at boot; field names below are the
//! wire spelling the UI expects.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::colors::state_colors;
use crate::defaults::{AUTO_REFRESH_INTERVAL_SECS, DEFAULT_DAG_RUN_DISPLAY_NUMBER};
use crate::filters::FilterOptions;
use crate::state::TaskInstanceState;

/// Everything the UI reads at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiGlobals {
    /// Color name for each task state.
    pub state_colors: BTreeMap<TaskInstanceState, &'static str>,
    /// Seconds between automatic grid refreshes.
    pub auto_refresh_interval: u64,
    /// Default number of DAG runs to display.
    pub default_dag_run_display_number: usize,
    /// Filter dropdown contents.
    pub filters_options: FilterOptions,
}

impl UiGlobals {
    /// Assemble the globals snapshot.
    #[must_use]
    pub fn current() -> Self {
        Self {
            state_colors: state_colors(),
            auto_refresh_interval: AUTO_REFRESH_INTERVAL_SECS,
            default_dag_run_display_number: DEFAULT_DAG_RUN_DISPLAY_NUMBER,
            filters_options: FilterOptions::current(),
        }
    }

    /// Compact JSON rendering of the snapshot.
    ///
    /// # Errors
    /// Returns an error if serialization fails; the payload is static, so
    /// this does not occur in practice.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for UiGlobals {
    fn default() -> Self {
        Self::current()
    }
}
