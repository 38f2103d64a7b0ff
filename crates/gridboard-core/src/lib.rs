//! Domain data for the grid dashboard.
//!
//! Everything here is static: closed state vocabularies, the state-to-color
//! mapping, display defaults, and the filter-option lists the UI presents.
//! Values are assembled once and never mutated, so concurrent readers need no
//! synchronization.

/// State-to-color mapping.
pub mod colors;
/// Display defaults.
pub mod defaults;
/// Filter option lists.
pub mod filters;
/// Aggregate globals snapshot handed to the web UI.
pub mod globals;
/// Closed state vocabularies.
pub mod state;

// Re-exports for convenience
pub use colors::state_colors;
pub use defaults::{
    AUTO_REFRESH_INTERVAL_SECS, DEFAULT_DAG_RUN_DISPLAY_NUMBER, auto_refresh_interval,
};
pub use filters::{
    DAG_STATE_OPTIONS, FilterOptions, NUM_RUNS_OPTIONS, RUN_TYPE_OPTIONS, TASK_STATE_OPTIONS,
};
pub use globals::UiGlobals;
pub use state::{DagRunState, ParseStateError, RunType, TaskInstanceState};
