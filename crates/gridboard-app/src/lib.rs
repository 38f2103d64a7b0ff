//! Application layer for the grid dashboard.
//!
//! This crate wraps the static globals in `gridboard-core` with the pieces a
//! deployment needs around them: configuration overrides for the display
//! defaults and normalization of user-facing filter inputs.

pub mod config;
pub mod filter_util;

// Re-exports for convenience
pub use config::{DashboardConfig, WebserverConfig};
pub use filter_util::{
    FilterBuildError, RunFilter, RunFilterBuilder, parse_dag_state_tokens, parse_run_type_tokens,
    parse_task_state_tokens,
};
