use gridboard_core::{DagRunState, RunType, TaskInstanceState};
use thiserror::Error;

/// Error type returned while constructing run filters from user-facing inputs.
#[derive(Debug, Error)]
pub enum FilterBuildError {
    #[error("invalid run type: {token}")]
    InvalidRunType { token: String },
    #[error("invalid run state: {token}")]
    InvalidRunState { token: String },
    #[error("invalid task state: {token}")]
    InvalidTaskState { token: String },
    #[error("num_runs must be greater than zero")]
    ZeroNumRuns,
}

/// Result alias for filter construction helpers.
pub type FilterBuildResult<T> = Result<T, FilterBuildError>;

/// Builder that accepts user-facing strings and normalizes them into a [`RunFilter`].
#[derive(Debug, Clone, Default)]
pub struct RunFilterBuilder {
    run_types: Vec<String>,
    run_states: Vec<String>,
    num_runs: Option<usize>,
}

impl RunFilterBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the run-type selection.
    #[must_use]
    pub fn with_run_types(mut self, tokens: &[String]) -> Self {
        self.run_types.extend(tokens.iter().cloned());
        self
    }

    /// Extend the run-state selection.
    #[must_use]
    pub fn with_run_states(mut self, tokens: &[String]) -> Self {
        self.run_states.extend(tokens.iter().cloned());
        self
    }

    /// Set how many recent runs to return; `None` keeps the configured default.
    #[must_use]
    pub const fn with_num_runs(mut self, num_runs: Option<usize>) -> Self {
        self.num_runs = num_runs;
        self
    }

    /// Build the final [`RunFilter`].
    ///
    /// `default_num_runs` is used when no explicit count was requested,
    /// typically `webserver.default_dag_run_display_number` from the loaded
    /// configuration.
    ///
    /// # Errors
    /// Returns an error if any token cannot be mapped to a known run type or
    /// run state, or if the resulting run count is zero.
    pub fn build(self, default_num_runs: usize) -> FilterBuildResult<RunFilter> {
        let run_types = dedup_preserving_order(parse_run_type_tokens(&self.run_types)?);
        let run_states = dedup_preserving_order(parse_dag_state_tokens(&self.run_states)?);
        let num_runs = self.num_runs.unwrap_or(default_num_runs);
        if num_runs == 0 {
            return Err(FilterBuildError::ZeroNumRuns);
        }
        Ok(RunFilter {
            run_types,
            run_states,
            num_runs,
        })
    }
}

/// Normalized run-query selection derived from user-facing filter inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFilter {
    /// Selected run types; empty means no restriction.
    pub run_types: Vec<RunType>,
    /// Selected run states; empty means no restriction.
    pub run_states: Vec<DagRunState>,
    /// Number of recent runs to return.
    pub num_runs: usize,
}

impl RunFilter {
    /// Whether a run with the given type and state passes the filter.
    #[must_use]
    pub fn matches(&self, run_type: RunType, state: DagRunState) -> bool {
        (self.run_types.is_empty() || self.run_types.contains(&run_type))
            && (self.run_states.is_empty() || self.run_states.contains(&state))
    }
}

/// Convert arbitrary tokens into [`RunType`] values.
///
/// # Errors
/// Returns an error if any token does not match a known run type.
pub fn parse_run_type_tokens(tokens: &[String]) -> FilterBuildResult<Vec<RunType>> {
    tokens
        .iter()
        .map(|token| {
            normalize(token)
                .parse::<RunType>()
                .map_err(|_| FilterBuildError::InvalidRunType {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Convert arbitrary tokens into [`DagRunState`] values.
///
/// # Errors
/// Returns an error if any token does not match a known run state.
pub fn parse_dag_state_tokens(tokens: &[String]) -> FilterBuildResult<Vec<DagRunState>> {
    tokens
        .iter()
        .map(|token| {
            normalize(token)
                .parse::<DagRunState>()
                .map_err(|_| FilterBuildError::InvalidRunState {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Convert arbitrary tokens into [`TaskInstanceState`] values.
///
/// # Errors
/// Returns an error if any token does not match a known task state.
pub fn parse_task_state_tokens(tokens: &[String]) -> FilterBuildResult<Vec<TaskInstanceState>> {
    tokens
        .iter()
        .map(|token| {
            normalize(token)
                .parse::<TaskInstanceState>()
                .map_err(|_| FilterBuildError::InvalidTaskState {
                    token: token.to_string(),
                })
        })
        .collect()
}

fn normalize(token: &str) -> String {
    token.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

fn dedup_preserving_order<T: Copy + Eq>(values: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
