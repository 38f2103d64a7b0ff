//! Option lists backing the dashboard's filter dropdowns.
//!
//! Ordering is presentation order and is part of the contract with the UI.

use serde::Serialize;

use crate::state::{DagRunState, RunType, TaskInstanceState};

/// Entries of the task-state dropdown.
pub const TASK_STATE_OPTIONS: [TaskInstanceState; 12] = TaskInstanceState::ALL;

/// Entries of the DAG-run-state dropdown.
pub const DAG_STATE_OPTIONS: [DagRunState; 4] = DagRunState::ALL;

/// Entries of the run-type dropdown.
pub const RUN_TYPE_OPTIONS: [RunType; 4] = RunType::ALL;

/// Choices for how many recent runs to display, ascending.
pub const NUM_RUNS_OPTIONS: [usize; 5] = [5, 25, 50, 100, 365];

/// The four option lists bundled for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Task-state tags, presentation order.
    pub task_states: Vec<TaskInstanceState>,
    /// DAG-run-state tags, presentation order.
    pub dag_states: Vec<DagRunState>,
    /// Run-type tags, presentation order.
    pub run_types: Vec<RunType>,
    /// Run-count choices, ascending.
    pub num_runs: Vec<usize>,
}

impl FilterOptions {
    /// Assemble the current option lists.
    #[must_use]
    pub fn current() -> Self {
        Self {
            task_states: TASK_STATE_OPTIONS.to_vec(),
            dag_states: DAG_STATE_OPTIONS.to_vec(),
            run_types: RUN_TYPE_OPTIONS.to_vec(),
            num_runs: NUM_RUNS_OPTIONS.to_vec(),
        }
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;

    use super::*;

    fn ok<T, E: Display>(result: Result<T, E>, context: &str) -> T {
        result.unwrap_or_else(|err| panic!("{context}: {err}"))
    }

    #[test]
    fn num_runs_choices_are_fixed_and_ascending() {
        assert_eq!(NUM_RUNS_OPTIONS, [5, 25, 50, 100, 365]);
        assert!(NUM_RUNS_OPTIONS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn run_types_keep_presentation_order() {
        let tags: Vec<_> = RUN_TYPE_OPTIONS.iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, ["backfill", "scheduled", "manual", "asset_triggered"]);
    }

    #[test]
    fn task_states_keep_presentation_order() {
        let tags: Vec<_> = TASK_STATE_OPTIONS.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            tags,
            [
                "removed",
                "scheduled",
                "queued",
                "running",
                "success",
                "restarting",
                "failed",
                "up_for_retry",
                "up_for_reschedule",
                "upstream_failed",
                "skipped",
                "deferred",
            ]
        );
    }

    #[test]
    fn dag_states_are_a_subset_of_task_states() {
        let task_tags: Vec<_> = TASK_STATE_OPTIONS.iter().map(|s| s.as_str()).collect();
        for state in DAG_STATE_OPTIONS {
            assert!(task_tags.contains(&state.as_str()), "{state} missing");
        }
    }

    #[test]
    fn option_lists_are_duplicate_free() {
        let options = FilterOptions::current();
        for (index, state) in options.task_states.iter().enumerate() {
            assert!(!options.task_states[index + 1..].contains(state));
        }
        for (index, count) in options.num_runs.iter().enumerate() {
            assert!(!options.num_runs[index + 1..].contains(count));
        }
    }

    #[test]
    fn repeated_reads_are_identical() {
        assert_eq!(FilterOptions::current(), FilterOptions::current());
        assert_eq!(FilterOptions::default(), FilterOptions::current());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = ok(serde_json::to_string(&FilterOptions::current()), "serialize");
        assert!(json.contains("\"taskStates\""));
        assert!(json.contains("\"dagStates\""));
        assert!(json.contains("\"runTypes\""));
        assert!(json.contains("\"numRuns\":[5,25,50,100,365]"));
    }
}
