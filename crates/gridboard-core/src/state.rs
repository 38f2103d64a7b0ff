use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name an entry of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {vocabulary} tag: {token}")]
pub struct ParseStateError {
    /// Vocabulary that rejected the token.
    pub vocabulary: &'static str,
    /// The offending input, unmodified.
    pub token: String,
}

impl ParseStateError {
    fn new(vocabulary: &'static str, token: &str) -> Self {
        Self {
            vocabulary,
            token: token.to_string(),
        }
    }
}

/// Lifecycle state of a task instance.
///
/// Variants are declared in the order the task-state filter presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskInstanceState {
    /// Task disappeared from the DAG definition before it could run.
    Removed,
    /// Task is waiting for its scheduled slot.
    Scheduled,
    /// Task is queued for an executor.
    Queued,
    /// Task is actively executing.
    Running,
    /// Task finished successfully.
    Success,
    /// Task is being restarted after an external signal.
    Restarting,
    /// Task finished with an error.
    Failed,
    /// Task failed and is waiting out its retry delay.
    UpForRetry,
    /// Task released its slot and asked to be rescheduled.
    UpForReschedule,
    /// An upstream dependency failed.
    UpstreamFailed,
    /// Task was skipped by branching or trigger rules.
    Skipped,
    /// Task handed control to a trigger and is waiting to resume.
    Deferred,
}

impl TaskInstanceState {
    /// Every state, in filter presentation order.
    pub const ALL: [Self; 12] = [
        Self::Removed,
        Self::Scheduled,
        Self::Queued,
        Self::Running,
        Self::Success,
        Self::Restarting,
        Self::Failed,
        Self::UpForRetry,
        Self::UpForReschedule,
        Self::UpstreamFailed,
        Self::Skipped,
        Self::Deferred,
    ];

    /// String tag used in payloads and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Removed => "removed",
            Self::Scheduled => "scheduled",
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Success => "success",
            Self::Restarting => "restarting",
            Self::Failed => "failed",
            Self::UpForRetry => "up_for_retry",
            Self::UpForReschedule => "up_for_reschedule",
            Self::UpstreamFailed => "upstream_failed",
            Self::Skipped => "skipped",
            Self::Deferred => "deferred",
        }
    }
}

impl fmt::Display for TaskInstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskInstanceState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "removed" => Ok(Self::Removed),
            "scheduled" => Ok(Self::Scheduled),
            "queued" => Ok(Self::Queued),
            "running" => Ok(Self::Running),
            "success" => Ok(Self::Success),
            "restarting" => Ok(Self::Restarting),
            "failed" => Ok(Self::Failed),
            "up_for_retry" => Ok(Self::UpForRetry),
            "up_for_reschedule" => Ok(Self::UpForReschedule),
            "upstream_failed" => Ok(Self::UpstreamFailed),
            "skipped" => Ok(Self::Skipped),
            "deferred" => Ok(Self::Deferred),
            _ => Err(ParseStateError::new("task state", s)),
        }
    }
}

/// Overall state of a DAG run.
///
/// Every run state is also a valid [`TaskInstanceState`]; the conversion
/// below keeps that relationship structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DagRunState {
    /// Run is queued and waiting to start.
    Queued,
    /// Run finished with every leaf task successful.
    Success,
    /// Run has tasks executing.
    Running,
    /// Run finished with a failed leaf task.
    Failed,
}

impl DagRunState {
    /// Every run state, in filter presentation order.
    pub const ALL: [Self; 4] = [Self::Queued, Self::Success, Self::Running, Self::Failed];

    /// String tag used in payloads and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Success => "success",
            Self::Running => "running",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for DagRunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DagRunState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(Self::Queued),
            "success" => Ok(Self::Success),
            "running" => Ok(Self::Running),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseStateError::new("run state", s)),
        }
    }
}

impl From<DagRunState> for TaskInstanceState {
    fn from(state: DagRunState) -> Self {
        match state {
            DagRunState::Queued => Self::Queued,
            DagRunState::Success => Self::Success,
            DagRunState::Running => Self::Running,
            DagRunState::Failed => Self::Failed,
        }
    }
}

/// Classification of how a DAG run was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunType {
    /// Run created by backfilling a date range.
    Backfill,
    /// Run created by the scheduler on its timetable.
    Scheduled,
    /// Run triggered explicitly by a user or the API.
    Manual,
    /// Run triggered by an asset update.
    AssetTriggered,
}

impl RunType {
    /// Every run type, in filter presentation order.
    pub const ALL: [Self; 4] = [
        Self::Backfill,
        Self::Scheduled,
        Self::Manual,
        Self::AssetTriggered,
    ];

    /// String tag used in payloads and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backfill => "backfill",
            Self::Scheduled => "scheduled",
            Self::Manual => "manual",
            Self::AssetTriggered => "asset_triggered",
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunType {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backfill" => Ok(Self::Backfill),
            "scheduled" => Ok(Self::Scheduled),
            "manual" => Ok(Self::Manual),
            "asset_triggered" => Ok(Self::AssetTriggered),
            _ => Err(ParseStateError::new("run type", s)),
        }
    }
}
