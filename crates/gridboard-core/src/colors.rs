//! Colors painted over task states in the grid view.
//!
//! The mapping is total over [`TaskInstanceState`]; the exhaustive match
//! below means a new state cannot be added without assigning it a color.

use std::collections::BTreeMap;

use crate::state::TaskInstanceState;

impl TaskInstanceState {
    /// CSS color name the grid uses for this state.
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Deferred => "mediumpurple",
            Self::Failed => "red",
            Self::Queued => "gray",
            Self::Removed => "lightgrey",
            Self::Restarting => "violet",
            Self::Running => "lime",
            Self::Scheduled => "tan",
            Self::Skipped => "hotpink",
            Self::Success => "green",
            Self::UpForReschedule => "turquoise",
            Self::UpForRetry => "gold",
            Self::UpstreamFailed => "orange",
        }
    }
}

/// The full state-to-color mapping as an ordered map.
#[must_use]
pub fn state_colors() -> BTreeMap<TaskInstanceState, &'static str> {
    TaskInstanceState::ALL
        .into_iter()
        .map(|state| (state, state.color_name()))
        .collect()
}
