//! Display defaults baked into the dashboard.

use std::time::Duration;

/// Seconds between automatic grid refreshes.
pub const AUTO_REFRESH_INTERVAL_SECS: u64 = 3;

/// Number of recent DAG runs shown when no explicit count is requested.
pub const DEFAULT_DAG_RUN_DISPLAY_NUMBER: usize = 25;

/// Auto-refresh cadence as a [`Duration`].
#[must_use]
pub const fn auto_refresh_interval() -> Duration {
    Duration::from_secs(AUTO_REFRESH_INTERVAL_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_contract() {
        assert_eq!(AUTO_REFRESH_INTERVAL_SECS, 3);
        assert_eq!(DEFAULT_DAG_RUN_DISPLAY_NUMBER, 25);
        assert_eq!(auto_refresh_interval(), Duration::from_secs(3));
    }
}
