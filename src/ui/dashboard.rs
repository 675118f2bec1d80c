use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::{LatestBuyback, StatsSnapshot};
use crate::engine::FeedState;
use crate::utils::{format_number, format_time_ago_at};

/// The three cards of the "Live Buyback Dashboard", already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub total_sol_collected: String,
    pub total_smm_bought: String,
    pub latest_buyback: String,
    pub latest_buyback_age: String,
}

impl DashboardView {
    pub fn from_snapshot(snapshot: &StatsSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            total_sol_collected: format_number(snapshot.total_sol_collected),
            total_smm_bought: format_number(snapshot.total_smm_bought),
            latest_buyback: format!("{} $SMM", format_number(snapshot.latest_buyback.amount)),
            latest_buyback_age: format_time_ago_at(snapshot.latest_buyback.timestamp, now),
        }
    }

    /// Zeroed cards shown before the first fetch lands.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        let empty = StatsSnapshot {
            total_sol_collected: 0.0,
            total_smm_bought: 0.0,
            latest_buyback: LatestBuyback {
                amount: 0.0,
                timestamp: now,
            },
        };
        Self::from_snapshot(&empty, now)
    }

    pub fn from_state(state: &FeedState, now: DateTime<Utc>) -> Self {
        match state.snapshot() {
            Some(snapshot) => Self::from_snapshot(snapshot, now),
            None => Self::placeholder(now),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total SOL Collected: {} | Total $SMM Bought Back: {} | Latest Buyback: {} ({})",
            self.total_sol_collected,
            self.total_smm_bought,
            self.latest_buyback,
            self.latest_buyback_age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn formats_every_card() {
        let now = Utc::now();
        let view = DashboardView::from_snapshot(&StatsSnapshot::fallback_at(now), now);
        assert_eq!(view.total_sol_collected, "1,247.89");
        assert_eq!(view.total_smm_bought, "892,456.32");
        assert_eq!(view.latest_buyback, "23.45 $SMM");
        assert_eq!(view.latest_buyback_age, "5m ago");
    }

    #[test]
    fn empty_states_render_placeholder() {
        let now = Utc::now();
        for state in [FeedState::Uninitialized, FeedState::AwaitingFirstFetch, FeedState::Stopped(None)] {
            let view = DashboardView::from_state(&state, now);
            assert_eq!(view, DashboardView::placeholder(now));
            assert_eq!(view.total_sol_collected, "0.00");
            assert_eq!(view.latest_buyback_age, "0m ago");
        }
    }

    #[test]
    fn display_is_one_line() {
        let now = Utc::now();
        let snapshot = StatsSnapshot {
            total_sol_collected: 1300.0,
            total_smm_bought: 900000.0,
            latest_buyback: LatestBuyback {
                amount: 30.0,
                timestamp: now - TimeDelta::minutes(2),
            },
        };
        let line = DashboardView::from_snapshot(&snapshot, now).to_string();
        assert_eq!(
            line,
            "Total SOL Collected: 1,300.00 | Total $SMM Bought Back: 900,000.00 | Latest Buyback: 30.00 $SMM (2m ago)"
        );
    }
}
