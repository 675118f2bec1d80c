use chrono::{DateTime, Utc};
use futures::FutureExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use super::periodic::PeriodicTask;
use super::state::FeedState;

use crate::config::FEED;
use crate::data::SnapshotFetcher;
use crate::domain::StatsSnapshot;
use crate::utils::format_duration;

#[derive(Debug, Clone, Copy)]
pub struct PollerSettings {
    pub interval: Duration,
    /// Wall clock used to date the fallback snapshot.
    pub clock: fn() -> DateTime<Utc>,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            interval: FEED.poll_interval,
            clock: Utc::now,
        }
    }
}

/// Keeps the freshest buyback stats in a single-writer cell.
///
/// The poller's own task is the only writer. Consumers get read-only
/// `watch::Receiver`s from [`StatsPoller::subscribe`]. A failed fetch never
/// reaches them: the fallback snapshot is written in its place.
pub struct StatsPoller {
    fetcher: Arc<dyn SnapshotFetcher>,
    settings: PollerSettings,
    state_tx: Arc<watch::Sender<FeedState>>,
    task: Option<PeriodicTask>,
}

impl StatsPoller {
    pub fn new(fetcher: Arc<dyn SnapshotFetcher>, settings: PollerSettings) -> Self {
        let (state_tx, _) = watch::channel(FeedState::Uninitialized);
        Self {
            fetcher,
            settings,
            state_tx: Arc::new(state_tx),
            task: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> FeedState {
        self.state_tx.borrow().clone()
    }

    pub fn current(&self) -> Option<StatsSnapshot> {
        self.state_tx.borrow().snapshot().cloned()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Fetch now, then once per interval. Does nothing if already running or stopped.
    pub fn start(&mut self) {
        if self.task.is_some() || self.state_tx.borrow().is_stopped() {
            return;
        }
        self.state_tx
            .send_modify(|state| *state = std::mem::take(state).started());

        log::info!(
            "📡 Polling buyback stats every {}",
            format_duration(self.settings.interval.as_millis() as i64)
        );

        let fetcher = self.fetcher.clone();
        let state_tx = self.state_tx.clone();
        let clock = self.settings.clock;
        self.task = Some(PeriodicTask::spawn(self.settings.interval, move || {
            let fetcher = fetcher.clone();
            let state_tx = state_tx.clone();
            async move { refresh(fetcher.as_ref(), &state_tx, clock).await }.boxed()
        }));
    }

    /// Cancel the schedule and freeze the state. No fetch runs after this returns.
    pub async fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.join().await;
        }
        self.state_tx
            .send_modify(|state| *state = std::mem::take(state).stopped());
        log::info!("🛑 Stats polling stopped");
    }
}

/// One poll: fetch and replace the state wholesale. Failures become the fallback snapshot.
async fn refresh(
    fetcher: &dyn SnapshotFetcher,
    state_tx: &watch::Sender<FeedState>,
    clock: fn() -> DateTime<Utc>,
) {
    let snapshot = match fetcher.fetch().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::debug!("Stats fetch failed, showing fallback: {}", e);
            StatsSnapshot::fallback_at(clock())
        }
    };
    state_tx.send_modify(|state| *state = std::mem::take(state).fetched(snapshot));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FetchFailure;
    use async_trait::async_trait;

    struct Broken;

    #[async_trait]
    impl SnapshotFetcher for Broken {
        async fn fetch(&self) -> Result<StatsSnapshot, FetchFailure> {
            Err(FetchFailure::Status(500))
        }
    }

    #[test]
    fn default_interval_is_thirty_seconds() {
        assert_eq!(PollerSettings::default().interval, Duration::from_millis(30_000));
    }

    #[tokio::test]
    async fn new_poller_is_uninitialized() {
        let poller = StatsPoller::new(Arc::new(Broken), PollerSettings::default());
        assert_eq!(poller.state(), FeedState::Uninitialized);
        assert!(poller.current().is_none());
        assert!(!poller.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_poller_cannot_be_restarted() {
        let mut poller = StatsPoller::new(Arc::new(Broken), PollerSettings::default());
        poller.stop().await;
        poller.start();
        assert!(!poller.is_running());
        assert_eq!(poller.state(), FeedState::Stopped(None));
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_writes_fallback_on_failure() {
        let (tx, rx) = watch::channel(FeedState::AwaitingFirstFetch);
        refresh(&Broken, &tx, Utc::now).await;
        let state = rx.borrow().clone();
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.total_sol_collected, 1247.89);
        assert_eq!(snapshot.latest_buyback.amount, 23.45);
    }
}
