use futures::future::BoxFuture;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Runs a job now and then once per `period` until cancelled.
///
/// A job is always awaited before the next tick is taken, so runs never overlap.
/// Cancelling drops a run that is still in flight.
pub struct PeriodicTask {
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    pub fn spawn<F>(period: Duration, mut job: F) -> Self
    where
        F: FnMut() -> BoxFuture<'static, ()> + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            // `interval` rejects a zero period.
            let mut ticker = time::interval(period.max(Duration::from_millis(1)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = async {
                        ticker.tick().await;
                        job().await;
                    } => {}
                }
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stop scheduling. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            // Receiver is gone only if the loop already ended.
            let _ = tx.send(());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop_tx.is_none()
    }

    /// Cancel and wait for the loop to wind down.
    pub async fn join(mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    log::error!("periodic task panicked: {}", e);
                }
            }
        }
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
