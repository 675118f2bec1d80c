use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::StatsSnapshot;

/// Where the server gets its numbers from.
///
/// The random generator is the only implementation today. A ledger or indexer
/// backed source slots in here without the poller or the dashboard noticing.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn snapshot(&self) -> Result<StatsSnapshot>;
}

/// Client-side retrieval of a snapshot, as seen by the poller.
#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    async fn fetch(&self) -> Result<StatsSnapshot, FetchFailure>;
}

/// The one error the poller knows about. Variants only exist for the logs;
/// every one of them is handled the same way.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered {0}")]
    Status(u16),
    #[error("malformed stats body: {0}")]
    Decode(String),
}

/// Lets a local source be polled directly, skipping HTTP.
pub struct InProcessFetcher<S> {
    source: S,
}

impl<S: SnapshotSource> InProcessFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S: SnapshotSource> SnapshotFetcher for InProcessFetcher<S> {
    async fn fetch(&self) -> Result<StatsSnapshot, FetchFailure> {
        self.source
            .snapshot()
            .await
            .map_err(|e| FetchFailure::Transport(format!("{:#}", e)))
    }
}
