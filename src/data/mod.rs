mod client;
mod generator;
mod provider;

pub use {
    client::HttpStatsClient,
    generator::{RandomSnapshotSource, generate_at},
    provider::{FetchFailure, InProcessFetcher, SnapshotFetcher, SnapshotSource},
};
