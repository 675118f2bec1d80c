use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

use crate::config::{FEED, NETWORK};
use crate::data::{FetchFailure, SnapshotFetcher};
use crate::domain::StatsSnapshot;

/// HTTP client for the `/api/stats` endpoint.
#[derive(Clone)]
pub struct HttpStatsClient {
    url: Url,
    http: reqwest::Client,
}

impl HttpStatsClient {
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base).with_context(|| format!("invalid base url '{}'", base))?;
        // Keep any path prefix: "http://host/app" serves stats at "/app/api/stats".
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        let url = base.join(FEED.endpoint_path.trim_start_matches('/'))?;
        let http = reqwest::Client::builder()
            .user_agent(NETWORK.client.user_agent)
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self { url, http })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SnapshotFetcher for HttpStatsClient {
    async fn fetch(&self) -> Result<StatsSnapshot, FetchFailure> {
        let resp = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        // Read as bytes first so a bad body shows up as Decode rather than Transport.
        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}
