//! HTTP surface for the stats feed: `GET /api/stats`.
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::{future::Future, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

use crate::config::FEED;
use crate::data::SnapshotSource;

pub type SharedSource = Arc<dyn SnapshotSource>;

pub fn router(source: SharedSource) -> Router {
    Router::new()
        .route(FEED.endpoint_path, get(get_stats))
        .with_state(source)
}

async fn get_stats(State(source): State<SharedSource>) -> Response {
    match source.snapshot().await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => {
            // The random source can't get here; a real data source can.
            log::error!("❌ Snapshot source failed: {:#}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "error": "stats unavailable" })),
            )
                .into_response()
        }
    }
}

pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind stats server to {}", addr))
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, source: SharedSource, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = listener.local_addr()?;
    log::info!("🚀 Stats endpoint live at http://{}{}", addr, FEED.endpoint_path);

    axum::serve(listener, router(source))
        .with_graceful_shutdown(shutdown)
        .await
        .context("stats server stopped unexpectedly")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RandomSnapshotSource;
    use crate::domain::StatsSnapshot;
    use async_trait::async_trait;

    struct Offline;

    #[async_trait]
    impl SnapshotSource for Offline {
        async fn snapshot(&self) -> Result<StatsSnapshot> {
            anyhow::bail!("indexer offline")
        }
    }

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn stats_handler_returns_snapshot_json() {
        let resp = get_stats(State(Arc::new(RandomSnapshotSource::new()) as SharedSource)).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert!(json["totalSolCollected"].as_f64().unwrap() >= 1247.89);
        assert!(json["totalSmmBought"].as_f64().unwrap() >= 892456.32);
        assert!(json["latestBuyback"]["amount"].as_f64().unwrap() >= 20.0);
        assert!(json["latestBuyback"]["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn failing_source_maps_to_503() {
        let resp = get_stats(State(Arc::new(Offline) as SharedSource)).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(resp).await["error"], "stats unavailable");
    }
}
