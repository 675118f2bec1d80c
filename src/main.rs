use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::{sync::Arc, time::Duration};

use smm_stats::{
    Cli, Command, DashboardView, FeedState, HttpStatsClient, PollerSettings,
    RandomSnapshotSource, StatsPoller, server,
};

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    // RUST_LOG, when set, wins over the defaults above.
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("smm_stats"), my_code_level)
        .parse_default_env()
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("👋 Shutting down...");
}

async fn run_serve(bind: &str) -> Result<()> {
    let listener = server::bind(bind).await?;
    server::serve(listener, Arc::new(RandomSnapshotSource::new()), shutdown_signal()).await
}

async fn run_watch(url: &str, interval_ms: u64, timeout_ms: u64) -> Result<()> {
    let client = HttpStatsClient::new(url, Duration::from_millis(timeout_ms))?;
    log::info!("Watching {}", client.url());

    let settings = PollerSettings {
        interval: Duration::from_millis(interval_ms),
        ..Default::default()
    };
    let mut poller = StatsPoller::new(Arc::new(client), settings);
    let mut rx = poller.subscribe();
    poller.start();

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                if let FeedState::HasValue(_) = state {
                    log::info!("📊 {}", DashboardView::from_state(&state, Utc::now()));
                }
            }
        }
    }

    poller.stop().await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    init_log();

    let args = Cli::parse();
    match args.command {
        Command::Serve { bind } => run_serve(&bind).await,
        Command::Watch {
            url,
            interval_ms,
            timeout_ms,
        } => run_watch(&url, interval_ms, timeout_ms).await,
    }
}
