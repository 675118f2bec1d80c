// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod server;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use data::{
    FetchFailure, HttpStatsClient, RandomSnapshotSource, SnapshotFetcher, SnapshotSource,
};
pub use domain::{LatestBuyback, StatsSnapshot};
pub use engine::{FeedState, PollerSettings, StatsPoller};
pub use ui::DashboardView;

// CLI argument parsing
use clap::{Parser, Subcommand};

use crate::config::NETWORK;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Swift Market Maker live buyback stats feed", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve randomized buyback stats at /api/stats
    Serve {
        /// Address to listen on
        #[arg(long, default_value = NETWORK.server.bind_addr)]
        bind: String,
    },
    /// Poll a stats endpoint and log the dashboard whenever it changes
    Watch {
        /// Base URL of the stats server; any path prefix is kept (".../app" polls ".../app/api/stats")
        #[arg(long, default_value = NETWORK.client.base_url)]
        url: String,
        /// Poll interval in milliseconds
        #[arg(
            long,
            default_value_t = crate::config::FEED.poll_interval.as_millis() as u64,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        interval_ms: u64,
        /// Per-request timeout in milliseconds
        #[arg(long, default_value_t = NETWORK.client.timeout_ms)]
        timeout_ms: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_defaults() {
        let cli = Cli::try_parse_from(["smm-stats", "watch"]).unwrap();
        match cli.command {
            Command::Watch {
                url,
                interval_ms,
                timeout_ms,
            } => {
                assert_eq!(url, "http://127.0.0.1:3000");
                assert_eq!(interval_ms, 30_000);
                assert_eq!(timeout_ms, 5000);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Cli::try_parse_from(["smm-stats", "watch", "--interval-ms", "0"]).is_err());
    }

    #[test]
    fn serve_bind_override() {
        let cli = Cli::try_parse_from(["smm-stats", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { bind } if bind == "0.0.0.0:8080"));
    }
}
