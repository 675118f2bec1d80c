use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

use crate::config::{FEED, RandomRange};
use crate::data::SnapshotSource;
use crate::domain::{LatestBuyback, StatsSnapshot, truncate_to_millis};

/// Placeholder source: base values nudged upwards by a random amount on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSnapshotSource;

impl RandomSnapshotSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SnapshotSource for RandomSnapshotSource {
    async fn snapshot(&self) -> Result<StatsSnapshot> {
        Ok(generate_at(Utc::now(), &mut rand::thread_rng()))
    }
}

fn draw<R: Rng + ?Sized>(range: &RandomRange, rng: &mut R) -> f64 {
    range.base + rng.gen_range(0.0..range.spread)
}

/// Build a snapshot as of `now`. Never fails.
pub fn generate_at<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> StatsSnapshot {
    let cfg = &FEED.generator;

    let max_age_ms = cfg.buyback_max_age.as_millis() as i64;
    let age_ms = rng.gen_range(0..max_age_ms);

    StatsSnapshot {
        total_sol_collected: draw(&cfg.total_sol_collected, rng),
        total_smm_bought: draw(&cfg.total_smm_bought, rng),
        latest_buyback: LatestBuyback {
            amount: draw(&cfg.buyback_amount, rng),
            // Truncate first so the result can never sit after `now`.
            timestamp: truncate_to_millis(now) - TimeDelta::milliseconds(age_ms),
        },
    }
}
