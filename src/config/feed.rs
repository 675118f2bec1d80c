//! Shape of the synthetic buyback feed: base values, random spreads and the fallback snapshot.
use std::time::Duration;

/// A base value plus a uniform offset drawn from `[0, spread)`.
pub struct RandomRange {
    pub base: f64,
    pub spread: f64,
}

impl RandomRange {
    pub const fn new(base: f64, spread: f64) -> Self {
        Self { base, spread }
    }
}

pub struct GeneratorConfig {
    pub total_sol_collected: RandomRange,
    pub total_smm_bought: RandomRange,
    pub buyback_amount: RandomRange,
    /// Latest buyback lands somewhere inside this window before "now".
    pub buyback_max_age: Duration,
}

/// Values shown when the live feed can't be reached.
pub struct FallbackConfig {
    pub total_sol_collected: f64,
    pub total_smm_bought: f64,
    pub buyback_amount: f64,
    pub buyback_age: Duration,
}

pub struct FeedConfig {
    pub generator: GeneratorConfig,
    pub fallback: FallbackConfig,
    pub poll_interval: Duration,
    pub endpoint_path: &'static str,
}

pub const FEED: FeedConfig = FeedConfig {
    generator: GeneratorConfig {
        total_sol_collected: RandomRange::new(1247.89, 100.0),
        total_smm_bought: RandomRange::new(892456.32, 10_000.0),
        buyback_amount: RandomRange::new(20.0, 50.0),
        buyback_max_age: Duration::from_secs(60 * 60),
    },
    fallback: FallbackConfig {
        total_sol_collected: 1247.89,
        total_smm_bought: 892456.32,
        buyback_amount: 23.45,
        buyback_age: Duration::from_secs(5 * 60),
    },
    poll_interval: Duration::from_secs(30), // Update every 30 seconds
    endpoint_path: "/api/stats",
};
