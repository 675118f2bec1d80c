mod snapshot;

pub use snapshot::{LatestBuyback, StatsSnapshot, truncate_to_millis};
