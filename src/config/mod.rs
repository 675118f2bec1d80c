//! Configuration module for the stats feed.

// Can all be private now because we have a public re-export.
mod feed;
mod network;

// Re-export commonly used items
pub use feed::{FEED, FallbackConfig, FeedConfig, GeneratorConfig, RandomRange};
pub use network::{ClientDefaults, NETWORK, NetworkConfig, ServerDefaults};
