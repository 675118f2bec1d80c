mod periodic;
mod poller;
mod state;

pub use periodic::PeriodicTask;
pub use poller::{PollerSettings, StatsPoller};
pub use state::FeedState;
