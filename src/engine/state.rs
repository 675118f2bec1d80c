use crate::domain::StatsSnapshot;

/// Lifecycle of the live feed as seen by its consumers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedState {
    #[default]
    Uninitialized,
    AwaitingFirstFetch,
    HasValue(StatsSnapshot),
    /// Terminal. Keeps whatever was on screen when polling stopped.
    Stopped(Option<StatsSnapshot>),
}

impl FeedState {
    pub fn snapshot(&self) -> Option<&StatsSnapshot> {
        match self {
            FeedState::HasValue(s) => Some(s),
            FeedState::Stopped(last) => last.as_ref(),
            FeedState::Uninitialized | FeedState::AwaitingFirstFetch => None,
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, FeedState::Stopped(_))
    }

    /// Polling began. Only meaningful from `Uninitialized`.
    pub(crate) fn started(self) -> Self {
        match self {
            FeedState::Uninitialized => FeedState::AwaitingFirstFetch,
            other => other,
        }
    }

    /// A fetch finished, successfully or with the fallback already substituted.
    pub(crate) fn fetched(self, snapshot: StatsSnapshot) -> Self {
        match self {
            FeedState::Stopped(last) => FeedState::Stopped(last),
            _ => FeedState::HasValue(snapshot),
        }
    }

    pub(crate) fn stopped(self) -> Self {
        match self {
            FeedState::HasValue(s) => FeedState::Stopped(Some(s)),
            FeedState::Stopped(last) => FeedState::Stopped(last),
            FeedState::Uninitialized | FeedState::AwaitingFirstFetch => FeedState::Stopped(None),
        }
    }
}
