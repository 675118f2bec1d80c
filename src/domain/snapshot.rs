use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FEED;

/// One immutable reading of the buyback dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_sol_collected: f64,
    pub total_smm_bought: f64,
    pub latest_buyback: LatestBuyback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestBuyback {
    pub amount: f64,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl StatsSnapshot {
    /// The fixed substitute shown whenever live retrieval fails.
    /// Only the timestamp moves: it is always `buyback_age` before `now`.
    pub fn fallback_at(now: DateTime<Utc>) -> Self {
        let fb = &FEED.fallback;
        let age = TimeDelta::from_std(fb.buyback_age).unwrap_or(TimeDelta::zero());
        Self {
            total_sol_collected: fb.total_sol_collected,
            total_smm_bought: fb.total_smm_bought,
            latest_buyback: LatestBuyback {
                amount: fb.buyback_amount,
                timestamp: truncate_to_millis(now - age),
            },
        }
    }

    pub fn fallback() -> Self {
        Self::fallback_at(Utc::now())
    }
}

/// Drop sub-millisecond precision so a value survives a trip through the wire format unchanged.
pub fn truncate_to_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).unwrap_or(ts)
}

// --- SERDE ---
// Wire format is ISO 8601 with millisecond precision and a `Z` suffix,
// e.g. "2025-01-01T12:00:00.000Z". Any RFC 3339 string is accepted on the way in.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
