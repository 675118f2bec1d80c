use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
}

/// "N m ago", whole minutes rounded down.
pub fn format_time_ago_at(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (now - timestamp).num_milliseconds();
    let minutes = diff_ms.div_euclid(TimeUtils::MS_IN_MIN);
    format!("{}m ago", minutes)
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    format_time_ago_at(timestamp, Utc::now())
}

pub fn format_duration(ms: i64) -> String {
    let secs = ms / TimeUtils::MS_IN_S;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}
