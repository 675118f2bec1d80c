mod format;
mod time_utils;

pub use format::format_number;
pub use time_utils::{TimeUtils, format_duration, format_time_ago, format_time_ago_at};
