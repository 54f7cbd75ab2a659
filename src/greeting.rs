use std::time::Duration;
use time::{OffsetDateTime, UtcOffset};

/// How often the empty-chat greeting is recomputed.
pub const GREETING_REFRESH: Duration = Duration::from_secs(60);

pub fn greeting_for_hour(hour: u8) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn greeting_line(now: OffsetDateTime, user_name: Option<&str>) -> String {
    let greeting = greeting_for_hour(now.hour());
    match user_name {
        Some(name) => format!("{greeting}, {name}"),
        None => greeting.to_string(),
    }
}

/// Greeting for the current local time (UTC where the local offset is unavailable).
pub fn current_greeting(user_name: Option<&str>) -> String {
    let mut now = OffsetDateTime::now_utc();
    if let Ok(offset) = UtcOffset::current_local_offset() {
        now = now.to_offset(offset);
    }
    greeting_line(now, user_name)
}
