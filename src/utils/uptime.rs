//! Human-readable uptime formatting.

use chrono::TimeDelta;

/// Formats a duration as `H:MM:SS[.ffffff]`, prefixed by `N day(s), ` once it
/// reaches a full day.
///
/// The fractional part is omitted when it is zero. Negative durations are
/// clamped to zero.
pub fn format_uptime(uptime: TimeDelta) -> String {
    let uptime = uptime.max(TimeDelta::zero());

    let days = uptime.num_days();
    let total_seconds = uptime.num_seconds();
    let hours = (total_seconds / 3600) % 24;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    let micros = uptime.subsec_nanos() / 1_000;

    let mut out = String::new();
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("{days} {unit}, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if micros > 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}
