//! Time labels for the player.

use std::time::Duration;

/// `M:SS`, minutes unpadded and unbounded (`75:03`). Partial seconds are
/// dropped; negative and NaN inputs render as `0:00`.
pub fn positional(secs: f64) -> String {
    let total = whole_secs(secs);
    format!("{}:{:02}", total / 60, total % 60)
}

/// Time left as `-M:SS`.
pub fn remaining(position: Duration, duration: Duration) -> String {
    format!(
        "-{}",
        positional(duration.saturating_sub(position).as_secs_f64())
    )
}

/// Compact form such as `1m 10s` or `1h 5s`. Zero units are left out; a
/// zero duration is `0s`.
pub fn abbreviated(secs: f64) -> String {
    let total = whole_secs(secs);
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);

    let mut parts: Vec<String> = Vec::new();
    if h > 0 {
        parts.push(format!("{h}h"));
    }
    if m > 0 {
        parts.push(format!("{m}m"));
    }
    if s > 0 || parts.is_empty() {
        parts.push(format!("{s}s"));
    }
    parts.join(" ")
}

fn whole_secs(secs: f64) -> u64 {
    if secs.is_nan() || secs <= 0.0 {
        0
    } else {
        secs.floor() as u64
    }
}
