use chrono::{DateTime, Utc};

/// Table display of a finish timestamp, e.g. `Tue Nov 14 2023 10:13 PM`.
#[must_use]
pub fn format_finish_time(value: DateTime<Utc>) -> String {
    value.format("%a %b %d %Y %-I:%M %p").to_string()
}

/// Human form of a session length in seconds: "<M> minute(s) <S>
/// second(s)", dropping a zero clause entirely. Zero seconds total is the
/// empty string.
#[must_use]
pub fn format_length(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::new();
    if minutes > 0 {
        parts.push(format!(
            "{minutes} minute{}",
            if minutes == 1 { "" } else { "s" }
        ));
    }
    if seconds > 0 {
        parts.push(format!(
            "{seconds} second{}",
            if seconds == 1 { "" } else { "s" }
        ));
    }
    parts.join(" ")
}
