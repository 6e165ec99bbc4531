use chrono::{Duration, NaiveDate};

/// Countdown text such as `1d 02h 03m 04s`, `3h 05m 09s` or `7m 00s`.
/// Zero and negative durations render as `00s`.
pub fn format_countdown(left: Duration) -> String {
    if left <= Duration::zero() {
        return "00s".to_string();
    }
    let total = left.num_seconds();
    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{days}d {hours:02}h {minutes:02}m {seconds:02}s")
    } else if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}

/// Short UK style date: `Wed 6 Mar`.
pub fn format_nice(date: NaiveDate) -> String {
    date.format("%a %-d %b").to_string()
}

pub fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", format_nice(start), format_nice(end))
}

pub fn format_working_days(min: u32, max: u32) -> String {
    format!("{min}–{max} working days")
}

/// Escapes text for insertion through `innerHTML`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
