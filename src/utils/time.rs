use chrono::{DateTime, Local};

pub fn format_clock_date(now: &DateTime<Local>) -> String {
    now.format("%A, %e %B %Y").to_string()
}

pub fn format_clock_time(now: &DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}
