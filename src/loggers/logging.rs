use crate::config::FormatItem;
use crate::Severity;
use time::{OffsetDateTime, UtcOffset};

#[inline(always)]
pub fn write_time(format: &'static [FormatItem<'static>], offset: UtcOffset) -> String {
    let time = OffsetDateTime::now_utc().to_offset(offset);
    // An OffsetDateTime carries every component a description can ask for
    time.format(format).unwrap_or_default()
}

/// `[time] Name: LEVEL:`, the part of a line that precedes the message
#[inline(always)]
pub fn write_prefix(time: &str, name: Option<&str>, severity: Severity) -> String {
    match name {
        Some(name) => format!("[{}] {}: {}:", time, name, severity),
        None => format!("[{}] {}:", time, severity),
    }
}
