// Short relative labels for note timestamps ("Today", "Yesterday", "Feb 11")
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

pub const TODAY: &str = "Today";
pub const YESTERDAY: &str = "Yesterday";
pub const INVALID_DATE: &str = "Invalid Date";

const SHORT_FORMAT: &str = "%b %-d";

/// Label a timestamp against an explicit "now".
///
/// The timestamp is moved into `now`'s time zone and compared by calendar
/// date, so the time of day never matters. Empty input gives an empty label;
/// input that cannot be parsed gives "Invalid Date".
pub fn label_at<Tz: TimeZone>(timestamp: Option<&str>, now: &DateTime<Tz>) -> String {
    let raw = match timestamp.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    let Some(date) = calendar_date(raw, &now.timezone()) else {
        tracing::debug!("Unparsable timestamp: {}", raw);
        return INVALID_DATE.to_string();
    };

    let today = now.date_naive();
    if date == today {
        TODAY.to_string()
    } else if today.pred_opt() == Some(date) {
        YESTERDAY.to_string()
    } else {
        date.format(SHORT_FORMAT).to_string()
    }
}

// ISO 8601 shapes RFC 3339 rejects: basic offsets, hour-only offsets, no seconds.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn calendar_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let with_offset = DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(raw, format).ok())
    });
    if let Some(instant) = with_offset {
        return Some(instant.with_timezone(tz).date_naive());
    }
    // Without an offset the wall-clock time is already local to `tz`.
    if let Some(naive) = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(naive.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
