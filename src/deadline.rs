//! Deadline formatting
//!
//! Pure functions shared by every screen that shows a task deadline:
//! - parsing ISO-8601 timestamps from the backend into instants
//! - rendering an instant in the viewer's calendar at minute granularity
//! - decomposing the time left until a deadline into days/hours/minutes
//!
//! Nothing here samples the wall clock. Callers pass `now` explicitly
//! (see [`crate::clock`]) and decide how often to re-render.

use crate::locale::Locale;
use crate::{Error, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

const MILLIS_PER_MINUTE: i64 = 60 * 1000;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Offset-less layouts accepted by the parsers, most specific first
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// How a local date-time is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeStyle {
    /// `YYYY-MM-DDTHH:mm`, the value format of a datetime input control
    Input,
    /// `YYYY-MM-DD HH:mm`, for read-only display
    Display,
}

impl DateTimeStyle {
    /// Separator placed between the date and time parts
    pub fn separator(&self) -> char {
        match self {
            Self::Input => 'T',
            Self::Display => ' ',
        }
    }
}

/// Parse a backend timestamp into an absolute instant
///
/// Accepts RFC 3339 (`2024-03-05T09:07:00Z`, `2024-03-05T18:07:00+09:00`),
/// offset-less date-times and bare dates. Values without an offset are
/// taken as UTC.
///
/// # Errors
/// Returns [`Error::InvalidTimestamp`] when the input matches none of the
/// accepted layouts.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    parse_in(raw, &Utc)
}

/// Parse a timestamp whose offset-less forms are wall-clock time in `tz`
///
/// This is the inverse of [`format_date_time_in`] with [`DateTimeStyle::Input`]:
/// the value a viewer typed into a datetime input is read back in their zone.
/// A wall-clock time skipped by a DST transition is rejected; an ambiguous
/// one resolves to the earlier instant.
///
/// # Errors
/// Returns [`Error::InvalidTimestamp`] when the input cannot be parsed or
/// does not exist in `tz`.
pub fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    let naive = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| Error::InvalidTimestamp(raw.to_string()))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| Error::InvalidTimestamp(raw.to_string()))
}

/// Render an instant in the given time zone at minute granularity
pub fn format_date_time_in<Tz: TimeZone>(
    instant: &DateTime<Utc>,
    tz: &Tz,
    style: DateTimeStyle,
) -> String {
    let local = instant.with_timezone(tz);

    format!(
        "{:04}-{:02}-{:02}{}{:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        style.separator(),
        local.hour(),
        local.minute()
    )
}

/// Render an instant in the system's local time zone
pub fn format_local_date_time(instant: &DateTime<Utc>, style: DateTimeStyle) -> String {
    format_date_time_in(instant, &Local, style)
}

/// Parse a backend timestamp and render it in the given time zone
///
/// # Errors
/// Returns [`Error::InvalidTimestamp`] when `raw` cannot be parsed.
pub fn format_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz, style: DateTimeStyle) -> Result<String> {
    let instant = parse_instant(raw)?;
    Ok(format_date_time_in(&instant, tz, style))
}

/// Time left until a deadline, split into calendar-free units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    /// Whole days
    pub days: i64,
    /// Whole hours after removing the days (0-23)
    pub hours: i64,
    /// Whole minutes after removing the hours (0-59)
    pub minutes: i64,
}

impl Remaining {
    /// Decompose `deadline - now`
    ///
    /// Returns `None` once the deadline has been reached (`deadline <= now`).
    /// Less than a minute left is still `Some`, with every field zero.
    pub fn between(deadline: &DateTime<Utc>, now: &DateTime<Utc>) -> Option<Self> {
        if deadline <= now {
            return None;
        }

        // Sub-millisecond remainders floor to zero but are still in the future
        let millis = deadline.signed_duration_since(*now).num_milliseconds();

        let days = millis / MILLIS_PER_DAY;
        let hours_total = millis / MILLIS_PER_HOUR;

        Some(Self {
            days,
            hours: hours_total - days * 24,
            minutes: (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
        })
    }

    /// Total whole seconds covered by the three fields
    pub fn as_seconds(&self) -> i64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60
    }
}

/// Render the time left until `deadline`, or the expired sentinel
pub fn format_remaining(deadline: &DateTime<Utc>, now: &DateTime<Utc>, locale: Locale) -> String {
    match Remaining::between(deadline, now) {
        Some(remaining) => locale.remaining(&remaining),
        None => locale.expired().to_string(),
    }
}
