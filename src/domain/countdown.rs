//! Registration deadline countdown.
//!
//! Everything here is a pure function of a deadline and a caller-supplied
//! `now`; the ticking lives in [`crate::ticker`] and in the UI subscription.

use super::error::{HackboardError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Below this a deadline is [`CountdownStatus::Urgent`].
pub const URGENT_THRESHOLD_MS: i64 = 24 * MS_PER_HOUR;
/// Below this a deadline is [`CountdownStatus::Soon`].
pub const SOON_THRESHOLD_MS: i64 = 72 * MS_PER_HOUR;

pub const CLOSED_TEXT: &str = "Registration closed";

// =============================================================================
// Types
// =============================================================================

/// Time left until a deadline.
///
/// `total_ms` is the raw difference and goes negative once the deadline has
/// passed. The decomposed fields are only meaningful while `total_ms > 0` and
/// are all zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRemaining {
    pub total_ms: i64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    /// The value used for deadlines that cannot be read.
    pub fn expired() -> Self {
        Self::default()
    }

    pub fn is_expired(&self) -> bool {
        self.total_ms <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountdownStatus {
    Expired,
    Urgent,
    Soon,
    Normal,
}

impl CountdownStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountdownStatus::Expired => "Closed",
            CountdownStatus::Urgent => "Closing soon",
            CountdownStatus::Soon => "This week",
            CountdownStatus::Normal => "Open",
        }
    }
}

impl fmt::Display for CountdownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Computation
// =============================================================================

pub fn compute_time_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let total_ms = (deadline - now).num_milliseconds();
    if total_ms <= 0 {
        return TimeRemaining {
            total_ms,
            ..Default::default()
        };
    }

    let mut rest = total_ms;
    let days = rest / MS_PER_DAY;
    rest %= MS_PER_DAY;
    let hours = rest / MS_PER_HOUR;
    rest %= MS_PER_HOUR;
    let minutes = rest / MS_PER_MINUTE;
    rest %= MS_PER_MINUTE;
    let seconds = rest / MS_PER_SECOND;

    // All quotients are of a positive dividend, so the casts cannot wrap.
    TimeRemaining {
        total_ms,
        days: days as u64,
        hours: hours as u64,
        minutes: minutes as u64,
        seconds: seconds as u64,
    }
}

/// Like [`compute_time_remaining`] for a deadline still in text form. An
/// unreadable deadline counts as already passed.
pub fn time_remaining_until(deadline: &str, now: DateTime<Utc>) -> TimeRemaining {
    parse_timestamp(deadline)
        .map(|deadline| compute_time_remaining(deadline, now))
        .unwrap_or_else(|_| TimeRemaining::expired())
}

pub fn classify_status(remaining: &TimeRemaining) -> CountdownStatus {
    match remaining.total_ms {
        t if t <= 0 => CountdownStatus::Expired,
        t if t < URGENT_THRESHOLD_MS => CountdownStatus::Urgent,
        t if t < SOON_THRESHOLD_MS => CountdownStatus::Soon,
        _ => CountdownStatus::Normal,
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Short card text: the two largest non-zero units.
pub fn format_countdown(remaining: &TimeRemaining) -> String {
    if remaining.is_expired() {
        return CLOSED_TEXT.to_string();
    }

    let TimeRemaining {
        days,
        hours,
        minutes,
        seconds,
        ..
    } = *remaining;

    if days > 0 {
        format!("in {days}d {hours}h")
    } else if hours > 0 {
        format!("in {hours}h {minutes}m")
    } else if minutes > 0 {
        format!("in {minutes}m {seconds}s")
    } else {
        format!("in {seconds}s")
    }
}

/// Full clock for the detail page, e.g. `3d 04h 09m 15s`.
pub fn format_countdown_clock(remaining: &TimeRemaining) -> String {
    if remaining.is_expired() {
        return CLOSED_TEXT.to_string();
    }
    format!(
        "{}d {:02}h {:02}m {:02}s",
        remaining.days, remaining.hours, remaining.minutes, remaining.seconds
    )
}

// =============================================================================
// Timestamps
// =============================================================================

/// Parse the timestamp shapes the backend emits: RFC 3339, Postgres-style
/// `2026-10-16 12:00:00+00`, naive date-times (taken as UTC) and bare dates
/// (UTC midnight).
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return Err(HackboardError::Parse("empty timestamp".to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| HackboardError::Parse(format!("{value:?}: {e}")))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Human date for the detail page. Unreadable input is shown as-is.
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// Date and time, for the deadline line.
pub fn format_date_time(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%b %-d, %Y %H:%M UTC").to_string())
        .unwrap_or_else(|_| value.to_string())
}
