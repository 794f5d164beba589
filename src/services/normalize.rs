use chrono::{DateTime, Datelike, NaiveDateTime};
use tracing::info;

use crate::error::ServiceError;

/// Parse a timestamp as naive local wall-clock time.
///
/// Offset-bearing RFC 3339 timestamps keep their wall-clock reading and
/// drop the zone; bare timestamps are accepted in a few common layouts.
pub fn parse_flexible_datetime(raw: &str) -> Result<NaiveDateTime, ServiceError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.naive_local());
    }

    const LAYOUTS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    for layout in LAYOUTS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(parsed);
        }
    }

    Err(ServiceError::InvalidTimestamp(raw.to_string()))
}

/// Correct a "year in the past" mistake and reject genuinely past times.
///
/// A year earlier than the current one usually means the speaker omitted or
/// mistyped it while talking about a near-future date: re-anchor to the
/// current year, or the next one if that moment has already gone by. A
/// rewrite that lands on no valid calendar date (Feb 29 into a common year)
/// falls through to the next candidate. Business hours and weekends are not
/// checked here.
pub fn normalize_datetime(
    dt: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, ServiceError> {
    let mut corrected = dt;

    if dt.year() < now.year() {
        corrected = match dt.with_year(now.year()) {
            Some(this_year) if this_year >= now => this_year,
            _ => dt
                .with_year(now.year() + 1)
                .ok_or(ServiceError::PastDatetime { requested: dt, now })?,
        };
        info!("Auto-corrected year: {} -> {}", dt, corrected);
    }

    if corrected < now {
        return Err(ServiceError::PastDatetime {
            requested: corrected,
            now,
        });
    }

    Ok(corrected)
}

/// Booking precondition: the appointment must end after it starts.
pub fn validate_range(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), ServiceError> {
    if end <= start {
        return Err(ServiceError::InvalidRange { start, end });
    }
    Ok(())
}
