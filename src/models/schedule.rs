use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A calendar-blocked time range in naive local time, half-open
/// `[start, end)`. All-day events arrive as `[00:00, next day 00:00)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A gap within business hours not covered by any busy interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Free slots for one business day, in chronological order. Days without
/// any free slot are omitted from availability results entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub slots: Vec<FreeSlot>,
}

// Response structure for the availability endpoint
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub success: bool,
    pub report: String,
}
