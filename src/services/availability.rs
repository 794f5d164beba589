use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use tracing::debug;

use crate::client::CalendarApi;
use crate::config::{AppConfig, BusinessHours};
use crate::error::ServiceError;
use crate::models::schedule::{BusyInterval, DayAvailability, FreeSlot};

/// Days excluded from the availability window.
pub const WEEKEND_DAYS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

pub const NO_AVAILABILITY_MESSAGE: &str = "No available slots found in the requested window.";

pub fn is_weekend(date: NaiveDate) -> bool {
    WEEKEND_DAYS.contains(&date.weekday())
}

/// Compute free slots per business day over `[window_start, window_start + num_days)`.
///
/// A busy interval is considered on every day its start or end date touches,
/// so one spanning midnight shows up on both boundary days; clamping to the
/// business window then restricts its contribution to each day. Overlapping
/// busy intervals are absorbed by the cursor without emitting negative-length
/// gaps. Days with no free slot are omitted.
pub fn compute_free_slots(
    busy: &[BusyInterval],
    window_start: NaiveDate,
    num_days: u32,
    hours: BusinessHours,
) -> Vec<DayAvailability> {
    let mut days = Vec::new();

    for day_offset in 0..num_days {
        let current = window_start + Duration::days(i64::from(day_offset));

        if is_weekend(current) {
            continue;
        }

        let day_start = current.and_time(hours.opening);
        let day_end = current.and_time(hours.closing);

        let mut day_busy: Vec<&BusyInterval> = busy
            .iter()
            .filter(|interval| {
                interval.start.date() == current || interval.end.date() == current
            })
            .collect();
        day_busy.sort_by_key(|interval| interval.start);

        debug!(
            "Computing slots for {}: {} busy intervals touch the day",
            current,
            day_busy.len()
        );

        let mut slots = Vec::new();
        let mut cursor = day_start;

        for interval in day_busy {
            // Clamp into the business window; spans entirely outside it
            // collapse to zero length and contribute nothing.
            let busy_start = interval.start.clamp(day_start, day_end);
            let busy_end = interval.end.clamp(day_start, day_end);

            if busy_start > cursor {
                slots.push(FreeSlot {
                    start: cursor,
                    end: busy_start,
                });
            }

            cursor = cursor.max(busy_end);
        }

        if cursor < day_end {
            slots.push(FreeSlot {
                start: cursor,
                end: day_end,
            });
        }

        if !slots.is_empty() {
            days.push(DayAvailability {
                date: current,
                slots,
            });
        }
    }

    days
}

/// Render availability as a stable human-readable report: one header per
/// day, one line per free slot in 12-hour clock format.
pub fn format_availability(days: &[DayAvailability]) -> String {
    if days.is_empty() {
        return NO_AVAILABILITY_MESSAGE.to_string();
    }

    let mut lines = vec!["Available schedule:".to_string(), String::new()];

    for day in days {
        lines.push(format!("{}:", day.date.format("%A, %B %d")));
        for slot in &day.slots {
            lines.push(format!(
                "  - {} - {}",
                slot.start.format("%-I:%M %p"),
                slot.end.format("%-I:%M %p")
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Fetch busy times for the configured window and produce the formatted
/// availability report. Busy intervals are derived fresh from the calendar
/// on every call.
pub async fn availability_report(
    calendar: &dyn CalendarApi,
    config: &AppConfig,
    now: NaiveDateTime,
) -> Result<String, ServiceError> {
    let window_start = now.date();
    let fetch_start = window_start.and_time(NaiveTime::MIN);
    let fetch_end = fetch_start + Duration::days(i64::from(config.days_to_check));

    let busy = calendar.list_busy(fetch_start, fetch_end).await?;

    let days = compute_free_slots(
        &busy,
        window_start,
        config.days_to_check,
        config.business_hours,
    );

    Ok(format_availability(&days))
}
