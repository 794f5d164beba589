use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::client::{Attendee, CalendarApi, EventReminders, EventTime, InsertEventRequest};
use crate::config::AppConfig;
use crate::error::ServiceError;
use crate::models::booking::{BookedEvent, BookingContext, BookingRequest};
use crate::services::normalize::{normalize_datetime, parse_flexible_datetime, validate_range};

/// Book an appointment: normalize both bounds, validate the range, record
/// the booking fields on the conversation context, and create the calendar
/// event.
///
/// The context write happens before the calendar call so a failed insert
/// still leaves the conversation aware of what was attempted.
pub async fn book_appointment(
    calendar: &dyn CalendarApi,
    config: &AppConfig,
    context: &mut BookingContext,
    request: &BookingRequest,
    now: NaiveDateTime,
) -> Result<BookedEvent, ServiceError> {
    let start_time = normalize_datetime(parse_flexible_datetime(&request.start_time)?, now)?;
    let end_time = normalize_datetime(parse_flexible_datetime(&request.end_time)?, now)?;
    validate_range(start_time, end_time)?;

    context.record(&request.name, &request.contact_number, start_time, end_time);

    let event = InsertEventRequest {
        summary: format!("Appointment: {}", request.name),
        description: format!(
            "Customer: {}\nContact: {}",
            request.name, request.contact_number
        ),
        start: EventTime::at(start_time, &config.timezone),
        end: EventTime::at(end_time, &config.timezone),
        reminders: EventReminders::email_and_popup(),
        attendees: request
            .attendee_email
            .as_ref()
            .map(|email| vec![Attendee {
                email: email.clone(),
            }]),
    };

    debug!(
        "Creating appointment event: start={}, end={}, duration={} mins",
        start_time,
        end_time,
        (end_time - start_time).num_minutes()
    );
    info!(
        "Booking appointment for {} from {} to {}",
        request.name, start_time, end_time
    );

    let created = calendar.insert_event(&event).await?;

    info!(
        "Successfully booked appointment with event ID {}",
        created.id
    );

    Ok(BookedEvent {
        event_id: created.id,
        html_link: created.html_link,
        start_time,
        end_time,
    })
}
