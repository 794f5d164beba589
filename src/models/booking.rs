use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// Booking request as submitted by the agent runtime
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub contact_number: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub attendee_email: Option<String>,
}

/// Per-conversation booking state, passed mutably into the booking flow.
/// The booking tool's entire effect on shared state is writing these four
/// fields; nothing here outlives the conversation turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingContext {
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl BookingContext {
    pub fn record(
        &mut self,
        name: &str,
        contact_number: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) {
        self.name = Some(name.to_string());
        self.contact_number = Some(contact_number.to_string());
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
    }
}

/// Outcome of a successful booking, carrying the normalized times that
/// were actually written to the calendar.
#[derive(Debug, Clone)]
pub struct BookedEvent {
    pub event_id: String,
    pub html_link: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

// Response structure for the booking endpoint
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_link: Option<String>,
}
