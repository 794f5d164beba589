use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::CalendarCredentials;
use crate::config::AppConfig;
use crate::error::ServiceError;
use crate::models::schedule::BusyInterval;

// Event bound: either a datetime (timed event) or a bare date (all-day)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "timeZone", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventTime {
    /// Timed bound with the configured timezone label attached.
    pub fn at(moment: NaiveDateTime, timezone: &str) -> Self {
        Self {
            date_time: Some(moment.format("%Y-%m-%dT%H:%M:%S").to_string()),
            date: None,
            time_zone: Some(timezone.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
}

#[derive(Debug, Deserialize)]
pub struct EventListResponse {
    #[serde(default)]
    pub items: Vec<EventItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderOverride {
    pub method: String,
    pub minutes: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventReminders {
    #[serde(rename = "useDefault")]
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

impl EventReminders {
    /// Email a day ahead plus a popup shortly before the appointment.
    pub fn email_and_popup() -> Self {
        Self {
            use_default: false,
            overrides: vec![
                ReminderOverride {
                    method: "email".to_string(),
                    minutes: 24 * 60,
                },
                ReminderOverride {
                    method: "popup".to_string(),
                    minutes: 30,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Attendee {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsertEventRequest {
    pub summary: String,
    pub description: String,
    pub start: EventTime,
    pub end: EventTime,
    pub reminders: EventReminders,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<Attendee>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedEvent {
    pub id: String,
    #[serde(rename = "htmlLink", default)]
    pub html_link: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Calendar collaborator boundary. Busy intervals are re-fetched on every
/// availability query; nothing is cached on this side of the seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalendarApi: Send + Sync {
    async fn list_busy(
        &self,
        time_min: NaiveDateTime,
        time_max: NaiveDateTime,
    ) -> Result<Vec<BusyInterval>, ServiceError>;

    async fn insert_event(
        &self,
        request: &InsertEventRequest,
    ) -> Result<CreatedEvent, ServiceError>;
}

/// Client for a Google-style calendar REST API
pub struct GoogleCalendarClient {
    client: Client,
    endpoint: String,
    calendar_id: String,
    access_token: String,
}

impl GoogleCalendarClient {
    /// Create a client from the application configuration, loading the
    /// credential artifact once at construction.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServiceError> {
        let credentials = CalendarCredentials::load(&config.calendar_token_path)?;

        Ok(Self {
            client: Client::new(),
            endpoint: config.calendar_endpoint.clone(),
            calendar_id: config.calendar_id.clone(),
            access_token: credentials.access_token,
        })
    }

    fn events_url(&self) -> String {
        format!("{}/calendars/{}/events", self.endpoint, self.calendar_id)
    }
}

#[async_trait]
impl CalendarApi for GoogleCalendarClient {
    async fn list_busy(
        &self,
        time_min: NaiveDateTime,
        time_max: NaiveDateTime,
    ) -> Result<Vec<BusyInterval>, ServiceError> {
        let url = self.events_url();

        info!(
            "Fetching calendar events between {} and {}",
            time_min, time_max
        );
        debug!("API URL: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                (
                    "timeMin",
                    format!("{}Z", time_min.format("%Y-%m-%dT%H:%M:%S")),
                ),
                (
                    "timeMax",
                    format!("{}Z", time_max.format("%Y-%m-%dT%H:%M:%S")),
                ),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ])
            .send()
            .await
            .map_err(|e| ServiceError::CalendarApi(format!("event list request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::CalendarApi(format!(
                "event list request returned status {}",
                status
            )));
        }

        let body = response
            .json::<EventListResponse>()
            .await
            .map_err(|e| ServiceError::CalendarApi(format!("malformed event list: {}", e)))?;

        info!("Retrieved {} calendar events", body.items.len());

        let mut busy = Vec::with_capacity(body.items.len());
        for item in &body.items {
            busy.push(parse_event_interval(item)?);
        }

        Ok(busy)
    }

    async fn insert_event(
        &self,
        request: &InsertEventRequest,
    ) -> Result<CreatedEvent, ServiceError> {
        let url = self.events_url();
        let send_updates = if request.attendees.is_some() {
            "all"
        } else {
            "none"
        };

        info!("Creating calendar event: {}", request.summary);
        debug!("API URL: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .query(&[("sendUpdates", send_updates)])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                ServiceError::CalendarApi(format!("event insert request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::CalendarApi(format!(
                "event insert request returned status {}",
                status
            )));
        }

        let created = response
            .json::<CreatedEvent>()
            .await
            .map_err(|e| ServiceError::CalendarApi(format!("malformed insert response: {}", e)))?;

        info!("Created calendar event with ID {}", created.id);
        Ok(created)
    }
}

/// Convert one event resource into a busy interval.
///
/// Timed bounds keep the wall-clock reading and drop the offset; all-day
/// bounds map to midnight, which with the API's exclusive end date yields a
/// full-day `[00:00, next day 00:00)` interval.
pub fn parse_event_interval(item: &EventItem) -> Result<BusyInterval, ServiceError> {
    let start = parse_event_time(&item.start)?;
    let end = parse_event_time(&item.end)?;
    Ok(BusyInterval { start, end })
}

fn parse_event_time(bound: &EventTime) -> Result<NaiveDateTime, ServiceError> {
    if let Some(date_time) = &bound.date_time {
        let parsed = DateTime::parse_from_rfc3339(date_time).map_err(|e| {
            ServiceError::CalendarApi(format!("invalid event datetime '{}': {}", date_time, e))
        })?;
        return Ok(parsed.naive_local());
    }

    if let Some(date) = &bound.date {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            ServiceError::CalendarApi(format!("invalid event date '{}': {}", date, e))
        })?;
        return Ok(parsed.and_time(NaiveTime::MIN));
    }

    Err(ServiceError::CalendarApi(
        "event bound has neither date nor dateTime".to_string(),
    ))
}
