use chrono::NaiveDateTime;
use thiserror::Error;

/// Error kinds surfaced by the scheduling core.
///
/// Every variant resolves to a short human-readable string via
/// [`ServiceError::user_message`]; handlers log the full error and return
/// only that string to the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("calendar credentials not found at {path}")]
    CredentialsMissing { path: String },

    #[error("calendar API error: {0}")]
    CalendarApi(String),

    #[error("requested time {requested} is in the past (now: {now})")]
    PastDatetime {
        requested: NaiveDateTime,
        now: NaiveDateTime,
    },

    #[error("end time {end} must be after start time {start}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("unrecognized timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("classification failed: {0}")]
    Classification(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ServiceError {
    /// Short message suitable for the end user. Never contains request
    /// internals beyond the timestamps the caller already supplied.
    pub fn user_message(&self) -> String {
        match self {
            Self::CredentialsMissing { path } => format!(
                "Calendar credentials not found. Place an authorized token file at '{}' and restart the service.",
                path
            ),
            Self::CalendarApi(_) => {
                "The calendar service could not be reached. Please try again shortly.".to_string()
            }
            Self::PastDatetime { requested, .. } => format!(
                "Cannot book appointments in the past. Requested time: {}.",
                requested
            ),
            Self::InvalidRange { start, end } => format!(
                "End time ({}) must be after start time ({}).",
                end, start
            ),
            Self::InvalidTimestamp(raw) => format!(
                "The timestamp '{}' could not be understood. Use an ISO-8601 date and time.",
                raw
            ),
            Self::Classification(_) => {
                "Request screening is temporarily unavailable; the request was allowed and flagged for review."
                    .to_string()
            }
            Self::Config(message) => message.clone(),
        }
    }
}
