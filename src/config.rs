use std::env;

use chrono::NaiveTime;

use crate::error::ServiceError;

/// Daily window within which free slots are computed. Hours outside the
/// window never produce availability, busy or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub opening: NaiveTime,
    pub closing: NaiveTime,
}

impl BusinessHours {
    /// Build from whole opening/closing hours, e.g. `new(9, 17)` for 9-5.
    /// The closing hour is exclusive.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, ServiceError> {
        if start_hour >= end_hour {
            return Err(ServiceError::Config(format!(
                "BUSINESS_HOURS_START ({}) must be earlier than BUSINESS_HOURS_END ({})",
                start_hour, end_hour
            )));
        }
        let opening = NaiveTime::from_hms_opt(start_hour, 0, 0).ok_or_else(|| {
            ServiceError::Config(format!(
                "BUSINESS_HOURS_START must be an hour between 0 and 23, got {}",
                start_hour
            ))
        })?;
        let closing = NaiveTime::from_hms_opt(end_hour, 0, 0).ok_or_else(|| {
            ServiceError::Config(format!(
                "BUSINESS_HOURS_END must be an hour between 1 and 23, got {}",
                end_hour
            ))
        })?;
        Ok(Self { opening, closing })
    }
}

/// Process-wide configuration, built once at startup from the environment
/// and passed to the components that need it. No component reads the
/// environment after construction.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub business_hours: BusinessHours,
    pub timezone: String,
    pub days_to_check: u32,
    pub calendar_endpoint: String,
    pub calendar_id: String,
    pub calendar_token_path: String,
    pub classifier_endpoint: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServiceError> {
        let start_hour = read_numeric("BUSINESS_HOURS_START", 9)?;
        let end_hour = read_numeric("BUSINESS_HOURS_END", 17)?;
        let business_hours = BusinessHours::new(start_hour, end_hour)?;

        let days_to_check = read_numeric("DAYS_TO_CHECK", 7)?;
        if days_to_check == 0 {
            return Err(ServiceError::Config(
                "DAYS_TO_CHECK must be at least 1".to_string(),
            ));
        }

        let classifier_endpoint = env::var("CLASSIFIER_API_ENDPOINT").map_err(|_| {
            ServiceError::Config(
                "CLASSIFIER_API_ENDPOINT must be set in environment".to_string(),
            )
        })?;

        Ok(Self {
            business_hours,
            timezone: env::var("TIMEZONE").unwrap_or_else(|_| "Asia/Manila".to_string()),
            days_to_check,
            calendar_endpoint: env::var("CALENDAR_API_ENDPOINT")
                .unwrap_or_else(|_| "https://www.googleapis.com/calendar/v3".to_string()),
            calendar_id: env::var("CALENDAR_ID").unwrap_or_else(|_| "primary".to_string()),
            calendar_token_path: env::var("CALENDAR_TOKEN_PATH")
                .unwrap_or_else(|_| "token.json".to_string()),
            classifier_endpoint,
        })
    }
}

fn read_numeric(name: &str, default: u32) -> Result<u32, ServiceError> {
    match env::var(name) {
        Ok(value) => value.trim().parse::<u32>().map_err(|_| {
            ServiceError::Config(format!("{} must be a number, got '{}'", name, value))
        }),
        Err(_) => Ok(default),
    }
}
