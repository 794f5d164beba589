use axum::{
    extract::{Json as ExtractJson, State},
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::classifier::TextClassifier;
use crate::client::CalendarApi;
use crate::config::AppConfig;
use crate::error::ServiceError;
use crate::models::booking::{BookingContext, BookingRequest, BookingResponse};
use crate::models::guardrail::{GuardrailInput, ScreenResponse};
use crate::models::schedule::AvailabilityResponse;
use crate::services::availability::availability_report;
use crate::services::booking::book_appointment;
use crate::services::guardrail::screen_input;

// AppState struct containing shared resources
pub struct AppState {
    pub config: AppConfig,
    pub calendar: Arc<dyn CalendarApi>,
    pub classifier: Arc<dyn TextClassifier>,
}

// Availability endpoint backing the check_available_schedule tool
pub async fn check_available_schedule(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<AvailabilityResponse>) {
    info!("Received request to check available schedule");

    let now = Local::now().naive_local();

    match availability_report(state.calendar.as_ref(), &state.config, now).await {
        Ok(report) => (
            StatusCode::OK,
            Json(AvailabilityResponse {
                success: true,
                report,
            }),
        ),
        Err(err) => {
            error!("Failed to compute availability: {}", err);
            (
                error_status(&err),
                Json(AvailabilityResponse {
                    success: false,
                    report: err.user_message(),
                }),
            )
        }
    }
}

// Booking endpoint backing the book_an_appointment tool
pub async fn book_an_appointment(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<BookingRequest>,
) -> (StatusCode, Json<BookingResponse>) {
    info!("Received booking request for {}", request.name);

    let now = Local::now().naive_local();

    // Booking state is scoped to this one conversation turn.
    let mut context = BookingContext::default();

    match book_appointment(
        state.calendar.as_ref(),
        &state.config,
        &mut context,
        &request,
        now,
    )
    .await
    {
        Ok(booked) => {
            info!("Appointment booked with event ID {}", booked.event_id);
            (
                StatusCode::OK,
                Json(BookingResponse {
                    success: true,
                    message: format!(
                        "Appointment booked for {} from {} to {}",
                        request.name, booked.start_time, booked.end_time
                    ),
                    event_link: booked.html_link,
                }),
            )
        }
        Err(err) => {
            match &err {
                ServiceError::PastDatetime { .. }
                | ServiceError::InvalidRange { .. }
                | ServiceError::InvalidTimestamp(_) => {
                    warn!("Booking rejected: {}", err);
                }
                _ => error!("Failed to book appointment: {}", err),
            }
            (
                error_status(&err),
                Json(BookingResponse {
                    success: false,
                    message: err.user_message(),
                    event_link: None,
                }),
            )
        }
    }
}

// Guardrail screening endpoint, called by the agent runtime before the
// booking tool is allowed to execute
pub async fn screen_booking_input(
    State(state): State<Arc<AppState>>,
    ExtractJson(input): ExtractJson<GuardrailInput>,
) -> Json<ScreenResponse> {
    info!("Received guardrail screening request");

    let report = screen_input(state.classifier.as_ref(), &input).await;

    Json(ScreenResponse::from(report))
}

fn error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::CredentialsMissing { .. } => StatusCode::SERVICE_UNAVAILABLE,
        ServiceError::CalendarApi(_) => StatusCode::BAD_GATEWAY,
        ServiceError::PastDatetime { .. }
        | ServiceError::InvalidRange { .. }
        | ServiceError::InvalidTimestamp(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Classification(_) => StatusCode::SERVICE_UNAVAILABLE,
        ServiceError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
