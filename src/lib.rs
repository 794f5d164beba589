//! Front Desk Scheduling Service
//!
//! This library provides the scheduling core behind a conversational
//! front-desk agent: it computes free calendar slots within business hours,
//! books appointments with date validation and correction, and screens
//! booking requests through an abuse-classification gate. The tool surface
//! is served over HTTP for an external agent runtime.
//!
//! # Modules
//!
//! - `client`: calendar API collaborator (list busy times, insert events)
//! - `classifier`: text-classification collaborator used by the gate
//! - `services`: availability calculation, datetime normalization,
//!   booking orchestration, and guardrail screening
//!
//! # Authentication
//!
//! The calendar collaborator authenticates with a bearer token read from a
//! credential artifact produced by an out-of-band OAuth flow. Token
//! acquisition and refresh are not handled here; a missing artifact is
//! surfaced as a setup instruction. The loading logic is encapsulated in
//! the `auth` module.

pub mod auth;
pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
pub mod client_mock;


// Re-export the main API types for ease of use
pub use classifier::{HttpAbuseClassifier, TextClassifier};
pub use client::{CalendarApi, GoogleCalendarClient};
pub use config::AppConfig;
pub use error::ServiceError;
pub use handlers::api::AppState;
pub use routes::create_router;
