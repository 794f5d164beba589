use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::api::{
    book_an_appointment, check_available_schedule, screen_booking_input, AppState,
};
use crate::handlers::test::{health_check, sample_booking_payload, sample_screen_payload};

pub fn create_router(app_state: Arc<AppState>, is_production: bool) -> Router {
    let mut router = Router::new();

    // Health check is always available
    let health_route = Router::new().route("/health", get(health_check));
    router = router.merge(health_route);

    // Tool surface consumed by the agent runtime is always available
    let tool_routes = Router::new()
        .route("/schedule/available", get(check_available_schedule))
        .route("/appointments", post(book_an_appointment))
        .route("/guardrails/screen", post(screen_booking_input));
    router = router.merge(tool_routes);

    // Only add sample payload routes if not in production mode
    if !is_production {
        let sample_routes = Router::new()
            .route("/test/booking-payload", get(sample_booking_payload))
            .route("/test/screen-payload", get(sample_screen_payload));
        router = router.merge(sample_routes);

        info!("Sample payload routes enabled - server running in development mode");
    } else {
        info!("Running in production mode - only tool surface and health endpoints exposed");
    }

    router.with_state(app_state)
}
