use axum::response::Json;

use crate::models::booking::BookingRequest;
use crate::models::guardrail::{
    ContentBlock, ConversationTurn, GuardrailInput, TurnContent, TypedBlock,
};

// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

// Test endpoint that returns a sample booking request payload
pub async fn sample_booking_payload() -> Json<BookingRequest> {
    Json(BookingRequest {
        name: "Test Customer".to_string(),
        contact_number: "+63 912 345 6789".to_string(),
        start_time: "2026-09-01T10:00:00".to_string(),
        end_time: "2026-09-01T11:00:00".to_string(),
        attendee_email: None,
    })
}

// Test endpoint that returns a sample guardrail screening payload with a
// history, useful for exercising the extraction path by hand
pub async fn sample_screen_payload() -> Json<GuardrailInput> {
    Json(GuardrailInput::History(vec![
        ConversationTurn {
            role: "user".to_string(),
            content: TurnContent::Text("My name is Dana".to_string()),
        },
        ConversationTurn {
            role: "assistant".to_string(),
            content: TurnContent::Text("Nice to meet you, Dana!".to_string()),
        },
        ConversationTurn {
            role: "user".to_string(),
            content: TurnContent::Blocks(vec![
                ContentBlock::Typed(TypedBlock {
                    kind: "text".to_string(),
                    text: Some("Can I book".to_string()),
                }),
                ContentBlock::Text("2pm tomorrow?".to_string()),
            ]),
        },
    ]))
}
