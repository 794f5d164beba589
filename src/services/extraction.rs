use crate::models::guardrail::{ContentBlock, GuardrailInput, TurnContent};

pub const USER_ROLE: &str = "user";

/// Isolate the newest user message from the gate's input.
///
/// The session layer prepends the whole conversation to every turn, so a
/// previously blocked message would keep re-triggering the gate if the full
/// history were judged. Scanning from the most recent turn backwards and
/// returning only the first user turn keeps each message judged on its own.
/// If no user turn exists, the whole input is rendered to a string instead.
pub fn extract_latest_user_turn(input: &GuardrailInput) -> String {
    match input {
        GuardrailInput::Text(text) => text.clone(),
        GuardrailInput::History(turns) => turns
            .iter()
            .rev()
            .find(|turn| turn.role == USER_ROLE)
            .map(|turn| render_content(&turn.content))
            .unwrap_or_else(|| render_whole_input(input)),
    }
}

fn render_content(content: &TurnContent) -> String {
    match content {
        TurnContent::Text(text) => text.clone(),
        TurnContent::Blocks(blocks) => {
            let texts: Vec<&str> = blocks.iter().filter_map(block_text).collect();
            texts.join(" ")
        }
    }
}

fn block_text(block: &ContentBlock) -> Option<&str> {
    match block {
        ContentBlock::Text(text) => Some(text.as_str()),
        ContentBlock::Typed(typed) if typed.kind == "text" => typed.text.as_deref(),
        ContentBlock::Typed(_) => None,
    }
}

fn render_whole_input(input: &GuardrailInput) -> String {
    serde_json::to_string(input).unwrap_or_default()
}
