use serde::{Deserialize, Serialize};

/// Input handed to the abuse gate by the agent runtime: either the bare
/// latest message, or the full conversation the session layer prepends.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum GuardrailInput {
    Text(String),
    History(Vec<ConversationTurn>),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversationTurn {
    pub role: String,
    #[serde(default)]
    pub content: TurnContent,
}

/// Turn content is either plain text or a sequence of content blocks
/// (multimodal messages).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TurnContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl Default for TurnContent {
    fn default() -> Self {
        TurnContent::Text(String::new())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ContentBlock {
    Text(String),
    Typed(TypedBlock),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypedBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Severity reported by the abuse classifier, ordered from benign to
/// blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    None,
    Low,
    Medium,
    High,
}

/// Verdict returned by the text-classification collaborator. Created once
/// per gate evaluation and never mutated afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AbuseVerdict {
    pub is_abuse: bool,
    pub reasoning: String,
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub abuse_type: Option<String>,
}

// Response structure for the screening endpoint
#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub blocked: bool,
    pub threat_level: ThreatLevel,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuse_type: Option<String>,
    pub degraded: bool,
}
