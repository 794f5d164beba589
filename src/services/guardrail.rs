use tracing::{info, warn};

use crate::classifier::TextClassifier;
use crate::models::guardrail::{AbuseVerdict, GuardrailInput, ScreenResponse, ThreatLevel};
use crate::services::extraction::extract_latest_user_turn;

/// Trailing characters of the screened message retained in log events. The
/// rest of the content never reaches the logs.
pub const LOG_EXCERPT_CHARS: usize = 100;

/// Outcome of one gate evaluation. `verdict` is absent exactly when the
/// classifier failed, in which case `degraded` is set and the request is
/// allowed through.
#[derive(Debug, Clone)]
pub struct GuardrailReport {
    pub blocked: bool,
    pub verdict: Option<AbuseVerdict>,
    pub degraded: bool,
}

/// Screen the gate input for booking abuse.
///
/// Only the newest user message is judged. The tripwire fires only on an
/// unambiguous signal: `is_abuse` together with a high threat level. Lower
/// severities are logged for review and allowed through, and a classifier
/// failure is never converted into a block.
pub async fn screen_input(
    classifier: &dyn TextClassifier,
    input: &GuardrailInput,
) -> GuardrailReport {
    let latest_message = extract_latest_user_turn(input);

    let verdict = match classifier.classify(&latest_message).await {
        Ok(verdict) => verdict,
        Err(err) => {
            warn!("Abuse classification unavailable, allowing request: {}", err);
            return GuardrailReport {
                blocked: false,
                verdict: None,
                degraded: true,
            };
        }
    };

    let blocked = verdict.is_abuse && verdict.threat_level == ThreatLevel::High;

    if verdict.is_abuse || verdict.threat_level >= ThreatLevel::Medium {
        warn!(
            "Booking abuse signal (threat: {:?}, type: {}, blocked: {}): {} | input tail: '{}'",
            verdict.threat_level,
            verdict.abuse_type.as_deref().unwrap_or("unspecified"),
            blocked,
            verdict.reasoning,
            trailing_excerpt(&latest_message, LOG_EXCERPT_CHARS)
        );
    } else {
        info!("Booking input screened clean");
    }

    GuardrailReport {
        blocked,
        verdict: Some(verdict),
        degraded: false,
    }
}

impl From<GuardrailReport> for ScreenResponse {
    fn from(report: GuardrailReport) -> Self {
        match report.verdict {
            Some(verdict) => ScreenResponse {
                blocked: report.blocked,
                threat_level: verdict.threat_level,
                reasoning: verdict.reasoning,
                abuse_type: verdict.abuse_type,
                degraded: report.degraded,
            },
            None => ScreenResponse {
                blocked: false,
                threat_level: ThreatLevel::None,
                reasoning: "Screening unavailable; request allowed and flagged for review."
                    .to_string(),
                abuse_type: None,
                degraded: true,
            },
        }
    }
}

/// Last `limit` characters of `text`.
pub fn trailing_excerpt(text: &str, limit: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= limit {
        return text.to_string();
    }
    text.chars().skip(char_count - limit).collect()
}
