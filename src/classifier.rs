use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::ServiceError;
use crate::models::guardrail::AbuseVerdict;

/// Text-classification collaborator used by the abuse gate. Treated as a
/// black box: text in, verdict out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<AbuseVerdict, ServiceError>;
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

/// Client for an external abuse-classification REST API
pub struct HttpAbuseClassifier {
    client: Client,
    endpoint: String,
}

impl HttpAbuseClassifier {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.classifier_endpoint.clone())
    }
}

#[async_trait]
impl TextClassifier for HttpAbuseClassifier {
    async fn classify(&self, text: &str) -> Result<AbuseVerdict, ServiceError> {
        let url = format!("{}/classify", self.endpoint);

        // Log size only; the content itself stays out of the logs.
        debug!("Requesting abuse classification for {} chars", text.len());

        let response = self
            .client
            .post(&url)
            .json(&ClassifyRequest { text })
            .send()
            .await
            .map_err(|e| ServiceError::Classification(format!("classifier request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Classification(format!(
                "classifier returned status {}",
                status
            )));
        }

        let verdict = response.json::<AbuseVerdict>().await.map_err(|e| {
            ServiceError::Classification(format!("malformed classifier response: {}", e))
        })?;

        info!(
            "Classification complete: is_abuse={}, threat_level={:?}",
            verdict.is_abuse, verdict.threat_level
        );
        Ok(verdict)
    }
}
