use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ServiceError;

/// Calendar credential artifact, produced by an out-of-band OAuth flow.
///
/// Only the stored token is consumed here; acquiring or refreshing it is
/// the operator's responsibility.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarCredentials {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl CalendarCredentials {
    /// Load the credential artifact from `path`.
    ///
    /// A missing file maps to `CredentialsMissing` so callers can surface
    /// the setup instruction verbatim.
    pub fn load(path: &str) -> Result<Self, ServiceError> {
        if !Path::new(path).exists() {
            return Err(ServiceError::CredentialsMissing {
                path: path.to_string(),
            });
        }

        let raw = fs::read_to_string(path).map_err(|e| {
            ServiceError::Config(format!("failed to read credential file {}: {}", path, e))
        })?;

        let credentials: Self = serde_json::from_str(&raw).map_err(|e| {
            ServiceError::Config(format!("credential file {} is not valid JSON: {}", path, e))
        })?;

        if credentials.access_token.is_empty() {
            return Err(ServiceError::Config(format!(
                "credential file {} has an empty access_token",
                path
            )));
        }

        debug!("Loaded calendar credentials from {}", path);
        Ok(credentials)
    }
}
