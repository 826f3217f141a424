//! Probe result and error types.

use serde::{Deserialize, Serialize};

/// Error code PostgREST returns when a request needs a (valid) JWT
pub(super) const JWT_REQUIRED_CODE: &str = "PGRST301";

pub const NOT_CONFIGURED_MESSAGE: &str = "Supabase not configured";
pub const DATABASE_FAILED_MESSAGE: &str = "Database connection failed";
pub const TIMEOUT_MESSAGE: &str = "Connection timeout";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Outcome of a connectivity probe.
///
/// Serializes as `{"success": bool, "error": string | null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub success: bool,
    pub error: Option<String>,
}

impl ConnectionStatus {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }

    pub fn not_configured() -> Self {
        Self::failed(NOT_CONFIGURED_MESSAGE)
    }

    /// Failure carrying an error's own message, or "Network error" when the
    /// message is blank.
    pub fn from_error_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::failed(NETWORK_ERROR_MESSAGE)
        } else {
            Self::failed(message)
        }
    }
}

/// Error body returned by the REST endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostgrestError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    /// HTTP status of the response (not part of the body)
    #[serde(skip)]
    pub http_status: u16,
}

impl PostgrestError {
    /// Build from a non-success response body.
    ///
    /// Bodies that are not PostgREST JSON keep the raw text as message, or the
    /// HTTP reason phrase when the body is empty.
    pub fn from_http_response(http_status: u16, body: &str) -> Self {
        let mut error = serde_json::from_str::<PostgrestError>(body).unwrap_or_else(|_| {
            let message = if body.trim().is_empty() {
                reqwest::StatusCode::from_u16(http_status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.trim().to_string()
            };
            PostgrestError {
                message,
                ..Default::default()
            }
        });
        error.http_status = http_status;
        error
    }

    /// Whether the server refused only for lack of authorization.
    pub fn requires_auth(&self) -> bool {
        self.code.as_deref() == Some(JWT_REQUIRED_CODE) || self.message.contains("JWT")
    }
}

impl std::fmt::Display for PostgrestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} (HTTP {}, {})", self.message, self.http_status, code),
            None => write!(f, "{} (HTTP {})", self.message, self.http_status),
        }
    }
}

impl std::error::Error for PostgrestError {}

/// Ways a probe request can fail.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("probe did not complete within {0:?}")]
    Timeout(std::time::Duration),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] PostgrestError),
    #[error("invalid Supabase URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ProbeError {
    /// Collapse a probe error into the status reported to callers.
    ///
    /// Authorization-required responses count as reachable. Other API
    /// errors are reported generically; their detail goes to the log only.
    pub fn into_status(self) -> ConnectionStatus {
        match self {
            ProbeError::Api(err) if err.requires_auth() => ConnectionStatus::ok(),
            ProbeError::Api(_) => ConnectionStatus::failed(DATABASE_FAILED_MESSAGE),
            ProbeError::Timeout(_) => ConnectionStatus::failed(TIMEOUT_MESSAGE),
            ProbeError::Transport(err) if err.is_timeout() => {
                ConnectionStatus::failed(TIMEOUT_MESSAGE)
            }
            other => ConnectionStatus::from_error_message(other.to_string()),
        }
    }
}
