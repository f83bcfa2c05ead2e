//! Client errors

use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;

/// Errors from rate-card client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Credentials were rejected by the identity service, or the API
    /// refused the bearer token.
    #[error("authentication failed ({status})")]
    Authentication {
        /// HTTP status of the rejection
        status: StatusCode,
        /// Diagnostic response body, empty if unreadable
        body: String,
    },

    /// The rate-card query returned a non-success result.
    #[error("rate card query failed ({status})")]
    Api {
        /// HTTP status of the failure
        status: StatusCode,
        /// Diagnostic response body, empty if unreadable
        body: String,
    },

    /// Transport-level failure (connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape, including a required
    /// field missing from the payload.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns true if retrying the request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Self::Transport(err) => err.is_connect() || err.is_timeout(),
            // Rejected credentials and malformed payloads won't improve on retry
            Self::Authentication { .. } | Self::Decode(_) => false,
        }
    }

    /// Diagnostic body carried by the failure, if any.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Authentication { body, .. } | Self::Api { body, .. } if !body.is_empty() => {
                Some(body.as_str())
            }
            _ => None,
        }
    }
}

/// Read the diagnostic body of a failed response.
///
/// A body that cannot be read is logged and replaced with an empty string so
/// the original failure is still reported.
pub(crate) async fn read_diagnostic(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, "failed to read diagnostic response body");
            String::new()
        }
    }
}
