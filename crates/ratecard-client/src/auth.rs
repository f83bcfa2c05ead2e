//! Azure Active Directory bearer-token acquisition
//!
//! Implements the OAuth2 client-credentials flow against the tenant's token
//! endpoint and attaches the resulting token to outbound requests.

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::read_diagnostic;
use crate::{ClientConfig, ClientError};

/// A bearer token proving the application's identity.
#[derive(Clone)]
pub struct BearerAuthorizer {
    token: String,
}

/// Token endpoint response.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl BearerAuthorizer {
    /// Request a token for the configured resource using client credentials.
    pub async fn acquire(http: &Client, config: &ClientConfig) -> Result<Self, ClientError> {
        let url = config.token_url();
        debug!(tenant_id = %config.tenant_id, "requesting bearer token");

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret()),
            ("resource", config.resource.as_str()),
        ];

        let response = http.post(&url).form(&form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = read_diagnostic(response).await;
            error!(status = %status, "token request rejected");
            return Err(ClientError::Authentication { status, body });
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)?;

        Ok(Self {
            token: token.access_token,
        })
    }

    /// Build an authorizer around an existing token.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Attach the bearer token to a request.
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

impl std::fmt::Debug for BearerAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuthorizer")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
