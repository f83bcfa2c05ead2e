//! Client configuration

use std::time::Duration;

use crate::retry::RetryConfig;

const DEFAULT_AUTHORITY_URL: &str = "https://login.microsoftonline.com";
const DEFAULT_MANAGEMENT_URL: &str = "https://management.azure.com";

/// Configuration for the rate-card client.
///
/// The authority and management URLs default to the Azure public cloud and
/// are overridable for sovereign clouds and tests.
#[derive(Clone)]
pub struct ClientConfig {
    /// Azure Active Directory tenant ID
    pub tenant_id: String,
    /// Application (client) ID
    pub client_id: String,
    /// Application client secret
    client_secret: String,
    /// Subscription to query the rate card for
    pub subscription_id: String,
    /// Identity service base URL
    pub authority_url: String,
    /// Resource manager base URL
    pub management_url: String,
    /// OAuth2 resource the token is requested for
    pub resource: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// End-to-end request timeout
    pub request_timeout: Duration,
    /// Retry behavior for transient failures
    pub retry: RetryConfig,
}

impl ClientConfig {
    /// Create a configuration for the Azure public cloud.
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        subscription_id: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            subscription_id: subscription_id.into(),
            authority_url: DEFAULT_AUTHORITY_URL.to_string(),
            management_url: DEFAULT_MANAGEMENT_URL.to_string(),
            resource: format!("{DEFAULT_MANAGEMENT_URL}/"),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }

    /// Override the identity service base URL.
    #[must_use]
    pub fn with_authority_url(mut self, url: impl Into<String>) -> Self {
        self.authority_url = url.into();
        self
    }

    /// Override the resource manager base URL.
    #[must_use]
    pub fn with_management_url(mut self, url: impl Into<String>) -> Self {
        self.management_url = url.into();
        self
    }

    /// Override the OAuth2 resource.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    /// Set the TCP connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the end-to-end request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the retry behavior.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// The application client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Token endpoint for this tenant.
    pub fn token_url(&self) -> String {
        format!("{}/{}/oauth2/token", self.authority_url, self.tenant_id)
    }

    /// Rate-card endpoint for this subscription.
    pub fn rate_card_url(&self) -> String {
        format!(
            "{}/subscriptions/{}/providers/Microsoft.Commerce/RateCard",
            self.management_url, self.subscription_id
        )
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("subscription_id", &self.subscription_id)
            .field("authority_url", &self.authority_url)
            .field("management_url", &self.management_url)
            .field("resource", &self.resource)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("retry", &self.retry)
            .finish()
    }
}
