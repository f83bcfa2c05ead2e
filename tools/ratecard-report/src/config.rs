//! Configuration for the rate-card report tool.

use std::time::Duration;

/// Report tool configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Azure Active Directory tenant ID
    pub tenant_id: String,
    /// Application (client) ID
    pub client_id: String,
    /// Application client secret
    pub client_secret: String,
    /// Subscription to report on
    pub subscription_id: String,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All four `AZURE_*` variables are required; the timeout is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let tenant_id = require("AZURE_TENANT_ID")?;
        let client_id = require("AZURE_CLIENT_ID")?;
        let client_secret = require("AZURE_CLIENT_SECRET")?;
        let subscription_id = require("AZURE_SUBSCRIPTION_ID")?;

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?;

        Ok(Self {
            tenant_id,
            client_id,
            client_secret,
            subscription_id,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
