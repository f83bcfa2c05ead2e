//! Rate-card client

use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use ratecard_types::RateCardInfo;

use crate::auth::BearerAuthorizer;
use crate::error::read_diagnostic;
use crate::retry::with_retry;
use crate::{ClientConfig, ClientError, RateCardFilter};

/// API version of the Commerce rate-card operation.
const API_VERSION: &str = "2016-08-31-preview";

/// Authenticated client for the rate-card query.
#[derive(Debug, Clone)]
pub struct RateCardClient {
    http: Client,
    config: ClientConfig,
    authorizer: BearerAuthorizer,
}

impl RateCardClient {
    /// Build the HTTP client and acquire a bearer token.
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        let authorizer = BearerAuthorizer::acquire(&http, &config).await?;

        Ok(Self {
            http,
            config,
            authorizer,
        })
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the rate card matching the filter, retrying transient failures.
    pub async fn get(&self, filter: &RateCardFilter) -> Result<RateCardInfo, ClientError> {
        with_retry(self.config.retry.clone(), || self.get_once(filter)).await
    }

    async fn get_once(&self, filter: &RateCardFilter) -> Result<RateCardInfo, ClientError> {
        let url = self.config.rate_card_url();
        debug!(
            subscription_id = %self.config.subscription_id,
            filter = %filter,
            "querying rate card"
        );

        let request = self
            .http
            .get(&url)
            .query(&[("api-version", API_VERSION.to_string())])
            .query(&[("$filter", filter.to_string())]);

        let response = self.authorizer.apply(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = read_diagnostic(response).await;
            error!(status = %status, body = %body, "rate card query failed");

            // An expired or rejected token surfaces here, not at connect time
            return Err(
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                    ClientError::Authentication { status, body }
                } else {
                    ClientError::Api { status, body }
                },
            );
        }

        let body = response.text().await?;
        let rate_card = serde_json::from_str(&body)?;

        debug!("rate card received");
        Ok(rate_card)
    }
}
