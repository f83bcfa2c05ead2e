//! Ratecard Client - SDK for the Azure Commerce Rate Card API
//!
//! Authenticates with Azure Active Directory using the client-credentials
//! flow and exposes the single rate-card query operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use ratecard_client::{ClientConfig, RateCardClient, RateCardFilter};
//!
//! let config = ClientConfig::new(tenant_id, client_id, client_secret, subscription_id);
//! let client = RateCardClient::connect(config).await?;
//! let rate_card = client.get(&RateCardFilter::default()).await?;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod filter;
pub mod ratecard;
pub mod retry;

pub use auth::BearerAuthorizer;
pub use config::ClientConfig;
pub use error::ClientError;
pub use filter::RateCardFilter;
pub use ratecard::RateCardClient;
pub use retry::{with_retry, RetryConfig, RetryableError};
