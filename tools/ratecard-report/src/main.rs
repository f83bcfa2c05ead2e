//! Azure Rate Card report
//!
//! Authenticates with Azure Active Directory using client credentials,
//! queries the Commerce Rate Card API once for the pay-as-you-go offer,
//! and prints a truncated summary of the response to stdout.
//!
//! Required environment variables:
//!
//! - `AZURE_TENANT_ID` - Azure Active Directory tenant ID or domain
//! - `AZURE_CLIENT_ID` - Azure Active Directory application client ID
//! - `AZURE_CLIENT_SECRET` - Azure Active Directory application secret
//! - `AZURE_SUBSCRIPTION_ID` - Azure subscription ID
//!
//! Exits 0 on success, 1 on any configuration, authentication, or API
//! failure.

mod config;
mod report;

use std::io;

use ratecard_client::{ClientConfig, ClientError, RateCardClient, RateCardFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::report::render_rate_card;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        // A failed API call may carry a diagnostic body worth printing
        // before the failure message itself
        if let Some(body) = err
            .downcast_ref::<ClientError>()
            .and_then(ClientError::diagnostic)
        {
            eprintln!("{body}");
        }
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let client_config = ClientConfig::new(
        &config.tenant_id,
        &config.client_id,
        &config.client_secret,
        &config.subscription_id,
    )
    .with_request_timeout(config.request_timeout);

    tracing::info!(
        subscription_id = %config.subscription_id,
        "connecting to Azure"
    );
    let client = RateCardClient::connect(client_config).await?;

    println!("Get rate card...");
    let rate_card = client.get(&RateCardFilter::default()).await?;

    let stdout = io::stdout();
    render_rate_card(&mut stdout.lock(), &rate_card)?;

    Ok(())
}
