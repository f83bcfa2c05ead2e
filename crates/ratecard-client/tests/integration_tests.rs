//! Integration tests for ratecard-client.
//!
//! These tests use wiremock to simulate the Azure token endpoint and the
//! Commerce rate-card endpoint, covering authentication, query dispatch,
//! diagnostic bodies, and retry behavior.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use ratecard_client::{ClientConfig, ClientError, RateCardClient, RateCardFilter, RetryConfig};
use ratecard_types::OfferTerm;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_TENANT: &str = "test-tenant";
const TEST_TOKEN: &str = "test-access-token-12345";

/// Create a ClientConfig pointing both endpoints at the mock server.
fn create_test_config(mock_url: &str) -> ClientConfig {
    ClientConfig::new(TEST_TENANT, "test-client", "test-secret", "test-sub")
        .with_authority_url(mock_url)
        .with_management_url(mock_url)
        .with_retry(
            RetryConfig::new()
                .with_max_attempts(1)
                .with_base_delay(Duration::from_millis(1))
                .with_jitter(false),
        )
}

/// Mount a token endpoint that validates the client-credentials form.
async fn mount_token_endpoint(server: &MockServer) {
    let token_json = serde_json::json!({
        "token_type": "Bearer",
        "expires_in": "3599",
        "access_token": TEST_TOKEN
    });

    Mock::given(method("POST"))
        .and(path(format!("/{TEST_TENANT}/oauth2/token")))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=test-client"))
        .and(body_string_contains("client_secret=test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json))
        .mount(server)
        .await;
}

fn sample_rate_card_json() -> serde_json::Value {
    serde_json::json!({
        "Currency": "USD",
        "Locale": "en-US",
        "IsTaxIncluded": false,
        "OfferTerms": [
            {
                "Name": "Monetary Credit",
                "EffectiveDate": "2014-10-01T00:00:00Z",
                "Credit": 150.0,
                "ExcludedMeterIds": ["a3a9d457-9a7d-4a47-9a4e-53fed0a8e1cd"]
            },
            {
                "Name": "Quantum Discount",
                "EffectiveDate": "2014-10-01T00:00:00Z"
            }
        ],
        "Meters": [
            {
                "MeterId": "b7b7e62d-4937-4d32-a9f4-a3db5a2e8f8e",
                "MeterName": "Compute Hours",
                "MeterCategory": "Virtual Machines",
                "Unit": "Hours",
                "MeterRates": { "0": 0.077 },
                "IncludedQuantity": 0.0
            }
        ]
    })
}

#[tokio::test]
async fn test_get_rate_card_happy_path() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/test-sub/providers/Microsoft.Commerce/RateCard"))
        .and(query_param("api-version", "2016-08-31-preview"))
        .and(query_param("$filter", RateCardFilter::default().to_string()))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_rate_card_json()))
        .mount(&server)
        .await;

    let client = RateCardClient::connect(create_test_config(&server.uri()))
        .await
        .unwrap();
    let rate_card = client.get(&RateCardFilter::default()).await.unwrap();

    assert_eq!(rate_card.currency, "USD");
    assert_eq!(rate_card.locale, "en-US");
    assert!(!rate_card.is_tax_included);
    assert_eq!(rate_card.meters.len(), 1);
    assert_eq!(rate_card.meters[0].meter_name, "Compute Hours");

    // First term is a credit, second is an unrecognized variant
    match &rate_card.offer_terms[0] {
        OfferTerm::MonetaryCredit {
            credit,
            effective_date,
            ..
        } => {
            assert_eq!(*credit, 150.0);
            assert_eq!(
                *effective_date,
                Utc.with_ymd_and_hms(2014, 10, 1, 0, 0, 0).unwrap()
            );
        }
        other => panic!("expected MonetaryCredit, got {other:?}"),
    }
    assert_eq!(
        rate_card.offer_terms[1],
        OfferTerm::Unknown {
            name: "Quantum Discount".to_string()
        }
    );
}

#[tokio::test]
async fn test_rejected_credentials_fail_connect() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/{TEST_TENANT}/oauth2/token")))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid_client"}"#),
        )
        .mount(&server)
        .await;

    let result = RateCardClient::connect(create_test_config(&server.uri())).await;

    match result {
        Err(ClientError::Authentication { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("invalid_client"));
        }
        other => panic!("expected Authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_failure_carries_diagnostic_body() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    // 400 is not retryable, so exactly one call is expected
    Mock::given(method("GET"))
        .and(path("/subscriptions/test-sub/providers/Microsoft.Commerce/RateCard"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error":{"code":"InvalidFilter"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RateCardClient::connect(create_test_config(&server.uri()))
        .await
        .unwrap();
    let result = client.get(&RateCardFilter::default()).await;

    match result {
        Err(ClientError::Api { status, body }) => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("InvalidFilter"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_retried_once() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    // Initial attempt + one retry
    Mock::given(method("GET"))
        .and(path("/subscriptions/test-sub/providers/Microsoft.Commerce/RateCard"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let client = RateCardClient::connect(create_test_config(&server.uri()))
        .await
        .unwrap();
    let result = client.get(&RateCardFilter::default()).await;

    assert!(matches!(
        result,
        Err(ClientError::Api { status, .. }) if status.as_u16() == 503
    ));
}

#[tokio::test]
async fn test_expired_token_maps_to_authentication_error() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/test-sub/providers/Microsoft.Commerce/RateCard"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RateCardClient::connect(create_test_config(&server.uri()))
        .await
        .unwrap();
    let result = client.get(&RateCardFilter::default()).await;

    assert!(matches!(result, Err(ClientError::Authentication { .. })));
}

#[tokio::test]
async fn test_malformed_payload_is_a_decode_error() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    // Currency missing where the data model requires it
    Mock::given(method("GET"))
        .and(path("/subscriptions/test-sub/providers/Microsoft.Commerce/RateCard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Locale": "en-US",
            "IsTaxIncluded": false,
            "OfferTerms": [],
            "Meters": []
        })))
        .mount(&server)
        .await;

    let client = RateCardClient::connect(create_test_config(&server.uri()))
        .await
        .unwrap();
    let result = client.get(&RateCardFilter::default()).await;

    match result {
        Err(ClientError::Decode(err)) => {
            assert!(err.to_string().contains("Currency"));
        }
        other => panic!("expected Decode error, got {other:?}"),
    }
}
