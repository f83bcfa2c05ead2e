//! Rate card snapshot

use serde::Deserialize;

use crate::{MeterInfo, OfferTerm};

/// Pricing metadata for a subscription, as returned by a single rate-card
/// query. Read-only once decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateCardInfo {
    /// ISO currency code the rates are expressed in
    #[serde(rename = "Currency")]
    pub currency: String,
    /// Locale the meter names are localized for
    #[serde(rename = "Locale")]
    pub locale: String,
    /// Whether the rates include tax
    #[serde(rename = "IsTaxIncluded")]
    pub is_tax_included: bool,
    /// Offer terms attached to the subscription offer, in API order
    #[serde(rename = "OfferTerms")]
    pub offer_terms: Vec<OfferTerm>,
    /// Billable meters, in API order
    #[serde(rename = "Meters")]
    pub meters: Vec<MeterInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_card_decodes() {
        let json = r#"{
            "Currency": "USD",
            "Locale": "en-US",
            "IsTaxIncluded": false,
            "OfferTerms": [
                {
                    "Name": "Monetary Credit",
                    "EffectiveDate": "2014-10-01T00:00:00Z",
                    "Credit": 150.0,
                    "ExcludedMeterIds": []
                }
            ],
            "Meters": [
                {
                    "MeterId": "b7b7e62d-4937-4d32-a9f4-a3db5a2e8f8e",
                    "MeterName": "Compute Hours"
                }
            ]
        }"#;

        let rate_card: RateCardInfo = serde_json::from_str(json).unwrap();
        assert_eq!(rate_card.currency, "USD");
        assert_eq!(rate_card.locale, "en-US");
        assert!(!rate_card.is_tax_included);
        assert_eq!(rate_card.offer_terms.len(), 1);
        assert_eq!(rate_card.meters.len(), 1);
    }

    #[test]
    fn test_rate_card_empty_collections() {
        let json = r#"{
            "Currency": "USD",
            "Locale": "en-US",
            "IsTaxIncluded": true,
            "OfferTerms": [],
            "Meters": []
        }"#;

        let rate_card: RateCardInfo = serde_json::from_str(json).unwrap();
        assert!(rate_card.offer_terms.is_empty());
        assert!(rate_card.meters.is_empty());
    }

    #[test]
    fn test_rate_card_missing_currency_is_an_error() {
        let json = r#"{
            "Locale": "en-US",
            "IsTaxIncluded": false,
            "OfferTerms": [],
            "Meters": []
        }"#;

        let err = serde_json::from_str::<RateCardInfo>(json).unwrap_err();
        assert!(err.to_string().contains("missing field"));
        assert!(err.to_string().contains("Currency"));
    }
}
