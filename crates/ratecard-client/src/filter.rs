//! Rate-card query filter
//!
//! The Commerce API requires a `$filter` expression constraining offer,
//! currency, locale, and region. All four predicates are mandatory.

use std::fmt;

/// Query predicates for a rate-card request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCardFilter {
    /// Durable offer identifier (e.g. "MS-AZR-0062P")
    pub offer_durable_id: String,
    /// ISO currency code
    pub currency: String,
    /// Locale for meter names
    pub locale: String,
    /// Region used to resolve region-specific rates
    pub region: String,
}

impl RateCardFilter {
    /// Create a filter for the given offer with the given pricing context.
    pub fn new(
        offer_durable_id: impl Into<String>,
        currency: impl Into<String>,
        locale: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            offer_durable_id: offer_durable_id.into(),
            currency: currency.into(),
            locale: locale.into(),
            region: region.into(),
        }
    }
}

impl Default for RateCardFilter {
    /// The pay-as-you-go offer priced in US dollars.
    fn default() -> Self {
        Self::new("MS-AZR-0062P", "USD", "en-US", "US")
    }
}

impl fmt::Display for RateCardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OfferDurableId eq '{}' and Currency eq '{}' and Locale eq '{}' and RegionInfo eq '{}'",
            self.offer_durable_id, self.currency, self.locale, self.region
        )
    }
}
