//! Offer term types
//!
//! The Commerce API returns offer terms as a polymorphic list tagged by the
//! `Name` field. Deserialization dispatches on that tag into a closed enum;
//! unrecognized tags map to [`OfferTerm::Unknown`] instead of failing, so a
//! new term variant on the wire never breaks decoding.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Wire discriminator for monetary credit terms
const MONETARY_CREDIT: &str = "Monetary Credit";
/// Wire discriminator for monetary commitment terms
const MONETARY_COMMITMENT: &str = "Monetary Commitment";
/// Wire discriminator for recurring charge terms
const RECURRING_CHARGE: &str = "Recurring Charge";

/// A billing condition attached to a subscription offer.
#[derive(Debug, Clone, PartialEq)]
pub enum OfferTerm {
    /// A credit applied against charges, excluding some meters
    MonetaryCredit {
        /// Term name (the wire discriminator)
        name: String,
        /// When the term took effect
        effective_date: DateTime<Utc>,
        /// Credit amount in the rate card currency
        credit: f64,
        /// Meters the credit does not apply to
        excluded_meter_ids: Vec<Uuid>,
    },
    /// A spend commitment with tiered discounts
    MonetaryCommitment {
        /// Term name (the wire discriminator)
        name: String,
        /// When the term took effect
        effective_date: DateTime<Utc>,
        /// Discount percentage keyed by commitment tier
        tiered_discount: BTreeMap<String, f64>,
        /// Meters the discount does not apply to
        excluded_meter_ids: Vec<Uuid>,
    },
    /// A fixed recurring charge
    RecurringCharge {
        /// Term name (the wire discriminator)
        name: String,
        /// When the term took effect
        effective_date: DateTime<Utc>,
        /// Charge amount in the rate card currency
        recurring_charge: f64,
    },
    /// A term variant this client does not understand
    Unknown {
        /// The unrecognized wire discriminator
        name: String,
    },
}

impl OfferTerm {
    /// Term name as it appeared on the wire.
    pub fn name(&self) -> &str {
        match self {
            Self::MonetaryCredit { name, .. }
            | Self::MonetaryCommitment { name, .. }
            | Self::RecurringCharge { name, .. }
            | Self::Unknown { name } => name,
        }
    }
}

/// Raw wire shape before tag dispatch.
#[derive(Deserialize)]
struct OfferTermWire {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "EffectiveDate")]
    effective_date: Option<DateTime<Utc>>,
    #[serde(rename = "Credit")]
    credit: Option<f64>,
    #[serde(rename = "TieredDiscount")]
    tiered_discount: Option<BTreeMap<String, f64>>,
    #[serde(rename = "RecurringCharge")]
    recurring_charge: Option<f64>,
    #[serde(rename = "ExcludedMeterIds", default)]
    excluded_meter_ids: Vec<Uuid>,
}

enum TermKind {
    Credit,
    Commitment,
    Recurring,
    Unknown,
}

impl OfferTermWire {
    fn into_term<E: de::Error>(self) -> Result<OfferTerm, E> {
        fn required<T, E: de::Error>(value: Option<T>, field: &'static str) -> Result<T, E> {
            value.ok_or_else(|| E::missing_field(field))
        }

        let kind = match self.name.as_str() {
            MONETARY_CREDIT => TermKind::Credit,
            MONETARY_COMMITMENT => TermKind::Commitment,
            RECURRING_CHARGE => TermKind::Recurring,
            _ => TermKind::Unknown,
        };

        match kind {
            TermKind::Credit => Ok(OfferTerm::MonetaryCredit {
                effective_date: required(self.effective_date, "EffectiveDate")?,
                credit: required(self.credit, "Credit")?,
                excluded_meter_ids: self.excluded_meter_ids,
                name: self.name,
            }),
            TermKind::Commitment => Ok(OfferTerm::MonetaryCommitment {
                effective_date: required(self.effective_date, "EffectiveDate")?,
                tiered_discount: required(self.tiered_discount, "TieredDiscount")?,
                excluded_meter_ids: self.excluded_meter_ids,
                name: self.name,
            }),
            TermKind::Recurring => Ok(OfferTerm::RecurringCharge {
                effective_date: required(self.effective_date, "EffectiveDate")?,
                recurring_charge: required(self.recurring_charge, "RecurringCharge")?,
                name: self.name,
            }),
            TermKind::Unknown => Ok(OfferTerm::Unknown { name: self.name }),
        }
    }
}

impl<'de> Deserialize<'de> for OfferTerm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        OfferTermWire::deserialize(deserializer)?.into_term()
    }
}
