//! Billable meter types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// A billable usage dimension with its pricing metadata.
///
/// The rate-card report only renders the name and identifier; the remaining
/// fields mirror what the Commerce API returns and are optional on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeterInfo {
    /// Stable meter identifier
    #[serde(rename = "MeterId")]
    pub meter_id: Uuid,
    /// Human-readable meter name
    #[serde(rename = "MeterName")]
    pub meter_name: String,
    /// Top-level category (e.g. "Virtual Machines")
    #[serde(rename = "MeterCategory", default)]
    pub meter_category: Option<String>,
    /// Sub-category within the meter category
    #[serde(rename = "MeterSubCategory", default)]
    pub meter_sub_category: Option<String>,
    /// Unit the meter is billed in (e.g. "Hours")
    #[serde(rename = "Unit", default)]
    pub unit: Option<String>,
    /// Azure region the rate applies to
    #[serde(rename = "MeterRegion", default)]
    pub meter_region: Option<String>,
    /// Rates keyed by tier quantity threshold
    #[serde(rename = "MeterRates", default)]
    pub meter_rates: BTreeMap<String, f64>,
    /// Quantity included at no charge
    #[serde(rename = "IncludedQuantity", default)]
    pub included_quantity: f64,
    /// When the rate became effective
    #[serde(rename = "EffectiveDate", default)]
    pub effective_date: Option<DateTime<Utc>>,
}
