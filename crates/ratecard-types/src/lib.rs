//! Ratecard Types - Shared domain types
//!
//! This crate contains the domain types returned by the Azure Commerce
//! Rate Card API:
//! - Rate card snapshots
//! - Offer terms (credits, commitments, recurring charges)
//! - Billable meters

pub mod meter;
pub mod offer_term;
pub mod rate_card;

pub use meter::*;
pub use offer_term::*;
pub use rate_card::*;
