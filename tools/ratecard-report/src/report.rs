//! Rate-card report renderer
//!
//! Formats a fetched rate card as human-readable text. Each collection is
//! truncated to its first [`DISPLAY_CAP`] elements so a full rate card with
//! thousands of meters still prints a readable summary.

use std::io::{self, Write};

use ratecard_types::{MeterInfo, OfferTerm, RateCardInfo};

/// Maximum elements rendered per collection.
pub const DISPLAY_CAP: usize = 3;

/// Line printed after every term and meter block.
pub const SEPARATOR: &str = "=====";

/// First `DISPLAY_CAP` elements of a slice, or the whole slice if shorter.
fn head<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(DISPLAY_CAP)]
}

/// Render the rate card summary.
///
/// Header fields always print; at most [`DISPLAY_CAP`] offer terms and
/// meters follow, in API order.
pub fn render_rate_card<W: Write>(out: &mut W, rate_card: &RateCardInfo) -> io::Result<()> {
    writeln!(out, "Currency: {}", rate_card.currency)?;
    writeln!(out, "Locale: {}", rate_card.locale)?;
    writeln!(out, "IsTaxIncluded: {}", rate_card.is_tax_included)?;

    writeln!(out, "OfferTerms:")?;
    for term in head(&rate_card.offer_terms) {
        render_offer_term(out, term)?;
        writeln!(out, "{SEPARATOR}")?;
    }

    writeln!(out, "Meters:")?;
    for meter in head(&rate_card.meters) {
        render_meter(out, meter)?;
        writeln!(out, "{SEPARATOR}")?;
    }

    Ok(())
}

fn render_offer_term<W: Write>(out: &mut W, term: &OfferTerm) -> io::Result<()> {
    match term {
        OfferTerm::MonetaryCredit {
            name,
            effective_date,
            credit,
            excluded_meter_ids,
        } => {
            writeln!(out, "\tName: {name}")?;
            writeln!(out, "\tDate: {effective_date}")?;
            writeln!(out, "\tCredit: {credit}")?;
            writeln!(out, "\tMeterIDs: {:?}", head(excluded_meter_ids))?;
        }
        OfferTerm::MonetaryCommitment {
            name,
            effective_date,
            tiered_discount,
            excluded_meter_ids,
        } => {
            writeln!(out, "\tName: {name}")?;
            writeln!(out, "\tDate: {effective_date}")?;
            writeln!(out, "\tDiscount: {tiered_discount:?}")?;
            writeln!(out, "\tMeterIDs: {:?}", head(excluded_meter_ids))?;
        }
        OfferTerm::RecurringCharge {
            name,
            effective_date,
            recurring_charge,
        } => {
            writeln!(out, "\tName: {name}")?;
            writeln!(out, "\tDate: {effective_date}")?;
            writeln!(out, "\tCharge: {recurring_charge}")?;
        }
        OfferTerm::Unknown { .. } => {
            writeln!(out, "Not supported")?;
        }
    }
    Ok(())
}

fn render_meter<W: Write>(out: &mut W, meter: &MeterInfo) -> io::Result<()> {
    writeln!(out, "\tName: {}", meter.meter_name)?;
    writeln!(out, "\tMeterID: {}", meter.meter_id)?;
    Ok(())
}
