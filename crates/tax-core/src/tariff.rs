//! Tariff Rate Card and Stay Model
//!
//! Net tax due for a stay is `guests * nights * nightly rate`.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Nightly per-guest rates, keyed by listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    /// Rate for the "leonina" listing
    pub leonina: Decimal,

    /// Rate for every other listing
    pub standard: Decimal,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            leonina: dec!(6),
            standard: dec!(5),
        }
    }
}

impl RateCard {
    /// Nightly rate for a listing, matched case-insensitively.
    pub fn nightly_rate(&self, listing: &str) -> Decimal {
        if listing.eq_ignore_ascii_case("leonina") {
            self.leonina
        } else {
            self.standard
        }
    }
}

/// One taxable stay.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stay {
    /// Listing the guests stayed at
    pub listing: String,

    /// Number of guests
    pub guests: u32,

    /// Number of nights
    pub nights: u32,

    /// Booking reference, carried through to receipts
    pub reservation_id: Option<String>,
}

impl Stay {
    pub fn new(listing: impl Into<String>, guests: u32, nights: u32) -> Self {
        Self {
            listing: listing.into(),
            guests,
            nights,
            reservation_id: None,
        }
    }

    /// Attach a booking reference; empty strings are treated as absent.
    pub fn with_reservation(mut self, reservation_id: impl Into<String>) -> Self {
        let id = reservation_id.into();
        if !id.is_empty() {
            self.reservation_id = Some(id);
        }
        self
    }

    /// Net tax the operator wants to collect for this stay.
    pub fn net_due(&self, rates: &RateCard) -> Decimal {
        let rate = rates.nightly_rate(&self.listing);
        (Decimal::from(self.guests) * Decimal::from(self.nights) * rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_selection() {
        let rates = RateCard::default();
        assert_eq!(rates.nightly_rate("leonina"), dec!(6));
        assert_eq!(rates.nightly_rate("LEONINA"), dec!(6));
        assert_eq!(rates.nightly_rate("standard"), dec!(5));
        assert_eq!(rates.nightly_rate("anything-else"), dec!(5));
    }

    #[test]
    fn test_net_due() {
        let rates = RateCard::default();
        assert_eq!(Stay::new("standard", 2, 3).net_due(&rates), dec!(30));
        assert_eq!(Stay::new("leonina", 2, 3).net_due(&rates), dec!(36));
        assert_eq!(Stay::new("standard", 0, 3).net_due(&rates), Decimal::ZERO);
        assert_eq!(Stay::new("standard", 2, 0).net_due(&rates), Decimal::ZERO);
    }

    #[test]
    fn test_net_due_rounds_to_cents() {
        let rates = RateCard {
            leonina: dec!(6),
            standard: dec!(4.125),
        };
        // 1 * 3 * 4.125 = 12.375 -> 12.38 (midpoint away from zero)
        assert_eq!(Stay::new("standard", 1, 3).net_due(&rates), dec!(12.38));
    }

    #[test]
    fn test_reservation_attachment() {
        let stay = Stay::new("standard", 1, 1).with_reservation("TEST123");
        assert_eq!(stay.reservation_id.as_deref(), Some("TEST123"));

        let stay = Stay::new("standard", 1, 1).with_reservation("");
        assert!(stay.reservation_id.is_none());
    }
}
