//! Net-to-Gross Fee Arithmetic
//!
//! Computes the gross amount to charge so the operator still nets the
//! desired amount after the processor deducts its fee.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{FeeError, Result};

/// A payment processor's fee structure: proportional rate plus a fixed
/// per-transaction amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Proportional fee as a fraction (0.014 = 1.4%)
    pub percent: Decimal,

    /// Fixed fee per transaction, in currency units
    pub fixed: Decimal,
}

impl FeeSchedule {
    /// Create a fee schedule, validating the rate is a usable fraction.
    pub fn new(percent: Decimal, fixed: Decimal) -> Result<Self> {
        if percent < Decimal::ZERO || percent >= Decimal::ONE {
            return Err(FeeError::PercentOutOfRange(percent));
        }
        if fixed < Decimal::ZERO {
            return Err(FeeError::NegativeFixedFee(fixed));
        }
        Ok(Self { percent, fixed })
    }

    /// Gross amount to charge so the operator nets `net` after fees.
    ///
    /// `gross = (net + fixed) / (1 - percent)`, rounded up to the cent so
    /// gateway rounding can never leave the operator under-paid.
    /// Non-positive `net` yields zero.
    pub fn gross_for_net(&self, net: Decimal) -> Decimal {
        if net <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let raw = (net + self.fixed) / (Decimal::ONE - self.percent);
        raw.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity)
    }
}

/// How a provider's surcharge is derived from the desired net amount.
///
/// Some deployments replace the inverse formula with a flat add-on, so both
/// are supported and selectable per provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargePolicy {
    /// Proper inverse of a percentage-plus-fixed processor fee
    InverseFee(FeeSchedule),

    /// Flat additive surcharge on top of the net amount
    Flat(Decimal),
}

impl SurchargePolicy {
    /// Flat surcharge policy, rejecting negative amounts.
    pub fn flat(amount: Decimal) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(FeeError::NegativeSurcharge(amount));
        }
        Ok(Self::Flat(amount))
    }

    /// Gross amount to charge for the desired net. Zero for `net <= 0`.
    pub fn gross_for_net(&self, net: Decimal) -> Decimal {
        match self {
            Self::InverseFee(schedule) => schedule.gross_for_net(net),
            Self::Flat(surcharge) => {
                if net <= Decimal::ZERO {
                    Decimal::ZERO
                } else {
                    (net + surcharge)
                        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                }
            }
        }
    }
}

/// Convert a two-decimal euro amount to integer cents for provider APIs.
///
/// Returns `None` when the amount carries sub-cent residue or does not fit
/// in an `i64`.
pub fn to_cents(amount: Decimal) -> Option<i64> {
    let cents = amount * dec!(100);
    if cents != cents.trunc() {
        return None;
    }
    cents.to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripe_eu() -> FeeSchedule {
        FeeSchedule::new(dec!(0.014), dec!(0.25)).unwrap()
    }

    #[test]
    fn test_gross_covers_net() {
        // (30.00 + 0.25) / 0.986 = 30.6795..., ceiling to the cent
        let gross = stripe_eu().gross_for_net(dec!(30));
        assert_eq!(gross, dec!(30.68));

        // After the processor takes its cut the operator is still whole
        let kept = gross * dec!(0.986) - dec!(0.25);
        assert!(kept >= dec!(30));
    }

    #[test]
    fn test_degenerate_net_is_zero() {
        assert_eq!(stripe_eu().gross_for_net(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(stripe_eu().gross_for_net(dec!(-5)), Decimal::ZERO);
    }

    #[test]
    fn test_never_under_collects_across_grid() {
        let schedules = [
            FeeSchedule::new(dec!(0.014), dec!(0.25)).unwrap(),
            FeeSchedule::new(dec!(0.059), dec!(0.35)).unwrap(),
            FeeSchedule::new(dec!(0.029), dec!(0.30)).unwrap(),
            FeeSchedule::new(Decimal::ZERO, Decimal::ZERO).unwrap(),
        ];

        for schedule in &schedules {
            let mut net = dec!(0.01);
            while net <= dec!(600) {
                let gross = schedule.gross_for_net(net);
                let kept = gross * (Decimal::ONE - schedule.percent) - schedule.fixed;
                assert!(
                    kept >= net,
                    "under-collected: net={net} gross={gross} kept={kept}"
                );

                // Ceiling overshoot stays below one cent
                let raw = (net + schedule.fixed) / (Decimal::ONE - schedule.percent);
                assert!(
                    gross - raw < dec!(0.01),
                    "overshoot too large: net={net} gross={gross} raw={raw}"
                );

                net += dec!(7.49);
            }
        }
    }

    #[test]
    fn test_rejects_unusable_parameters() {
        assert!(FeeSchedule::new(Decimal::ONE, Decimal::ZERO).is_err());
        assert!(FeeSchedule::new(dec!(1.5), Decimal::ZERO).is_err());
        assert!(FeeSchedule::new(dec!(-0.01), Decimal::ZERO).is_err());
        assert!(FeeSchedule::new(dec!(0.014), dec!(-0.25)).is_err());
        assert!(SurchargePolicy::flat(dec!(-1)).is_err());
    }

    #[test]
    fn test_flat_policy_adds_constant() {
        let policy = SurchargePolicy::flat(dec!(1.50)).unwrap();
        assert_eq!(policy.gross_for_net(dec!(30)), dec!(31.50));
        assert_eq!(policy.gross_for_net(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(policy.gross_for_net(dec!(-3)), Decimal::ZERO);
    }

    #[test]
    fn test_to_cents() {
        assert_eq!(to_cents(dec!(30.68)), Some(3068));
        assert_eq!(to_cents(Decimal::ZERO), Some(0));
        assert_eq!(to_cents(dec!(1.005)), None);
    }
}
