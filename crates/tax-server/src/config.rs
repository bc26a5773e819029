//! Environment Configuration
//!
//! All tunables come from the environment (Render-style deployment); a
//! `.env` file is honored in development via `dotenvy`. Malformed numeric
//! values fail startup instead of silently falling back.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use tax_core::{FeeError, FeeSchedule, RateCard, SurchargePolicy};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: String, value: String },

    #[error(transparent)]
    Fee(#[from] FeeError),
}

/// Runtime configuration for the tax server.
#[derive(Clone, Debug)]
pub struct Config {
    /// TCP port to bind
    pub port: u16,

    /// Public base URL used to build success/cancel redirects
    pub base_url: String,

    /// PayPal.me profile receiving payments
    pub paypal_username: String,

    /// Nightly per-guest rates
    pub rates: RateCard,

    /// Surcharge policy applied to Stripe payments
    pub stripe_policy: SurchargePolicy,

    /// Surcharge policy applied to PayPal payments
    pub paypal_policy: SurchargePolicy,
}

impl Config {
    /// Load configuration from the environment, applying defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_var("PORT", 10000)?;
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));
        let paypal_username =
            std::env::var("PAYPAL_ME_USERNAME").unwrap_or_else(|_| "MicheleB496".into());

        let rates = RateCard {
            leonina: parse_var("RATE_LEONINA_EUR", dec!(6))?,
            standard: parse_var("RATE_STANDARD_EUR", dec!(5))?,
        };

        // Stripe default: 1.4% + €0.25 (typical EU card pricing).
        let stripe_policy = policy_from_env(
            "STRIPE_FLAT_SURCHARGE_EUR",
            ("STRIPE_FEE_PCT", dec!(0.014)),
            ("STRIPE_FEE_FIX_EUR", dec!(0.25)),
        )?;

        // PayPal default: 5.9% + €0.35, calibrated from observed deductions.
        let paypal_policy = policy_from_env(
            "PAYPAL_FLAT_SURCHARGE_EUR",
            ("PAYPAL_FEE_PCT", dec!(0.059)),
            ("PAYPAL_FEE_FIX_EUR", dec!(0.35)),
        )?;

        Ok(Self {
            port,
            base_url,
            paypal_username,
            rates,
            stripe_policy,
            paypal_policy,
        })
    }
}

/// Parse an env var into `T`, using `default` when the var is unset.
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name: name.into(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

/// A set flat-surcharge variable wins over the inverse-fee parameters.
fn policy_from_env(
    flat_name: &str,
    (pct_name, pct_default): (&str, Decimal),
    (fix_name, fix_default): (&str, Decimal),
) -> Result<SurchargePolicy, ConfigError> {
    if std::env::var(flat_name).is_ok() {
        let flat = parse_var(flat_name, Decimal::ZERO)?;
        return Ok(SurchargePolicy::flat(flat)?);
    }

    let schedule = FeeSchedule::new(
        parse_var(pct_name, pct_default)?,
        parse_var(fix_name, fix_default)?,
    )?;
    Ok(SurchargePolicy::InverseFee(schedule))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_default_when_unset() {
        let rate: Decimal = parse_var("CITY_TAX_TEST_UNSET_VAR", dec!(5)).unwrap();
        assert_eq!(rate, dec!(5));
    }

    #[test]
    fn test_policy_defaults_to_inverse_fee() {
        let policy = policy_from_env(
            "CITY_TAX_TEST_UNSET_FLAT",
            ("CITY_TAX_TEST_UNSET_PCT", dec!(0.014)),
            ("CITY_TAX_TEST_UNSET_FIX", dec!(0.25)),
        )
        .unwrap();
        assert_eq!(
            policy,
            SurchargePolicy::InverseFee(FeeSchedule::new(dec!(0.014), dec!(0.25)).unwrap())
        );
    }
}
