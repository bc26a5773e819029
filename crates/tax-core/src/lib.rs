//! # tax-core
//!
//! Tariff and fee arithmetic for the city tax service.
//!
//! The operator wants to receive a fixed *net* tourist-tax amount per stay,
//! but payment processors deduct a percentage plus a fixed fee from every
//! charge. This crate computes the *gross* amount to put in front of the
//! payer so the operator is made whole:
//!
//! ```text
//! gross = (net + fee_fixed) / (1 - fee_percent)      rounded UP to the cent
//! ```
//!
//! ## Example: €30 net through Stripe (1.4% + €0.25)
//!
//! ```text
//! net wanted      €30.00
//! raw gross       (30.00 + 0.25) / 0.986 = 30.6795...
//! charged gross   €30.68   (ceiling to 2 decimals)
//! processor keeps €30.68 * 0.014 + 0.25 = €0.6795
//! operator nets   €30.0005  >= €30.00  ✓
//! ```
//!
//! Rounding up means the operator can over-collect, but never by a full
//! cent, and never comes up short.

pub mod error;
pub mod fees;
pub mod tariff;

pub use error::{FeeError, Result};
pub use fees::{FeeSchedule, SurchargePolicy, to_cents};
pub use tariff::{RateCard, Stay};
