//! # tax-payments
//!
//! Payment provider integration for the city tax service.
//!
//! Both providers use hosted flows, so no card data ever touches this
//! service:
//!
//! ## Stripe Checkout (Hosted)
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │ /pay/stripe │────▶│  Stripe Hosted  │────▶│  /success   │
//! │ (303)       │     │  Checkout Page  │     │  (receipt)  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! A one-time Payment-mode session is created with the fee-adjusted gross
//! as its single line item; the payer is redirected to the session URL.
//!
//! ## PayPal.me
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────────────────────┐
//! │ /pay/paypal │────▶│ paypal.me/<user>/<gross>             │
//! │ (302)       │     │ (amount baked into the profile link) │
//! └─────────────┘     └──────────────────────────────────────┘
//! ```
//!
//! No API call at all: the gross amount is encoded directly in the
//! profile URL and the payer confirms on PayPal's page.

mod checkout;
mod error;
mod links;
mod paypal;

pub use checkout::{CheckoutSession, StripeGateway, TaxCheckoutRequest};
pub use error::{PaymentError, Result};
pub use links::{cancel_url, success_url};
pub use paypal::PayPalMe;
