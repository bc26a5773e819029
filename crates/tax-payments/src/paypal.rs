//! PayPal.me Payment Links
//!
//! No API integration is needed: PayPal.me encodes the amount directly in
//! the profile URL and the payer confirms on PayPal's page.

use rust_decimal::Decimal;

/// A PayPal.me profile that can receive payments.
#[derive(Clone, Debug)]
pub struct PayPalMe {
    username: String,
}

impl PayPalMe {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Profile username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Payment link for a fixed amount, always with two decimals.
    pub fn payment_link(&self, gross: Decimal) -> String {
        format!("https://www.paypal.me/{}/{:.2}", self.username, gross)
    }
}
