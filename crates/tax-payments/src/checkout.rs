//! Stripe Checkout Integration
//!
//! Implements the "Stripe Checkout (Hosted)" approach: the payer is
//! redirected to a session URL on Stripe's own checkout page.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, Currency,
};

use tax_core::to_cents;

use crate::error::{PaymentError, Result};

/// Product name shown on the hosted checkout page
const PRODUCT_NAME: &str = "Tourist Tax (City Tax)";

/// Stripe client wrapper
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    /// Create a new Stripe gateway
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key))
    }

    /// Create a hosted checkout session for a single tourist-tax charge.
    ///
    /// Returns the session id and the URL to redirect the payer to.
    pub async fn create_checkout_session(
        &self,
        request: TaxCheckoutRequest,
    ) -> Result<CheckoutSession> {
        let unit_amount = to_cents(request.gross).ok_or_else(|| {
            PaymentError::InvalidAmount(format!("not a cent amount: {}", request.gross))
        })?;

        let mut params = CreateCheckoutSession::new();
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);
        params.mode = Some(CheckoutSessionMode::Payment);

        // Metadata for reconciling the payment against the booking
        let mut metadata = std::collections::HashMap::new();
        if let Some(ref id) = request.reservation_id {
            metadata.insert("reservation_id".to_string(), id.clone());
        }
        metadata.insert("net_eur".to_string(), format!("{:.2}", request.net));
        params.metadata = Some(metadata);

        // Single line item carrying the fee-adjusted gross
        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::EUR,
                unit_amount: Some(unit_amount),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: PRODUCT_NAME.to_string(),
                    description: Some(charge_description(
                        request.reservation_id.as_deref(),
                        request.net,
                    )),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let checkout_url = session
            .url
            .ok_or_else(|| PaymentError::Stripe("No checkout URL returned".into()))?;

        tracing::info!(
            session_id = %session.id,
            gross = %request.gross,
            net = %request.net,
            "Created checkout session"
        );

        Ok(CheckoutSession {
            id: session.id.to_string(),
            checkout_url,
        })
    }

    /// Get the underlying Stripe client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Line-item description shown to the payer
fn charge_description(reservation_id: Option<&str>, net: Decimal) -> String {
    match reservation_id {
        Some(id) => format!("Reservation {id} — net €{net:.2}"),
        None => format!("Net €{net:.2}"),
    }
}

/// Request to create a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaxCheckoutRequest {
    /// Gross amount to charge, fees passed through to the payer
    pub gross: Decimal,

    /// Net amount the operator expects to keep
    pub net: Decimal,

    /// Booking reference shown on the checkout page
    #[serde(default)]
    pub reservation_id: Option<String>,

    /// URL to redirect after successful payment
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,
}

/// Result of creating a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Stripe session ID
    pub id: String,

    /// URL to redirect the payer to
    pub checkout_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_charge_description() {
        assert_eq!(
            charge_description(Some("TEST123"), dec!(30)),
            "Reservation TEST123 — net €30.00"
        );
        assert_eq!(charge_description(None, dec!(12.5)), "Net €12.50");
    }
}
