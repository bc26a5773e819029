//! Application State

use std::sync::Arc;

use tax_payments::{PayPalMe, StripeGateway};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration
    pub config: Arc<Config>,

    /// PayPal.me profile receiving payments
    pub paypal: Arc<PayPalMe>,

    /// Stripe gateway (None if not configured)
    pub stripe: Option<Arc<StripeGateway>>,
}
