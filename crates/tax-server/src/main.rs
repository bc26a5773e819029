//! city-tax-service HTTP Server
//!
//! Axum-based server that computes fee-adjusted tourist-tax amounts and
//! redirects payers to the configured payment provider's hosted flow.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tax_payments::{PayPalMe, StripeGateway};

use crate::config::Config;
use crate::handlers::{cancel, health_check, index, pay_paypal, pay_stripe, success};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let paypal = Arc::new(PayPalMe::new(&config.paypal_username));
    let stripe = StripeGateway::from_env().ok();

    if stripe.is_some() {
        tracing::info!("✓ Stripe configured");
    } else {
        tracing::warn!("⚠ Stripe not configured - /pay/stripe will return diagnostics");
        tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
    }

    tracing::info!(
        leonina = %config.rates.leonina,
        standard = %config.rates.standard,
        paypal = %config.paypal_username,
        "Tariffs loaded"
    );

    let addr = format!("0.0.0.0:{}", config.port);

    // Build application state
    let state = AppState {
        config: Arc::new(config),
        paypal,
        stripe: stripe.map(Arc::new),
    };

    // Build router
    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/pay/stripe", get(pay_stripe))
        .route("/pay/paypal", get(pay_paypal))
        .route("/success", get(success))
        .route("/cancel", get(cancel))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("City-tax-service listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health      - Health check");
    tracing::info!("  GET  /pay/stripe  - Redirect to Stripe hosted checkout");
    tracing::info!("  GET  /pay/paypal  - Redirect to PayPal.me link");
    tracing::info!("  GET  /success     - Post-payment receipt page");
    tracing::info!("  GET  /cancel      - Cancellation page");

    axum::serve(listener, app).await?;

    Ok(())
}
