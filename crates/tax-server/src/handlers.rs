//! HTTP Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tax_core::{Stay, SurchargePolicy};
use tax_payments::{TaxCheckoutRequest, cancel_url, success_url};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
    pub stripe_configured: bool,
}

#[derive(Debug, Deserialize)]
pub struct PayParams {
    #[serde(default = "default_listing")]
    pub listing: String,

    #[serde(default = "default_one")]
    pub guests: u32,

    #[serde(default = "default_one")]
    pub nights: u32,

    /// Booking reference
    #[serde(default, rename = "res")]
    pub reservation: String,
}

fn default_listing() -> String {
    "standard".into()
}

fn default_one() -> u32 {
    1
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Fallback payload when a checkout session cannot be created: surfaces the
/// computed amounts so the operator can still reconcile the charge by hand.
#[derive(Debug, Serialize)]
pub struct QuoteDiagnostics {
    pub provider: &'static str,
    pub listing: String,
    pub guests: u32,
    pub nights: u32,
    pub reservation_id: String,
    pub net_wanted: Decimal,
    pub policy: SurchargePolicy,
    pub gross_to_charge: Decimal,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OutcomeParams {
    #[serde(default, rename = "res")]
    pub reservation: String,

    #[serde(default)]
    pub net: String,

    #[serde(default)]
    pub gross: String,

    #[serde(default)]
    pub provider: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Landing page listing the available endpoints
pub async fn index() -> Html<&'static str> {
    Html(
        "<h3>city-tax-service ✅</h3>\
         <p>Try:</p>\
         <ul>\
           <li>/health</li>\
           <li>/pay/paypal?listing=standard&guests=2&nights=3</li>\
           <li>/pay/stripe?listing=leonina&guests=2&nights=3&res=TEST123</li>\
         </ul>",
    )
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: "city-tax-service",
        version: env!("CARGO_PKG_VERSION"),
        stripe_configured: state.stripe.is_some(),
    })
}

/// Stripe checkout: compute net and gross for the stay, create a hosted
/// session and redirect the payer to it (303).
pub async fn pay_stripe(
    State(state): State<AppState>,
    Query(params): Query<PayParams>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let stay = Stay::new(&params.listing, params.guests, params.nights)
        .with_reservation(&params.reservation);
    let net = stay.net_due(&state.config.rates);
    if net <= Decimal::ZERO {
        return Err(invalid_amount());
    }

    let gross = state.config.stripe_policy.gross_for_net(net);

    // No key configured: surface the computed amounts instead of failing
    let Some(stripe) = state.stripe.as_ref() else {
        return Ok(diagnostics(
            &params,
            net,
            &state.config.stripe_policy,
            gross,
            "Missing STRIPE_SECRET_KEY",
            None,
        )
        .into_response());
    };

    let success = success_url(
        &state.config.base_url,
        stay.reservation_id.as_deref(),
        net,
        gross,
        "stripe",
    )
    .map_err(internal)?;
    let cancel = cancel_url(&state.config.base_url, stay.reservation_id.as_deref())
        .map_err(internal)?;

    let request = TaxCheckoutRequest {
        gross,
        net,
        reservation_id: stay.reservation_id.clone(),
        success_url: success,
        cancel_url: cancel,
    };

    match stripe.create_checkout_session(request).await {
        Ok(session) => Ok(Redirect::to(&session.checkout_url).into_response()),
        Err(e) => {
            tracing::error!(error = %e, reservation = %params.reservation, "Stripe checkout creation failed");
            Ok(diagnostics(
                &params,
                net,
                &state.config.stripe_policy,
                gross,
                "Stripe checkout creation failed",
                Some(e.to_string()),
            )
            .into_response())
        }
    }
}

/// PayPal: compute net and gross, redirect straight to the profile link.
pub async fn pay_paypal(
    State(state): State<AppState>,
    Query(params): Query<PayParams>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let stay = Stay::new(&params.listing, params.guests, params.nights);
    let net = stay.net_due(&state.config.rates);
    if net <= Decimal::ZERO {
        return Err(invalid_amount());
    }

    let gross = state.config.paypal_policy.gross_for_net(net);
    let url = state.paypal.payment_link(gross);

    // paypal.me links use a plain 302
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}

/// Receipt page the provider redirects back to
pub async fn success(Query(params): Query<OutcomeParams>) -> Html<String> {
    let mut body = String::from("<h3>Payment received ✅</h3>");
    if !params.reservation.is_empty() {
        body.push_str(&format!(
            "<p>Reservation: {}</p>",
            escape_html(&params.reservation)
        ));
    }
    if !params.provider.is_empty() {
        body.push_str(&format!(
            "<p>Provider: {}</p>",
            escape_html(&params.provider)
        ));
    }
    if !params.net.is_empty() {
        body.push_str(&format!(
            "<p>Net expected: €{}</p>",
            escape_html(&params.net)
        ));
    }
    if !params.gross.is_empty() {
        body.push_str(&format!(
            "<p>Charged gross: €{}</p>",
            escape_html(&params.gross)
        ));
    }
    Html(body)
}

/// Cancellation page
pub async fn cancel() -> Html<&'static str> {
    Html("<h3>Payment canceled</h3>")
}

// ============================================================================
// Helpers
// ============================================================================

fn diagnostics(
    params: &PayParams,
    net: Decimal,
    policy: &SurchargePolicy,
    gross: Decimal,
    error: &str,
    details: Option<String>,
) -> Json<QuoteDiagnostics> {
    Json(QuoteDiagnostics {
        provider: "stripe",
        listing: params.listing.clone(),
        guests: params.guests,
        nights: params.nights,
        reservation_id: params.reservation.clone(),
        net_wanted: net,
        policy: policy.clone(),
        gross_to_charge: gross,
        error: error.into(),
        details,
    })
}

fn invalid_amount() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Invalid amount.".into(),
            code: "INVALID_AMOUNT".into(),
        }),
    )
}

fn internal(e: tax_payments::PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(error = %e, "Request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.user_message().into(),
            code: "INTERNAL".into(),
        }),
    )
}

/// Minimal escaping for values echoed back into HTML
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>\"&\"</script>"),
            "&lt;script&gt;&quot;&amp;&quot;&lt;/script&gt;"
        );
        assert_eq!(escape_html("TEST123"), "TEST123");
    }

    #[test]
    fn test_pay_params_defaults() {
        let params: PayParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.listing, "standard");
        assert_eq!(params.guests, 1);
        assert_eq!(params.nights, 1);
        assert!(params.reservation.is_empty());
    }

    #[test]
    fn test_pay_params_res_rename() {
        let params: PayParams =
            serde_json::from_value(serde_json::json!({ "res": "TEST123" })).unwrap();
        assert_eq!(params.reservation, "TEST123");
    }
}
