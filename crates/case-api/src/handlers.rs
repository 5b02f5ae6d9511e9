//! # Request Handlers
//!
//! Axum request handlers for the storefront slice: the payment-webhook
//! endpoint and the checkout-session creator.
//!
//! Error surface follows the storefront policy: the two webhook signature
//! rejections get their own plain 400 bodies; every other failure collapses
//! to the generic 500 JSON body with the cause only in server logs.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use case_core::{
    pricing, CheckoutNotes, CheckoutRequest, GatewayEvent, Order, StorefrontError,
    StorefrontResult, WebhookEnvelope,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Vendor signature header on webhook deliveries
pub const SIGNATURE_HEADER: &str = "x-razorpay-signature";

/// Session token header resolved by the session provider
pub const SESSION_HEADER: &str = "x-session-token";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Checkout request body
#[derive(Debug, Deserialize)]
pub struct CheckoutBody {
    /// Configuration to purchase
    #[serde(rename = "configId")]
    pub config_id: String,
}

/// Checkout response: gateway order id, public key, and our order row id
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub key_id: String,
    #[serde(rename = "dbOrderId")]
    pub db_order_id: String,
}

/// Log the failure and return the generic 500 body.
fn generic_failure(err: &StorefrontError) -> Response {
    error!("Request failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "message": "Something went wrong",
            "ok": false
        })),
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "casemint",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handle a Razorpay webhook delivery.
///
/// The body stays unparsed until the signature over the raw bytes has been
/// verified. `payment.captured` marks the referenced order paid; every other
/// event type is a no-op. Both still answer 200 with the parsed event echoed
/// back, so the gateway stops redelivering.
#[instrument(skip(state, headers, body))]
pub async fn razorpay_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = match headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(signature) => signature,
        None => return (StatusCode::BAD_REQUEST, "Invalid signature").into_response(),
    };

    if let Err(err) = state.gateway.verify_signature(&body, signature) {
        return match err {
            StorefrontError::SignatureMismatch => {
                (StatusCode::BAD_REQUEST, "Signature mismatch").into_response()
            }
            // MisconfiguredSecret and anything else stays server-side
            other => generic_failure(&other),
        };
    }

    let envelope = match WebhookEnvelope::parse(&body) {
        Ok(envelope) => envelope,
        Err(err) => return generic_failure(&err),
    };

    match &envelope.event {
        GatewayEvent::PaymentCaptured(entity) => {
            let (user_id, order_id) = match entity.notes.require() {
                Ok(ids) => ids,
                Err(err) => return generic_failure(&err),
            };

            info!(
                "payment.captured: payment={}, user={}, order={}",
                entity.id, user_id, order_id
            );

            if let Err(err) = state.orders.mark_paid(order_id, &entity.id).await {
                return generic_failure(&err);
            }
        }
        GatewayEvent::Other(event_type) => {
            debug!("Ignoring webhook event: {:?}", event_type);
        }
    }

    Json(serde_json::json!({
        "result": envelope.raw,
        "ok": true
    }))
    .into_response()
}

/// Create a checkout session for the authenticated caller.
#[instrument(skip(state, headers, body), fields(config_id = %body.config_id))]
pub async fn create_checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CheckoutBody>,
) -> Response {
    match checkout_inner(&state, &headers, body).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => generic_failure(&err),
    }
}

async fn checkout_inner(
    state: &AppState,
    headers: &HeaderMap,
    body: CheckoutBody,
) -> StorefrontResult<CheckoutResponse> {
    let configuration = state
        .configurations
        .find_configuration(&body.config_id)
        .await?
        .ok_or_else(|| StorefrontError::ConfigurationNotFound {
            config_id: body.config_id.clone(),
        })?;

    let token = headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok());
    let user = state
        .sessions
        .current_user(token)
        .await?
        .ok_or(StorefrontError::Unauthenticated)?;

    let price = pricing::quote(&configuration);

    // Reuse an existing order for this (user, configuration); lookup-only,
    // so two concurrent checkouts can still both create one.
    let order = match state
        .orders
        .find_order_for(&user.id, &configuration.id)
        .await?
    {
        Some(existing) => existing,
        None => {
            state
                .orders
                .insert_order(Order::new(&user.id, &configuration.id, price))
                .await?
        }
    };

    info!(
        "Creating checkout: user={}, configuration={}, price={}",
        user.id, configuration.id, price
    );

    // The gateway gets the un-divided minor-unit quote; the persisted order
    // amount above is price / 100.
    let gateway_order = state
        .gateway
        .create_checkout(&CheckoutRequest {
            amount: price,
            currency: pricing::CURRENCY.to_string(),
            receipt: order.receipt(),
            payment_capture: true,
            notes: CheckoutNotes {
                user_id: user.id.clone(),
                order_id: order.id.clone(),
            },
        })
        .await?;

    Ok(CheckoutResponse {
        order_id: gateway_order.id,
        key_id: state.key_id.clone(),
        db_order_id: order.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_body_field_names() {
        let body: CheckoutBody = serde_json::from_str(r#"{"configId": "cfg_1"}"#).unwrap();
        assert_eq!(body.config_id, "cfg_1");
    }

    #[test]
    fn test_checkout_response_field_names() {
        let response = CheckoutResponse {
            order_id: "order_rzp".to_string(),
            key_id: "rzp_test_abc".to_string(),
            db_order_id: "o1".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["orderId"], "order_rzp");
        assert_eq!(json["key_id"], "rzp_test_abc");
        assert_eq!(json["dbOrderId"], "o1");
    }
}
