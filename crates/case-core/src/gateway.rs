//! # Payment Gateway Trait
//!
//! Narrow capability seam for the third-party payment gateway: verify a
//! webhook signature, create a checkout order. The concrete integration
//! (Razorpay) lives in its own crate and is swappable/mockable in tests.

use crate::error::StorefrontResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Metadata notes attached to a gateway checkout order.
///
/// These come back to us verbatim in the webhook payment's notes and are
/// how the webhook handler locates the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutNotes {
    #[serde(rename = "userId")]
    pub user_id: String,

    #[serde(rename = "orderId")]
    pub order_id: String,
}

/// Parameters for creating a gateway checkout order
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    /// Amount in the smallest currency unit (un-divided quote)
    pub amount: i64,

    /// ISO 4217 currency code
    pub currency: String,

    /// Receipt string derived from the store order id
    pub receipt: String,

    /// Auto-capture funds on payment
    pub payment_capture: bool,

    /// Application identifiers echoed back by webhooks
    pub notes: CheckoutNotes,
}

/// A checkout order created at the gateway
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayOrder {
    /// Gateway's order/session id
    pub id: String,
}

/// Capability trait for payment gateway integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Verify a webhook signature over the raw body.
    ///
    /// Fails with `MisconfiguredSecret` when the shared secret is unset and
    /// `SignatureMismatch` when verification fails.
    fn verify_signature(&self, payload: &[u8], signature: &str) -> StorefrontResult<()>;

    /// Create a checkout order at the gateway.
    async fn create_checkout(&self, request: &CheckoutRequest) -> StorefrontResult<GatewayOrder>;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
