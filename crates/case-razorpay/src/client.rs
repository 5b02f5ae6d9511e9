//! # Razorpay Orders API Client
//!
//! Creates checkout orders via Razorpay's Orders API and verifies webhook
//! signatures with the configured shared secret. The untyped amount handed
//! to the API is in the smallest currency unit, as Razorpay requires.

use crate::config::RazorpayConfig;
use crate::signature;
use async_trait::async_trait;
use case_core::{
    CheckoutRequest, GatewayOrder, PaymentGateway, StorefrontError, StorefrontResult,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Razorpay gateway client
pub struct RazorpayClient {
    config: RazorpayConfig,
    client: Client,
}

impl RazorpayClient {
    /// Create a new client for the given configuration
    pub fn new(config: RazorpayConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> StorefrontResult<Self> {
        let config = RazorpayConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// The public key id callers embed in their payment widget
    pub fn key_id(&self) -> &str {
        &self.config.key_id
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    fn verify_signature(&self, payload: &[u8], sig: &str) -> StorefrontResult<()> {
        signature::verify(payload, sig, &self.config.webhook_secret)
    }

    #[instrument(skip(self, request), fields(receipt = %request.receipt))]
    async fn create_checkout(&self, request: &CheckoutRequest) -> StorefrontResult<GatewayOrder> {
        let body = RazorpayOrderRequest {
            amount: request.amount,
            currency: &request.currency,
            receipt: &request.receipt,
            payment_capture: request.payment_capture,
            notes: RazorpayNotes {
                user_id: &request.notes.user_id,
                order_id: &request.notes.order_id,
            },
        };

        debug!(
            "Creating Razorpay order: amount={}, currency={}",
            request.amount, request.currency
        );

        let url = format!("{}/v1/orders", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| StorefrontError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StorefrontError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Razorpay API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<RazorpayErrorResponse>(&body) {
                return Err(StorefrontError::Provider {
                    provider: "razorpay".to_string(),
                    message: error_response.error.description,
                });
            }

            return Err(StorefrontError::Provider {
                provider: "razorpay".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let order: RazorpayOrderResponse = serde_json::from_str(&body).map_err(|e| {
            StorefrontError::Serialization(format!("Failed to parse Razorpay response: {}", e))
        })?;

        info!("Created Razorpay order: id={}", order.id);

        Ok(GatewayOrder { id: order.id })
    }

    fn provider_name(&self) -> &'static str {
        "razorpay"
    }
}

// =============================================================================
// Razorpay API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct RazorpayOrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    payment_capture: bool,
    notes: RazorpayNotes<'a>,
}

#[derive(Debug, Serialize)]
struct RazorpayNotes<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    #[serde(rename = "orderId")]
    order_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct RazorpayOrderResponse {
    id: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorResponse {
    error: RazorpayError,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    description: String,
    #[serde(default)]
    code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_core::CheckoutNotes;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> RazorpayClient {
        let config = RazorpayConfig::new("rzp_test_abc123", "secret", "whsec_test")
            .with_api_base_url(base_url);
        RazorpayClient::new(config)
    }

    fn test_request() -> CheckoutRequest {
        CheckoutRequest {
            amount: 2200,
            currency: "INR".to_string(),
            receipt: "receipt_order_o1".to_string(),
            payment_capture: true,
            notes: CheckoutNotes {
                user_id: "u1".to_string(),
                order_id: "o1".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_checkout_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .and(body_partial_json(json!({
                "amount": 2200,
                "currency": "INR",
                "receipt": "receipt_order_o1",
                "payment_capture": true,
                "notes": {"userId": "u1", "orderId": "o1"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "order_Mx1234567890ab",
                "entity": "order",
                "amount": 2200,
                "currency": "INR",
                "status": "created"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let order = client.create_checkout(&test_request()).await.unwrap();

        assert_eq!(order.id, "order_Mx1234567890ab");
    }

    #[tokio::test]
    async fn test_create_checkout_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": "BAD_REQUEST_ERROR",
                    "description": "The amount must be atleast INR 1.00"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.create_checkout(&test_request()).await.unwrap_err();

        match err {
            StorefrontError::Provider { provider, message } => {
                assert_eq!(provider, "razorpay");
                assert!(message.contains("amount"));
            }
            other => panic!("expected Provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_checkout_unparseable_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.create_checkout(&test_request()).await.unwrap_err();
        assert!(matches!(err, StorefrontError::Serialization(_)));
    }

    #[test]
    fn test_verify_signature_delegates_to_secret() {
        let client = test_client("http://unused");
        let body = br#"{"event":"payment.captured"}"#;
        let sig = signature::sign(body, "whsec_test");

        assert!(client.verify_signature(body, &sig).is_ok());
        assert!(matches!(
            client.verify_signature(body, "deadbeef").unwrap_err(),
            StorefrontError::SignatureMismatch
        ));
    }
}
