//! # Webhook Event Envelope
//!
//! The gateway-defined webhook envelope, modeled as a tagged union over the
//! `event` field. Only `payment.captured` is decoded strictly; every other
//! event type passes through as an opaque value so the handler can echo it
//! back. The envelope must only be parsed AFTER signature verification.

use crate::error::{StorefrontError, StorefrontResult};
use serde::Deserialize;
use serde_json::Value;

/// Event type the order-state update listens for
pub const PAYMENT_CAPTURED: &str = "payment.captured";

/// Application metadata carried in the gateway payment's notes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentNotes {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,

    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
}

impl PaymentNotes {
    /// Require both identifiers to be present.
    ///
    /// The handler checks presence only; it does not verify the order
    /// actually belongs to the user.
    pub fn require(&self) -> StorefrontResult<(&str, &str)> {
        match (self.user_id.as_deref(), self.order_id.as_deref()) {
            (Some(user_id), Some(order_id)) => Ok((user_id, order_id)),
            _ => Err(StorefrontError::InvalidMetadata(
                "notes must carry userId and orderId".to_string(),
            )),
        }
    }
}

/// The payment entity inside a `payment.captured` event
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentEntity {
    /// Gateway payment id, written onto the order
    pub id: String,

    #[serde(default)]
    pub notes: PaymentNotes,
}

#[derive(Debug, Deserialize)]
struct CapturedEnvelope {
    payload: CapturedPayload,
}

#[derive(Debug, Deserialize)]
struct CapturedPayload {
    payment: CapturedPayment,
}

#[derive(Debug, Deserialize)]
struct CapturedPayment {
    entity: PaymentEntity,
}

/// Classified webhook event
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    /// Funds captured for a payment; carries the strictly decoded entity
    PaymentCaptured(PaymentEntity),
    /// Any other event type: a no-op for this scope
    Other(Option<String>),
}

/// A verified, parsed webhook body.
///
/// Keeps the raw JSON value alongside the classified event because the
/// success response echoes the parsed event back to the gateway.
#[derive(Debug, Clone)]
pub struct WebhookEnvelope {
    pub raw: Value,
    pub event: GatewayEvent,
}

impl WebhookEnvelope {
    /// Parse a raw (already signature-verified) webhook body.
    pub fn parse(body: &[u8]) -> StorefrontResult<Self> {
        let raw: Value = serde_json::from_slice(body)
            .map_err(|e| StorefrontError::MalformedPayload(e.to_string()))?;

        let event = match raw.get("event").and_then(Value::as_str) {
            Some(PAYMENT_CAPTURED) => {
                let envelope: CapturedEnvelope = serde_json::from_value(raw.clone())
                    .map_err(|e| StorefrontError::MalformedPayload(e.to_string()))?;
                GatewayEvent::PaymentCaptured(envelope.payload.payment.entity)
            }
            other => GatewayEvent::Other(other.map(String::from)),
        };

        Ok(Self { raw, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn captured_body(notes: Value) -> Vec<u8> {
        json!({
            "event": "payment.captured",
            "payload": {
                "payment": {
                    "entity": {
                        "id": "pay_123",
                        "notes": notes
                    }
                }
            }
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn test_parse_payment_captured() {
        let body = captured_body(json!({"userId": "u1", "orderId": "o1"}));
        let envelope = WebhookEnvelope::parse(&body).unwrap();

        match envelope.event {
            GatewayEvent::PaymentCaptured(entity) => {
                assert_eq!(entity.id, "pay_123");
                let (user_id, order_id) = entity.notes.require().unwrap();
                assert_eq!(user_id, "u1");
                assert_eq!(order_id, "o1");
            }
            other => panic!("expected PaymentCaptured, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_order_id_in_notes() {
        let body = captured_body(json!({"userId": "u1"}));
        let envelope = WebhookEnvelope::parse(&body).unwrap();

        match envelope.event {
            GatewayEvent::PaymentCaptured(entity) => {
                let err = entity.notes.require().unwrap_err();
                assert!(matches!(err, StorefrontError::InvalidMetadata(_)));
            }
            other => panic!("expected PaymentCaptured, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_event_passes_through() {
        let body = json!({"event": "refund.created", "payload": {}})
            .to_string()
            .into_bytes();
        let envelope = WebhookEnvelope::parse(&body).unwrap();

        assert!(matches!(
            envelope.event,
            GatewayEvent::Other(Some(ref name)) if name == "refund.created"
        ));
        assert_eq!(envelope.raw["event"], "refund.created");
    }

    #[test]
    fn test_missing_event_field_passes_through() {
        let envelope = WebhookEnvelope::parse(br#"{"hello": "world"}"#).unwrap();
        assert!(matches!(envelope.event, GatewayEvent::Other(None)));
    }

    #[test]
    fn test_malformed_json() {
        let err = WebhookEnvelope::parse(b"not json {{").unwrap_err();
        assert!(matches!(err, StorefrontError::MalformedPayload(_)));
    }

    #[test]
    fn test_captured_without_entity_is_malformed() {
        let body = json!({"event": "payment.captured", "payload": {}})
            .to_string()
            .into_bytes();
        let err = WebhookEnvelope::parse(&body).unwrap_err();
        assert!(matches!(err, StorefrontError::MalformedPayload(_)));
    }
}
