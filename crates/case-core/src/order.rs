//! # Order Types
//!
//! The persisted order row. Created by the checkout initiator, mutated once
//! by the webhook handler when payment is captured, never deleted here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A store order tying a user to a configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID (generated)
    pub id: String,

    /// Owning user
    pub user_id: String,

    /// Configuration being purchased
    pub configuration_id: String,

    /// Persisted amount: the minor-unit quote divided by 100.
    /// The gateway receives the un-divided minor-unit quote, so the two
    /// disagree by a factor of 100 — known unit inconsistency, kept until
    /// product picks a canonical unit.
    pub amount: f64,

    /// Whether payment has been captured for this order
    pub is_paid: bool,

    /// Gateway payment id, set when payment is captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new unpaid order with generated ID.
    ///
    /// `quote` is the minor-unit price; the stored amount is `quote / 100`.
    pub fn new(
        user_id: impl Into<String>,
        configuration_id: impl Into<String>,
        quote: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            configuration_id: configuration_id.into(),
            amount: quote as f64 / 100.0,
            is_paid: false,
            payment_id: None,
            created_at: Utc::now(),
        }
    }

    /// Mark this order paid. Overwriting the same fields again is the
    /// idempotence the at-least-once webhook delivery relies on.
    pub fn mark_paid(&mut self, payment_id: impl Into<String>) {
        self.is_paid = true;
        self.payment_id = Some(payment_id.into());
    }

    /// Receipt string sent to the gateway at session creation
    pub fn receipt(&self) -> String {
        format!("receipt_order_{}", self.id)
    }
}
