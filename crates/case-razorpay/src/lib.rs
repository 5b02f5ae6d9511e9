//! # case-razorpay
//!
//! Razorpay gateway integration for the casemint storefront backend.
//!
//! This crate implements the `PaymentGateway` seam from `case-core`:
//!
//! - **Checkout orders** via the Razorpay Orders API (basic auth, JSON)
//! - **Webhook signature verification** — HMAC-SHA256 over the raw body,
//!   hex encoded, constant-time compared against `x-razorpay-signature`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use case_razorpay::RazorpayClient;
//! use case_core::{CheckoutNotes, CheckoutRequest, PaymentGateway};
//!
//! // Reads RAZORPAY_KEY_ID / RAZORPAY_KEY_SECRET / RAZORPAY_WEBHOOK_SECRET
//! let gateway = RazorpayClient::from_env()?;
//!
//! let order = gateway.create_checkout(&CheckoutRequest {
//!     amount: 2200,
//!     currency: "INR".into(),
//!     receipt: "receipt_order_abc".into(),
//!     payment_capture: true,
//!     notes: CheckoutNotes { user_id: "u1".into(), order_id: "abc".into() },
//! }).await?;
//! ```

pub mod client;
pub mod config;
pub mod signature;

// Re-exports
pub use client::RazorpayClient;
pub use config::RazorpayConfig;
