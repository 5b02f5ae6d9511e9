//! # case-api
//!
//! HTTP API layer for the casemint storefront backend.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The payment-webhook endpoint and checkout-session creator
//! - In-process store and session stand-ins for the external collaborators
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/checkout` | Create checkout session |
//! | POST | `/api/webhooks` | Razorpay webhook |

pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
