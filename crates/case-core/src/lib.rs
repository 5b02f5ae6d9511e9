//! # case-core
//!
//! Core types and traits for the casemint storefront backend.
//!
//! This crate provides:
//! - `PaymentGateway` trait for the payment provider seam
//! - `ConfigurationStore` / `OrderStore` façades over external persistence
//! - `SessionProvider` for the auth collaborator
//! - `Configuration` and the fixed pricing table
//! - `Order` and the webhook `WebhookEnvelope` / `GatewayEvent` types
//! - `StorefrontError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use case_core::{pricing, Order};
//!
//! // Quote a configuration and open an order for it
//! let configuration = store.find_configuration("cfg_1").await?.unwrap();
//! let price = pricing::quote(&configuration);
//! let order = Order::new(&user.id, &configuration.id, price);
//!
//! // Hand the un-divided quote to the gateway
//! let session = gateway.create_checkout(&request).await?;
//! ```

pub mod configuration;
pub mod error;
pub mod event;
pub mod gateway;
pub mod order;
pub mod pricing;
pub mod session;
pub mod store;

// Re-exports for convenience
pub use configuration::{Configuration, ConfigurationCatalog, Finish, Material};
pub use error::{StorefrontError, StorefrontResult};
pub use event::{GatewayEvent, PaymentEntity, PaymentNotes, WebhookEnvelope, PAYMENT_CAPTURED};
pub use gateway::{
    BoxedPaymentGateway, CheckoutNotes, CheckoutRequest, GatewayOrder, PaymentGateway,
};
pub use order::Order;
pub use session::{BoxedSessionProvider, SessionProvider, User};
pub use store::{BoxedConfigurationStore, BoxedOrderStore, ConfigurationStore, OrderStore};
