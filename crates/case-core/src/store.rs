//! # Database Gateway Seams
//!
//! CRUD façade traits over the external order/configuration storage. The
//! real schema is owned elsewhere; this scope performs no transactions or
//! locks, so concurrent checkouts for the same (user, configuration) can
//! race past the lookup and create duplicate orders — acknowledged gap.

use crate::configuration::Configuration;
use crate::error::StorefrontResult;
use crate::order::Order;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to stored configurations
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Find a configuration by id
    async fn find_configuration(&self, id: &str) -> StorefrontResult<Option<Configuration>>;
}

/// Order persistence façade
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Find an existing order for a (user, configuration) pair
    async fn find_order_for(
        &self,
        user_id: &str,
        configuration_id: &str,
    ) -> StorefrontResult<Option<Order>>;

    /// Fetch an order by id
    async fn find_order(&self, order_id: &str) -> StorefrontResult<Option<Order>>;

    /// Insert a new order row
    async fn insert_order(&self, order: Order) -> StorefrontResult<Order>;

    /// Set `is_paid = true` and the payment id on an order.
    ///
    /// Fails with `OrderNotFound` when no such order exists. Re-applying
    /// the same update is an idempotent field overwrite.
    async fn mark_paid(&self, order_id: &str, payment_id: &str) -> StorefrontResult<Order>;
}

/// Shared store handles
pub type BoxedConfigurationStore = Arc<dyn ConfigurationStore>;
pub type BoxedOrderStore = Arc<dyn OrderStore>;
