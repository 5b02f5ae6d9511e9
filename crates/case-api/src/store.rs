//! # In-Memory Store
//!
//! In-process implementation of the `ConfigurationStore` / `OrderStore`
//! façades. Stands in for the external ORM-owned schema; configurations are
//! seeded from the catalog at startup.

use async_trait::async_trait;
use case_core::{
    Configuration, ConfigurationCatalog, ConfigurationStore, Order, OrderStore, StorefrontError,
    StorefrontResult,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Shared in-memory order and configuration storage
#[derive(Default)]
pub struct MemoryStore {
    configurations: RwLock<HashMap<String, Configuration>>,
    orders: RwLock<HashMap<String, Order>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a configuration catalog
    pub fn with_catalog(catalog: ConfigurationCatalog) -> Self {
        let configurations = catalog
            .configurations
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();

        Self {
            configurations: RwLock::new(configurations),
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a single configuration (tests and startup)
    pub async fn insert_configuration(&self, configuration: Configuration) {
        self.configurations
            .write()
            .await
            .insert(configuration.id.clone(), configuration);
    }

    /// Number of seeded configurations
    pub async fn configuration_count(&self) -> usize {
        self.configurations.read().await.len()
    }
}

#[async_trait]
impl ConfigurationStore for MemoryStore {
    async fn find_configuration(&self, id: &str) -> StorefrontResult<Option<Configuration>> {
        Ok(self.configurations.read().await.get(id).cloned())
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn find_order_for(
        &self,
        user_id: &str,
        configuration_id: &str,
    ) -> StorefrontResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .find(|o| o.user_id == user_id && o.configuration_id == configuration_id)
            .cloned())
    }

    async fn find_order(&self, order_id: &str) -> StorefrontResult<Option<Order>> {
        Ok(self.orders.read().await.get(order_id).cloned())
    }

    async fn insert_order(&self, order: Order) -> StorefrontResult<Order> {
        self.orders
            .write()
            .await
            .insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn mark_paid(&self, order_id: &str, payment_id: &str) -> StorefrontResult<Order> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| StorefrontError::OrderNotFound {
                order_id: order_id.to_string(),
            })?;

        order.mark_paid(payment_id);
        Ok(order.clone())
    }
}
