//! # Application State
//!
//! Shared state for the Axum application: gateway client, store and session
//! seams, and the public key id returned to checkout callers.

use crate::session::TokenSessions;
use crate::store::MemoryStore;
use case_core::{
    BoxedConfigurationStore, BoxedOrderStore, BoxedPaymentGateway, BoxedSessionProvider,
    ConfigurationCatalog,
};
use case_razorpay::RazorpayClient;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway client
    pub gateway: BoxedPaymentGateway,
    /// Configuration lookup
    pub configurations: BoxedConfigurationStore,
    /// Order persistence
    pub orders: BoxedOrderStore,
    /// Auth session provider
    pub sessions: BoxedSessionProvider,
    /// Public gateway key id, returned to checkout callers
    pub key_id: String,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create the production state: Razorpay gateway, in-memory store seeded
    /// from the configuration catalog, env-seeded sessions.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let catalog = load_configuration_catalog()?;
        let store = Arc::new(MemoryStore::with_catalog(catalog));

        let gateway = RazorpayClient::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Razorpay: {}", e))?;
        let key_id = gateway.key_id().to_string();

        Ok(Self {
            gateway: Arc::new(gateway),
            configurations: store.clone(),
            orders: store,
            sessions: Arc::new(TokenSessions::from_env()),
            key_id,
            config,
        })
    }
}

/// Load the configuration catalog from its config file
fn load_configuration_catalog() -> anyhow::Result<ConfigurationCatalog> {
    let config_paths = [
        "config/configurations.toml",
        "../config/configurations.toml",
        "../../config/configurations.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = ConfigurationCatalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!(
                "Loaded {} configurations from {}",
                catalog.configurations.len(),
                path
            );
            return Ok(catalog);
        }
    }

    // Configurations usually arrive through the store's upstream writer;
    // an empty catalog just means no seed data.
    tracing::warn!("No configuration catalog found, starting empty");
    Ok(ConfigurationCatalog::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }
}
