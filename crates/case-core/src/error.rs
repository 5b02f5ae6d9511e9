//! # Storefront Error Types
//!
//! Typed error handling for the casemint backend.
//! All fallible operations return `Result<T, StorefrontError>`.

use thiserror::Error;

/// Core error type for the webhook and checkout flows
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Webhook request arrived without a signature header
    #[error("Missing webhook signature header")]
    MissingSignature,

    /// Webhook secret is unset or empty on our side
    #[error("Webhook secret is not configured")]
    MisconfiguredSecret,

    /// Webhook signature did not verify against the shared secret
    #[error("Webhook signature mismatch")]
    SignatureMismatch,

    /// Webhook body failed to parse as JSON (after verification)
    #[error("Malformed webhook payload: {0}")]
    MalformedPayload(String),

    /// Payment notes are missing required identifiers
    #[error("Invalid request metadata: {0}")]
    InvalidMetadata(String),

    /// Order referenced by the event does not exist
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: String },

    /// Configuration referenced by the checkout request does not exist
    #[error("No such configuration found: {config_id}")]
    ConfigurationNotFound { config_id: String },

    /// No authenticated session for the checkout caller
    #[error("You need to be logged in")]
    Unauthenticated,

    /// Configuration errors (missing env vars, invalid keys)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Payment gateway API error
    #[error("Provider error [{provider}]: {message}")]
    Provider { provider: String, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorefrontError {
    /// Returns true for the two signature rejections that get their own
    /// 400 response body; every other failure collapses to the generic 500.
    pub fn is_signature_rejection(&self) -> bool {
        matches!(
            self,
            StorefrontError::MissingSignature | StorefrontError::SignatureMismatch
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StorefrontError::MissingSignature => 400,
            StorefrontError::SignatureMismatch => 400,
            StorefrontError::MisconfiguredSecret => 500,
            StorefrontError::MalformedPayload(_) => 500,
            StorefrontError::InvalidMetadata(_) => 500,
            StorefrontError::OrderNotFound { .. } => 500,
            StorefrontError::ConfigurationNotFound { .. } => 500,
            StorefrontError::Unauthenticated => 500,
            StorefrontError::Configuration(_) => 500,
            StorefrontError::Network(_) => 500,
            StorefrontError::Provider { .. } => 500,
            StorefrontError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for storefront operations
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_rejections() {
        assert!(StorefrontError::MissingSignature.is_signature_rejection());
        assert!(StorefrontError::SignatureMismatch.is_signature_rejection());
        assert!(!StorefrontError::MisconfiguredSecret.is_signature_rejection());
        assert!(!StorefrontError::Unauthenticated.is_signature_rejection());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(StorefrontError::MissingSignature.status_code(), 400);
        assert_eq!(StorefrontError::SignatureMismatch.status_code(), 400);
        assert_eq!(StorefrontError::MisconfiguredSecret.status_code(), 500);
        assert_eq!(
            StorefrontError::OrderNotFound {
                order_id: "o1".into()
            }
            .status_code(),
            500
        );
        // ConfigurationNotFound and Unauthenticated deliberately collapse
        // to 500 as well; only signature errors get a distinguished status.
        assert_eq!(
            StorefrontError::ConfigurationNotFound {
                config_id: "c1".into()
            }
            .status_code(),
            500
        );
        assert_eq!(StorefrontError::Unauthenticated.status_code(), 500);
    }
}
