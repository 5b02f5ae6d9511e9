//! # Auth Session Seam
//!
//! Authentication is delegated to an external session provider; the checkout
//! initiator only needs "who is the current caller". The trait takes the
//! opaque session token extracted from the request.

use crate::error::StorefrontResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The authenticated caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Resolves the current user from a session token
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the user for the session, or `None` when unauthenticated
    async fn current_user(&self, token: Option<&str>) -> StorefrontResult<Option<User>>;
}

/// Shared session provider handle
pub type BoxedSessionProvider = Arc<dyn SessionProvider>;
