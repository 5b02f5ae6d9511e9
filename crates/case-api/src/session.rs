//! # Token Session Provider
//!
//! In-process stand-in for the external auth provider: maps opaque session
//! tokens from the `x-session-token` header to users. The production service
//! would back this seam with the real session library.

use async_trait::async_trait;
use case_core::{SessionProvider, StorefrontResult, User};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Session-token to user mapping
#[derive(Default)]
pub struct TokenSessions {
    sessions: RwLock<HashMap<String, User>>,
}

impl TokenSessions {
    /// Create an empty provider (no authenticated callers)
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed sessions from the `SESSION_TOKENS` env var, formatted as a
    /// comma-separated list of `token=user_id` pairs. Dev-mode convenience;
    /// absent or malformed entries are skipped.
    pub fn from_env() -> Self {
        let mut sessions = HashMap::new();

        if let Ok(raw) = std::env::var("SESSION_TOKENS") {
            for pair in raw.split(',') {
                if let Some((token, user_id)) = pair.split_once('=') {
                    let (token, user_id) = (token.trim(), user_id.trim());
                    if !token.is_empty() && !user_id.is_empty() {
                        sessions.insert(token.to_string(), User::new(user_id));
                    }
                }
            }
        }

        Self {
            sessions: RwLock::new(sessions),
        }
    }

    /// Register a session token for a user
    pub async fn insert(&self, token: impl Into<String>, user: User) {
        self.sessions.write().await.insert(token.into(), user);
    }
}

#[async_trait]
impl SessionProvider for TokenSessions {
    async fn current_user(&self, token: Option<&str>) -> StorefrontResult<Option<User>> {
        let Some(token) = token else {
            return Ok(None);
        };
        Ok(self.sessions.read().await.get(token).cloned())
    }
}
