//! Session state: cached token and user with write-through persistence.

use std::sync::{Arc, RwLock};

use crate::api::types::User;
use crate::error::{ApiError, Result};

use super::credentials::{CredentialStore, TOKEN_KEY, USER_KEY};

/// Thread-safe holder for the current session.
///
/// Two states only: anonymous (no token) and authenticated (token present).
/// Login moves the session to authenticated; logout or any 401 response moves
/// it back. The token and user are cached in memory and written through to
/// the backing [`CredentialStore`], so a store reopened from the same file
/// resumes the session.
pub struct SessionStore {
    credentials: Arc<dyn CredentialStore>,
    token: RwLock<Option<String>>,
    user: RwLock<Option<User>>,
}

impl SessionStore {
    /// Create a store over the given credential storage, loading any
    /// persisted session.
    ///
    /// A user record that fails to deserialize is discarded rather than
    /// failing the open; the profile is re-fetched on next use.
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        let token = credentials.get(TOKEN_KEY)?;
        let user = match credentials.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable stored user record");
                    credentials.remove(USER_KEY)?;
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            credentials,
            token: RwLock::new(token),
            user: RwLock::new(user),
        })
    }

    /// Whether a token is currently stored. No server round-trip.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .map(|t| t.is_some())
            .unwrap_or(false)
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    /// The cached user record, if any.
    pub fn user(&self) -> Option<User> {
        self.user.read().ok().and_then(|u| u.clone())
    }

    /// Store a new bearer token (login success).
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.credentials.set(TOKEN_KEY, token)?;
        let mut cached = self.token.write().map_err(|_| ApiError::LockPoisoned)?;
        *cached = Some(token.to_string());
        tracing::debug!("session token stored");
        Ok(())
    }

    /// Store the user record (profile fetch or update).
    pub fn set_user(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.credentials.set(USER_KEY, &raw)?;
        let mut cached = self.user.write().map_err(|_| ApiError::LockPoisoned)?;
        *cached = Some(user.clone());
        Ok(())
    }

    /// Drop the whole session: both storage keys and both caches.
    pub fn clear(&self) -> Result<()> {
        self.credentials.remove(TOKEN_KEY)?;
        self.credentials.remove(USER_KEY)?;

        let mut token = self.token.write().map_err(|_| ApiError::LockPoisoned)?;
        *token = None;
        let mut user = self.user.write().map_err(|_| ApiError::LockPoisoned)?;
        *user = None;

        tracing::debug!("session cleared");
        Ok(())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
