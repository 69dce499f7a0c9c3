//! Authentication and profile operations.

use crate::api::types::{ProfileUpdate, RegisterRequest, TokenResponse, User};
use crate::client::ApiClient;
use crate::error::{ApiError, Result};

impl ApiClient {
    /// Log in with username and password.
    ///
    /// Credentials go form-encoded to the auth endpoint (OAuth2 password
    /// form). On success the bearer token is stored, then the user profile
    /// is fetched and cached; a failure in either step propagates.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let token: TokenResponse = self
            .post_form(
                "/api/auth/login",
                &[("username", username), ("password", password)],
            )
            .await?;

        self.session().set_token(&token.access_token)?;
        tracing::info!(username, "login succeeded");

        self.fetch_user_profile().await
    }

    /// Register a new account.
    ///
    /// Returns the created user record; does not establish a session.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/api/auth/register", &request).await
    }

    /// Fetch the current user's profile and cache it in the session.
    ///
    /// Fails with [`ApiError::NotAuthenticated`] before touching the network
    /// when no token is stored.
    pub async fn fetch_user_profile(&self) -> Result<User> {
        if !self.session().is_authenticated() {
            return Err(ApiError::NotAuthenticated);
        }

        let user: User = self.get_json("/api/auth/me").await?;
        self.session().set_user(&user)?;
        Ok(user)
    }

    /// Update the current user's profile; the cached user follows the
    /// server's response.
    pub async fn update_profile(&self, fields: &ProfileUpdate) -> Result<User> {
        if !self.session().is_authenticated() {
            return Err(ApiError::NotAuthenticated);
        }

        let user: User = self.put_json("/api/auth/me", fields).await?;
        self.session().set_user(&user)?;
        Ok(user)
    }

    /// End the session: clear stored credentials and fire the
    /// login-redirect hook.
    pub fn logout(&self) {
        self.teardown_session();
    }

    /// Whether a token is currently stored. No server round-trip.
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }
}
