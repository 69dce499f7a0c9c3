//! HTTP client for the RiskDesk backend.
//!
//! [`ApiClient`] wraps `reqwest` with the two behaviors every call shares:
//! the stored bearer token is attached to each outgoing request, and any 401
//! response tears the session down and fires the login-redirect hook. Typed
//! endpoint bindings live in [`crate::api`].

use std::sync::Arc;

use reqwest::header::RETRY_AFTER;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Callback invoked when the user must be sent to the login screen.
///
/// The embedding shell decides what navigation means: a router push, a view
/// swap, a printed prompt.
pub type LoginRedirectHook = Arc<dyn Fn() + Send + Sync>;

/// Client for the RiskDesk REST API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    on_login_redirect: Option<LoginRedirectHook>,
}

impl ApiClient {
    /// Build a client from configuration and an injected session store.
    pub fn new(config: &Config, session: Arc<SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            session,
            on_login_redirect: None,
        })
    }

    /// Install the login-redirect hook, fired on logout and 401 teardown.
    pub fn with_login_redirect(mut self, hook: LoginRedirectHook) -> Self {
        self.on_login_redirect = Some(hook);
        self
    }

    /// The session store this client consults.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// The resolved backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request_json(self.http.get(self.url(path))).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request_json(self.http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request_json(self.http.put(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T> {
        self.request_json(self.http.post(self.url(path)).form(form))
            .await
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    /// Send a request with the bearer decorator and error mapping applied.
    ///
    /// Non-success responses become [`ApiError::Status`] with the decoded
    /// body and any `Retry-After` hint; a 401 additionally clears the
    /// session and fires the login-redirect hook.
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

        let err = ApiError::Status {
            status: status.as_u16(),
            body,
            retry_after,
        };
        if err.is_auth_failure() {
            self.teardown_session();
        }
        Err(err)
    }

    /// Clear the session and send the user back to login.
    ///
    /// Runs on explicit logout and on any 401 response. A storage failure
    /// during teardown is logged, not surfaced; the original error (if any)
    /// matters more to the caller.
    pub(crate) fn teardown_session(&self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "failed to clear session storage");
        }
        tracing::info!("session ended, redirecting to login");
        if let Some(hook) = &self.on_login_redirect {
            hook();
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}
