//! # riskdesk-client
//!
//! Client SDK for the RiskDesk trading risk management REST API.
//!
//! This crate carries the client-side logic any front-end shell needs to
//! talk to a RiskDesk backend: bearer-token session management, failure
//! classification into user-facing messages, bounded retry with jittered
//! backoff, and a one-alert-at-a-time notification holder.
//!
//! ## Features
//!
//! - **Session management**: durable token/user storage with automatic
//!   teardown on authentication failure
//! - **Error classification**: every failure maps to a single displayable
//!   message, never a raw payload
//! - **Bounded retry**: exponential backoff with jitter, honoring server
//!   `Retry-After` hints
//! - **Typed endpoints**: positions, risk limits, and backtest bindings
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use riskdesk_client::{ApiClient, Config, FileCredentialStore, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> riskdesk_client::Result<()> {
//!     // Initialize logging
//!     riskdesk_client::logging::try_init().ok();
//!
//!     // Base URL from RISKDESK_API_URL, falling back to localhost
//!     let config = Config::load(None).expect("config");
//!
//!     let credentials = Arc::new(FileCredentialStore::open("credentials.json")?);
//!     let session = Arc::new(SessionStore::new(credentials)?);
//!     let client = ApiClient::new(&config, session)?;
//!
//!     let user = client.login("jsmith", "hunter2").await?;
//!     println!("logged in as {} ({})", user.username, user.role);
//!
//!     for position in client.positions().await? {
//!         println!("{}: {:+.2}", position.symbol, position.unrealized_pnl);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod alert;
pub mod api;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod retry;
pub mod session;

// Re-export commonly used types
pub use alert::{Alert, AlertCenter, AlertKind};
pub use api::{
    BacktestMetrics, BacktestRequest, BacktestRun, Position, ProfileUpdate, RiskLimits, User,
};
pub use classify::{disposition, user_message, Disposition};
pub use client::{ApiClient, LoginRedirectHook};
pub use config::{Config, ConfigError};
pub use error::{ApiError, Result};
pub use retry::{retry_api, retry_with_backoff, RetryOptions};
pub use session::{CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionStore};
