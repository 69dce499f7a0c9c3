//! Session management module.
//!
//! This module holds the authenticated session: durable credential storage,
//! and the in-memory token/user cache the client consults on every request.

mod credentials;
mod store;

pub use credentials::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, TOKEN_KEY, USER_KEY,
};
pub use store::SessionStore;
