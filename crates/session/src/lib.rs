//! `gymdesk-session`
//!
//! **Responsibility:** durable session state and its mutation surface.
//!
//! This crate provides:
//! - The token store: two fixed keys (`token`, `user`) persisted across
//!   runs, degrading to unauthenticated when storage is unavailable
//! - The [`SessionManager`]: restore/login/register/logout, the only
//!   writers of session state besides the client's 401 interceptor
//!
//! Screens read the session and call resource methods; they never touch
//! the store directly.

pub mod manager;
pub mod store;

pub use manager::{SessionError, SessionManager};
pub use store::{FileStore, KEY_TOKEN, KEY_USER, MemoryStore, SessionStore, StoreCredentials};
