//! `gymdesk-client`
//!
//! **Responsibility:** single point of outbound HTTP communication.
//!
//! This crate provides:
//! - A shared [`ApiClient`] that attaches the stored bearer token to every
//!   request and centralizes 401 handling
//! - Per-entity resource groups mirroring the backend REST surface
//! - The client-side error taxonomy
//!
//! Entity payloads are pass-through JSON (`serde_json::Value`): the backend
//! owns validation and business rules, the client moves data.

pub mod credentials;
pub mod error;
pub mod http;
pub mod resources;

pub use credentials::{CredentialSource, UnauthorizedSink};
pub use error::ApiError;
pub use http::ApiClient;
pub use resources::auth::{MessageResponse, SigninRequest, SigninResponse, SignupRequest};
