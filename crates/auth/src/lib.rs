//! `gymdesk-auth` — pure session/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it models
//! roles, display-only token claims, the session record, and the access
//! guard. Acquiring and persisting a session live elsewhere.

pub mod claims;
pub mod guard;
pub mod roles;
pub mod session;

pub use claims::{
    DecodedToken, TokenClaims, TokenDecodeError, TokenValidationError, decode_unverified,
    validate_claims,
};
pub use guard::{Access, check_access};
pub use roles::{Role, primary_role};
pub use session::{Session, SessionState, UserProfile};
