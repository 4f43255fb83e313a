//! Seams between the client and the session layer.
//!
//! The client reads the token through [`CredentialSource`] on every request
//! and is the only component besides the session manager allowed to write
//! the store, and then only to clear it (the 401 interceptor).

/// Where the bearer token lives.
pub trait CredentialSource: Send + Sync {
    /// Current token, if one is stored.
    fn token(&self) -> Option<String>;

    /// Remove all stored credentials. Called by the 401 interceptor.
    fn clear(&self);
}

/// Observer notified when the interceptor invalidates the session.
///
/// Fired at most once per stored token: repeated 401s against an
/// already-cleared store stay silent, so a burst of failing background
/// requests cannot stack up redirects.
pub trait UnauthorizedSink: Send + Sync {
    fn on_unauthorized(&self);
}

/// Credential source for unauthenticated clients (probes, tests).
pub struct NoCredentials;

impl CredentialSource for NoCredentials {
    fn token(&self) -> Option<String> {
        None
    }

    fn clear(&self) {}
}

/// Sink that ignores invalidation. Useful where no screen exists to
/// redirect, e.g. the connectivity probe.
pub struct NullSink;

impl UnauthorizedSink for NullSink {
    fn on_unauthorized(&self) {}
}
