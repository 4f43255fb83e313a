use thiserror::Error;

/// Failures surfaced by the API client.
///
/// The split mirrors how callers react: `Unauthorized` invalidates the
/// session globally, everything else is handled by the invoking screen.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An authenticated request came back 401. The interceptor has already
    /// cleared the stored credentials by the time this is returned.
    #[error("session is no longer authorized; sign in again")]
    Unauthorized,

    /// Any other non-2xx response, with the backend's `{message}` when the
    /// body carried one.
    #[error("request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connectivity, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not decode as the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Backend-supplied message, when there is one to show the user.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
