//! Display-only JWT inspection.
//!
//! The client never verifies token signatures; the backend is the sole
//! authority on whether a token is valid. Decoding here exists so the UI
//! can show the subject and expiry, and nothing in the session layer is
//! allowed to treat the result as proof of anything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use base64::prelude::*;

/// Claims the backend is known to embed in its access tokens.
///
/// Unknown claims are ignored on decode; `roles` mirrors the granted
/// authorities and is optional because older tokens omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (username).
    pub sub: String,

    /// Issued-at, seconds since the epoch.
    #[serde(default)]
    pub iat: Option<i64>,

    /// Expiration, seconds since the epoch.
    #[serde(default)]
    pub exp: Option<i64>,

    /// Granted authorities, as the backend spells them (`ROLE_ADMIN`).
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

impl TokenClaims {
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// A decoded (NOT verified) token: header plus claims.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    /// Raw JOSE header (`alg`, `typ`, ...).
    pub header: serde_json::Value,
    pub claims: TokenClaims,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenDecodeError {
    #[error("token is not a three-part JWT")]
    Malformed,

    #[error("token segment is not valid base64: {0}")]
    Base64(String),

    #[error("token segment is not valid JSON: {0}")]
    Json(String),
}

/// Decode a bearer token's header and claims **without verifying it**.
///
/// For display only. An attacker can mint a token this function decodes
/// happily; authorization decisions stay with the backend.
pub fn decode_unverified(token: &str) -> Result<DecodedToken, TokenDecodeError> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenDecodeError::Malformed);
    };

    let header = decode_segment(header)?;
    let claims_value = decode_segment(payload)?;
    let claims = serde_json::from_value(claims_value)
        .map_err(|e| TokenDecodeError::Json(e.to_string()))?;

    Ok(DecodedToken { header, claims })
}

fn decode_segment(segment: &str) -> Result<serde_json::Value, TokenDecodeError> {
    let bytes = BASE64_URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenDecodeError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenDecodeError::Json(e.to_string()))
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,

    #[error("token carries no expiration claim")]
    MissingExpiry,
}

/// Deterministically check the claim time window.
///
/// This is a UX affordance (pre-emptive re-login prompts, `debug jwt`
/// output). It is not verification: an expired-but-present token is still
/// sent to the backend, which has the final say.
pub fn validate_claims(claims: &TokenClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    let expires_at = claims.expires_at().ok_or(TokenValidationError::MissingExpiry)?;

    if let Some(issued_at) = claims.issued_at() {
        if expires_at <= issued_at {
            return Err(TokenValidationError::InvalidTimeWindow);
        }
        if now < issued_at {
            return Err(TokenValidationError::NotYetValid);
        }
    }

    if now >= expires_at {
        return Err(TokenValidationError::Expired);
    }

    Ok(())
}
