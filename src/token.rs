//! Token decoding and validity checks.
//!
//! Tokens are issued by the Ego identity service as signed JWTs. This module
//! checks shape and freshness only; signature verification stays with the
//! issuer, so nothing here is a security boundary on its own. Workflow:
//! 1. Split the token into its three dot-separated segments
//! 2. base64url-decode the payload segment
//! 3. Deserialize the payload into [`Claims`]
//! 4. (`validate_token` only) reject tokens at or past their embedded expiry

use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// The `context.user` object embedded in a token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserClaims {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Account status at the identity service, e.g. `APPROVED`.
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type", default)]
    pub user_type: String,
}

/// The `context` object: the ordered scope list plus the user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimContext {
    pub scope: Vec<String>,
    #[serde(default)]
    pub user: Option<UserClaims>,
}

/// Decoded token payload.
///
/// Never mutated after decode: every downstream derivation (permission set,
/// role, redirect path) is a pure function of this value. `exp` and
/// `context.scope` are required; the rest of the payload tolerates absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub iss: String,
    #[serde(default)]
    pub sub: String,
    /// Issued-at, seconds since epoch.
    #[serde(default)]
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    pub context: ClaimContext,
}

impl Claims {
    /// Whether the token was expired at `now`. A token is expired at the
    /// exact expiry instant, not one second after.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Decode a token's payload into [`Claims`] without checking freshness.
///
/// Pure parse; the only failure is [`TokenError::Malformed`]. An expired
/// token still decodes, so callers can inspect its claims (e.g. to decide
/// whether a refresh is worth attempting).
pub fn decode_token(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let payload_bytes = engine.decode(payload).map_err(|e| {
        tracing::debug!(error = %e, "token payload is not valid base64url");
        TokenError::Malformed
    })?;

    serde_json::from_slice(&payload_bytes).map_err(|e| {
        tracing::debug!(error = %e, "token payload is not a well-formed claim set");
        TokenError::Malformed
    })
}

/// Decode a token and additionally require that it is unexpired.
pub fn validate_token(token: &str) -> Result<Claims, TokenError> {
    validate_token_at(token, Utc::now())
}

/// [`validate_token`] against an explicit clock.
pub fn validate_token_at(token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
    let claims = decode_token(token)?;
    if claims.is_expired_at(now) {
        return Err(TokenError::Expired);
    }
    Ok(claims)
}

/// True when the token decodes and is unexpired. This is the page-guard
/// check performed at every request boundary.
pub fn is_valid_jwt(token: &str) -> bool {
    validate_token(token).is_ok()
}

// ── Tests ────────────────────────────────────────────────────
