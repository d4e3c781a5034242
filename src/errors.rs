use thiserror::Error;

/// Failure modes of token decoding and validation.
///
/// This is the complete taxonomy. Everything else (missing scopes, unknown
/// permission strings, unknown program identifiers) degrades to "no access"
/// or an empty result rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token string does not have the expected three-segment shape, or
    /// its payload segment does not decode into a well-formed claim set.
    /// Callers treat this the same as "not logged in"; it is never a
    /// transient condition to retry.
    #[error("malformed token")]
    Malformed,

    /// The token parses but its embedded expiry has passed. Kept distinct
    /// from `Malformed` so callers can attempt a refresh against the
    /// identity service.
    #[error("token expired")]
    Expired,
}
