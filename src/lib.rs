//! Session and authorization derivation for the ARGO submission platform.
//!
//! The Ego identity service issues signed JWTs whose payload carries an
//! ordered list of permission scopes. This crate turns that opaque token
//! string into typed claims, a permission set, a coarse role classification,
//! and a default landing path:
//! 1. [`token::decode_token`] / [`token::validate_token`]: shape and
//!    freshness checks (signature verification stays with the issuer)
//! 2. [`permissions::PermissionSet`]: ordered scope extraction
//! 3. [`roles`]: pure access predicates and the [`roles::Role`] sum type
//! 4. [`paths::default_redirect_path`]: canonical landing path
//!
//! Everything is pure and synchronous. Token fetch and refresh against the
//! identity service, routing, and rendering all belong to the caller.

pub mod errors;
pub mod paths;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod token;

pub use errors::TokenError;
pub use permissions::PermissionSet;
pub use roles::Role;
pub use session::{Session, SessionContext};
pub use token::{decode_token, is_valid_jwt, validate_token, Claims, UserClaims};
