//! Explicit session context.
//!
//! The front-end used to keep the current token in an application-wide
//! context reachable from any component. Here that becomes an explicit value
//! constructed per request or render and passed down, so every test builds
//! its own session. A token refresh always constructs a new [`Session`]: the
//! permission set is derived in the constructor and can never go stale
//! against its token.

use chrono::Utc;

use crate::errors::TokenError;
use crate::paths;
use crate::permissions::PermissionSet;
use crate::roles::{self, Role};
use crate::token::{validate_token, Claims, UserClaims};

/// An authenticated session: the raw bearer token plus everything derived
/// from it at construction time.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    claims: Claims,
    permissions: PermissionSet,
}

impl Session {
    /// Build a session from a bearer token. Fails with
    /// [`TokenError::Expired`] distinctly from [`TokenError::Malformed`] so
    /// the caller can decide whether to attempt a refresh.
    pub fn from_token(token: &str) -> Result<Self, TokenError> {
        let claims = validate_token(token)?;
        let permissions = PermissionSet::from_claims(&claims);
        Ok(Session {
            token: token.to_string(),
            claims,
            permissions,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    pub fn user(&self) -> Option<&UserClaims> {
        self.claims.context.user.as_ref()
    }

    /// Expiry re-checked against the wall clock. A session held across its
    /// token's expiry instant reports expired here even though it was fresh
    /// at construction.
    pub fn is_expired(&self) -> bool {
        self.claims.is_expired_at(Utc::now())
    }

    pub fn role(&self) -> Role {
        roles::classify(&self.permissions)
    }

    pub fn role_for_program(&self, program: &str) -> Role {
        roles::classify_for_program(&self.permissions, program)
    }

    pub fn default_redirect_path(&self, use_static_path: bool) -> String {
        paths::default_redirect_path(&self.permissions, use_static_path)
    }
}

/// Session context handed down to page and component logic.
///
/// Anonymous contexts answer every access question with "no access"; nothing
/// in here panics on a missing session.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    session: Option<Session>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(session: Session) -> Self {
        SessionContext {
            session: Some(session),
        }
    }

    /// Build a context from the token cookie, if any. Malformed and expired
    /// tokens degrade to an anonymous context; callers that care about the
    /// distinction (the refresh flow) go through [`Session::from_token`]
    /// directly.
    pub fn from_cookie_value(cookie: Option<&str>) -> Self {
        let session = cookie.and_then(|token| match Session::from_token(token) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::debug!(error = %err, "discarding token cookie");
                None
            }
        });
        SessionContext { session }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn permissions(&self) -> Option<&PermissionSet> {
        self.session.as_ref().map(Session::permissions)
    }

    pub fn role(&self) -> Role {
        self.session.as_ref().map_or(Role::None, Session::role)
    }

    pub fn role_for_program(&self, program: &str) -> Role {
        self.session
            .as_ref()
            .map_or(Role::None, |s| s.role_for_program(program))
    }

    /// Whether the submission area is reachable at all: data access to some
    /// program, or RDPC membership.
    pub fn can_access_submission(&self) -> bool {
        self.permissions().map_or(false, |perms| {
            roles::can_read_some_program(perms) || roles::is_rdpc_member(perms)
        })
    }

    /// Landing path for this user; anonymous users land home.
    pub fn default_redirect_path(&self, use_static_path: bool) -> String {
        self.session
            .as_ref()
            .map_or_else(|| paths::HOME_PATH.to_string(), |s| {
                s.default_redirect_path(use_static_path)
            })
    }
}

// ── Tests ────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn encode(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
        format!("{}.{}.signature", header, engine.encode(payload))
    }

    #[test]
    fn test_session_derives_permissions_at_construction() {
        let token = encode(
            r#"{"exp":9999999999,"context":{"scope":["PROGRAMDATA-PACA-AU.WRITE","PROGRAM-PACA-AU.READ"]}}"#,
        );
        let session = Session::from_token(&token).unwrap();
        assert_eq!(
            session.permissions().as_slice(),
            ["PROGRAMDATA-PACA-AU.WRITE", "PROGRAM-PACA-AU.READ"]
        );
        assert_eq!(session.role(), Role::ProgramMember);
        assert_eq!(session.role_for_program("PACA-AU"), Role::Collaborator);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_session_rejects_expired_token_distinctly() {
        let expired = encode(r#"{"exp":1000000000,"context":{"scope":[]}}"#);
        assert!(matches!(
            Session::from_token(&expired),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_session_rejects_malformed_token() {
        assert!(matches!(
            Session::from_token("not-a-token"),
            Err(TokenError::Malformed)
        ));
    }

    #[test]
    fn test_refresh_replaces_rather_than_mutates() {
        let old = encode(r#"{"exp":9999999999,"context":{"scope":["PROGRAMDATA-PACA-AU.READ"]}}"#);
        let new = encode(r#"{"exp":9999999999,"context":{"scope":["PROGRAMDATA-PACA-AU.WRITE","PROGRAM-PACA-AU.WRITE"]}}"#);

        let before = Session::from_token(&old).unwrap();
        let after = Session::from_token(&new).unwrap();

        // the old session is untouched by the refresh
        assert_eq!(before.role_for_program("PACA-AU"), Role::Collaborator);
        assert_eq!(after.role_for_program("PACA-AU"), Role::ProgramMember);
    }

    #[test]
    fn test_anonymous_context_has_no_access() {
        let ctx = SessionContext::anonymous();
        assert!(!ctx.logged_in());
        assert_eq!(ctx.role(), Role::None);
        assert_eq!(ctx.role_for_program("PACA-AU"), Role::None);
        assert!(!ctx.can_access_submission());
        assert_eq!(ctx.default_redirect_path(false), "/");
        assert!(ctx.permissions().is_none());
    }

    #[test]
    fn test_context_from_cookie_degrades_bad_tokens() {
        assert!(!SessionContext::from_cookie_value(None).logged_in());
        assert!(!SessionContext::from_cookie_value(Some("")).logged_in());
        assert!(!SessionContext::from_cookie_value(Some("junk.junk.junk")).logged_in());

        let expired = encode(r#"{"exp":1000000000,"context":{"scope":["PROGRAMSERVICE.WRITE"]}}"#);
        assert!(!SessionContext::from_cookie_value(Some(&expired)).logged_in());

        let valid = encode(r#"{"exp":9999999999,"context":{"scope":["PROGRAMSERVICE.WRITE"]}}"#);
        let ctx = SessionContext::from_cookie_value(Some(&valid));
        assert!(ctx.logged_in());
        assert_eq!(ctx.role(), Role::DccMember);
    }

    #[test]
    fn test_context_submission_access() {
        let rdpc = encode(r#"{"exp":9999999999,"context":{"scope":["RDPC-COLLAB.WRITE"]}}"#);
        let ctx = SessionContext::from_cookie_value(Some(&rdpc));
        assert!(ctx.can_access_submission());
        // RDPC membership alone picks no program dashboard
        assert_eq!(ctx.default_redirect_path(false), "/");
    }
}
