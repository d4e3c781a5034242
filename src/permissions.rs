//! Permission extraction and the scope string vocabulary.
//!
//! Scopes come straight out of `context.scope` and are compared by exact
//! match. No case or whitespace normalization happens anywhere: the issuer
//! controls casing, and a drifted scope string simply grants nothing.

use crate::token::Claims;

/// Policy prefix for program administration scopes (`PROGRAM-<shortName>`).
pub const PROGRAM_PREFIX: &str = "PROGRAM-";
/// Policy prefix for program data scopes (`PROGRAMDATA-<shortName>`).
pub const PROGRAM_DATA_PREFIX: &str = "PROGRAMDATA-";
/// Policy prefix for RDPC service scopes.
pub const RDPC_PREFIX: &str = "RDPC-";
/// The fixed scope granting DCC-wide administration.
pub const DCC_ADMIN_SCOPE: &str = "PROGRAMSERVICE.WRITE";

pub const READ: &str = "READ";
pub const WRITE: &str = "WRITE";

/// The scopes granted by a token, in original issue order.
///
/// Order matters: the redirect resolver picks the first program-data scope,
/// so the sequence is never re-sorted or de-duplicated. A set is always
/// derived fresh from the current [`Claims`] and replaced wholesale on a
/// token refresh, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    scopes: Vec<String>,
}

impl PermissionSet {
    pub fn new(scopes: Vec<String>) -> Self {
        PermissionSet { scopes }
    }

    /// Extract the scope list from decoded claims. Total: claims with no
    /// scopes yield an empty set.
    pub fn from_claims(claims: &Claims) -> Self {
        PermissionSet {
            scopes: claims.context.scope.clone(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Exact-match membership check.
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.scopes
    }
}

impl FromIterator<String> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        PermissionSet {
            scopes: iter.into_iter().collect(),
        }
    }
}

/// Split a scope into its `(policy, action)` parts on the final `.`.
/// Scopes without a separator carry no grant and yield `None`.
pub fn scope_parts(scope: &str) -> Option<(&str, &str)> {
    scope.rsplit_once('.')
}

/// The program short name carried by a program-data scope, if the scope's
/// action grants at least read access (write implies read).
pub fn program_data_short_name(scope: &str) -> Option<&str> {
    let (policy, action) = scope_parts(scope)?;
    if action != READ && action != WRITE {
        return None;
    }
    policy.strip_prefix(PROGRAM_DATA_PREFIX)
}

/// Program short names this set grants data access to, in scope order,
/// de-duplicated on first appearance.
pub fn readable_program_data_names(permissions: &PermissionSet) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for scope in permissions.iter() {
        if let Some(short_name) = program_data_short_name(scope) {
            if !names.contains(&short_name) {
                names.push(short_name);
            }
        }
    }
    names
}

// ── Tests ────────────────────────────────────────────────────
