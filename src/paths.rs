//! Canonical landing paths derived from a permission set.

use crate::permissions::{readable_program_data_names, PermissionSet};
use crate::roles::is_dcc_member;

/// Program list page, where DCC members land.
pub const PROGRAMS_LIST_PATH: &str = "/submission/program";
/// Program dashboard route template; the placeholder is filled per program.
pub const PROGRAM_DASHBOARD_PATH: &str = "/submission/program/[shortName]/dashboard";
pub const PROGRAM_SHORT_NAME_PLACEHOLDER: &str = "[shortName]";
/// Landing path for users with no submission access.
pub const HOME_PATH: &str = "/";

/// Canonical landing path for a user.
///
/// DCC members land on the program list regardless of any program scopes
/// they also hold. Everyone else lands on the dashboard of the first program
/// their scopes grant data access to, in original scope order; the order is
/// the tie-break and is never re-sorted. `use_static_path` keeps the
/// `[shortName]` placeholder for router-level hrefs, otherwise the concrete
/// short name is substituted.
///
/// Deterministic: same permission set, same path, no clock involved.
pub fn default_redirect_path(permissions: &PermissionSet, use_static_path: bool) -> String {
    if is_dcc_member(permissions) {
        return PROGRAMS_LIST_PATH.to_string();
    }
    match readable_program_data_names(permissions).first() {
        Some(_) if use_static_path => PROGRAM_DASHBOARD_PATH.to_string(),
        Some(short_name) => {
            PROGRAM_DASHBOARD_PATH.replace(PROGRAM_SHORT_NAME_PLACEHOLDER, short_name)
        }
        None => HOME_PATH.to_string(),
    }
}

// ── Tests ────────────────────────────────────────────────────
