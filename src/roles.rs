//! Role classification over a permission set.
//!
//! Every predicate here is total: an empty set, an unparseable scope, or an
//! unknown program short name means "no access", never an error. Callers
//! needing a single label go through [`classify`] or [`classify_for_program`],
//! which apply the fixed precedence DCC > RDPC > program member >
//! collaborator.

use std::fmt;

use crate::permissions::{
    scope_parts, PermissionSet, DCC_ADMIN_SCOPE, PROGRAM_DATA_PREFIX, PROGRAM_PREFIX, RDPC_PREFIX,
    READ, WRITE,
};

/// Coarse-grained user classification. Derived on demand from a
/// [`PermissionSet`], never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    DccMember,
    RdpcMember,
    ProgramMember,
    Collaborator,
    None,
}

impl Role {
    /// Display label shown next to the user menu. Users with no
    /// classification have no label.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Role::DccMember => Some("DCC Member"),
            Role::RdpcMember => Some("RDPC User"),
            Role::ProgramMember => Some("Program Member"),
            Role::Collaborator => Some("Collaborator"),
            Role::None => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or(""))
    }
}

/// DCC administrators hold the fixed program-service write scope.
pub fn is_dcc_member(permissions: &PermissionSet) -> bool {
    permissions.contains(DCC_ADMIN_SCOPE)
}

/// RDPC members hold a write scope on any RDPC service resource.
pub fn is_rdpc_member(permissions: &PermissionSet) -> bool {
    permissions.iter().any(|scope| {
        scope_parts(scope)
            .map_or(false, |(policy, action)| policy.starts_with(RDPC_PREFIX) && action == WRITE)
    })
}

fn has_scope(permissions: &PermissionSet, prefix: &str, program: &str, actions: &[&str]) -> bool {
    actions
        .iter()
        .any(|action| permissions.contains(&format!("{prefix}{program}.{action}")))
}

/// Program administration access: exactly `PROGRAM-<shortName>.WRITE`.
/// Data write alone does not grant this.
pub fn can_write_program(permissions: &PermissionSet, program: &str) -> bool {
    has_scope(permissions, PROGRAM_PREFIX, program, &[WRITE])
}

/// Read access to the program itself (write implies read).
pub fn can_read_program(permissions: &PermissionSet, program: &str) -> bool {
    has_scope(permissions, PROGRAM_PREFIX, program, &[READ, WRITE])
}

/// Write access to the program's submitted data.
pub fn can_write_program_data(permissions: &PermissionSet, program: &str) -> bool {
    has_scope(permissions, PROGRAM_DATA_PREFIX, program, &[WRITE])
}

/// Read access to the program's submitted data (write implies read).
pub fn can_read_program_data(permissions: &PermissionSet, program: &str) -> bool {
    has_scope(permissions, PROGRAM_DATA_PREFIX, program, &[READ, WRITE])
}

/// Whether the user can read submitted data for at least one program.
/// Gates the whole submission area for non-RDPC users.
pub fn can_read_some_program(permissions: &PermissionSet) -> bool {
    permissions.iter().any(|scope| {
        scope_parts(scope).map_or(false, |(policy, action)| {
            policy.starts_with(PROGRAM_DATA_PREFIX) && (action == READ || action == WRITE)
        })
    })
}

/// Collaborators have some access to the program but cannot administer it.
pub fn is_collaborator(permissions: &PermissionSet, program: &str) -> bool {
    let has_access =
        can_read_program(permissions, program) || can_read_program_data(permissions, program);
    has_access && !can_write_program(permissions, program)
}

/// Single label for a user across the whole platform.
pub fn classify(permissions: &PermissionSet) -> Role {
    if is_dcc_member(permissions) {
        Role::DccMember
    } else if is_rdpc_member(permissions) {
        Role::RdpcMember
    } else if can_read_some_program(permissions) {
        Role::ProgramMember
    } else {
        Role::None
    }
}

/// Single label for a user within one program. Administration write access
/// makes a program member; anything less makes a collaborator.
pub fn classify_for_program(permissions: &PermissionSet, program: &str) -> Role {
    if is_dcc_member(permissions) {
        Role::DccMember
    } else if is_rdpc_member(permissions) {
        Role::RdpcMember
    } else if can_write_program(permissions, program) {
        Role::ProgramMember
    } else if is_collaborator(permissions, program) {
        Role::Collaborator
    } else {
        Role::None
    }
}

// ── Tests ────────────────────────────────────────────────────
