//! Roles and permissions.
//!
//! A closed set of roles with an explicit inheritance table. Permission
//! checks are set-membership tests over the inherited roles — call sites
//! never compare role strings.

use std::str::FromStr;

use thiserror::Error;

/// League role held by a user, ordered from most to least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Commissioner,
    Manager,
    Member,
}

/// Action gated by a role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ManageUsers,
    ManageLeague,
    ManageTeam,
    PlaceBid,
    ViewLeague,
}

impl Permission {
    /// The least privileged role that directly carries this permission.
    fn required_role(&self) -> Role {
        match self {
            Self::ManageUsers => Role::Admin,
            Self::ManageLeague => Role::Commissioner,
            Self::ManageTeam | Self::PlaceBid => Role::Manager,
            Self::ViewLeague => Role::Member,
        }
    }
}

impl Role {
    /// The set of roles this role inherits, itself included.
    pub fn inherits(&self) -> &'static [Role] {
        match self {
            Self::Admin => &[Self::Admin, Self::Commissioner, Self::Manager, Self::Member],
            Self::Commissioner => &[Self::Commissioner, Self::Manager, Self::Member],
            Self::Manager => &[Self::Manager, Self::Member],
            Self::Member => &[Self::Member],
        }
    }

    /// Whether this role (directly or through inheritance) carries the
    /// permission.
    pub fn grants(&self, permission: Permission) -> bool {
        self.inherits().contains(&permission.required_role())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Commissioner => "commissioner",
            Self::Manager => "manager",
            Self::Member => "member",
        }
    }
}

/// Error returned when a role string stored on a user row cannot be
/// recognized.
#[derive(Debug, Error)]
#[error("unrecognized role '{0}'")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "commissioner" => Ok(Self::Commissioner),
            "manager" => Ok(Self::Manager),
            "member" => Ok(Self::Member),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
