//! Person Records

use std::fmt::{self, Display, Formatter};

use serde::Deserialize;
use zeroize::Zeroizing;

use crate::uuids::TypedUuid;

/// Person UUID
pub type PersonUuid = TypedUuid<PersonRecord>;

/// Person Record
///
/// An owner or tenant managed from the dashboard. Distinct from the
/// administrator holding the login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Unique person identifier.
    pub uuid: PersonUuid,

    /// Full name. Never blank.
    pub name: String,

    /// Whether the person owns or rents.
    pub role: PersonRole,

    /// Contact email.
    pub email: Option<String>,

    /// Contact phone number.
    pub phone: Option<String>,

    /// Write-only credential.
    pub password: Password,
}

impl PersonRecord {
    /// Whether apartments may name this person as their owner.
    pub fn is_owner(&self) -> bool {
        self.role == PersonRole::Owner
    }
}

/// Role of a person in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonRole {
    /// Can be referenced as the owner of an apartment.
    Owner,

    /// Rents a unit.
    #[default]
    Tenant,
}

impl PersonRole {
    /// Lowercase label as shown on the dashboard.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Tenant => "tenant",
        }
    }
}

impl Display for PersonRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored password. Zeroed on drop and never printed.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a plaintext password.
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self(Zeroizing::new(plaintext.into()))
    }

    /// Compare against a candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_str() == candidate
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.0.as_str())
    }
}

impl Eq for Password {}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}
