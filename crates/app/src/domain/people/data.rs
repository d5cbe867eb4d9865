//! Person Data

use std::fmt;

use crate::domain::people::records::PersonRole;

/// New Person Data
#[derive(Clone, PartialEq, Eq)]
pub struct NewPerson {
    /// Full name. Required.
    pub name: String,

    /// Owner or tenant.
    pub role: PersonRole,

    /// Contact email. Blank is stored as absent.
    pub email: Option<String>,

    /// Contact phone. Blank is stored as absent.
    pub phone: Option<String>,

    /// Initial password. Required.
    pub password: String,
}

/// Person Update Data
///
/// Every field except `password` replaces the stored value.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonUpdate {
    /// Replacement name. Required.
    pub name: String,

    /// Replacement role.
    pub role: PersonRole,

    /// Replacement email. Blank or absent clears it.
    pub email: Option<String>,

    /// Replacement phone. Blank or absent clears it.
    pub phone: Option<String>,

    /// New password. Blank or absent keeps the current one.
    pub password: Option<String>,
}

impl fmt::Debug for NewPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewPerson")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for PersonUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonUpdate")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("changes_password", &self.password.is_some())
            .finish()
    }
}
