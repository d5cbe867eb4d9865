//! Auth data models.

use std::fmt;

use zeroize::Zeroizing;

/// Raw values typed into the login form.
#[derive(Clone)]
pub struct Credentials {
    /// Username as typed.
    pub username: String,

    /// Password as typed. Zeroed on drop.
    pub password: Zeroizing<String>,
}

impl Credentials {
    /// Credentials as typed into the login form.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Role of the logged-in session user. Always administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRole {
    /// Full access to every tab and dialog.
    Admin,
}

/// The authenticated dashboard user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Username exactly as it was typed at login.
    pub username: String,

    /// Always [`SessionRole::Admin`].
    pub role: SessionRole,
}
