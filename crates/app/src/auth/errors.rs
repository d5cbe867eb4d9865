//! Auth service errors.

use thiserror::Error;

/// Auth errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthServiceError {
    /// Anything but the admin pair
    #[error("invalid credentials")]
    InvalidCredentials,
}
