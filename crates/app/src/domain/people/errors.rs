//! People service errors.

use thiserror::Error;

/// People service errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeopleServiceError {
    /// No person with that id
    #[error("person not found")]
    NotFound,

    /// A required field is empty
    #[error("missing required field `{0}`")]
    MissingRequiredData(&'static str),
}
