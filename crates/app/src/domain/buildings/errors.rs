//! Buildings service errors.

use thiserror::Error;

/// Buildings service errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildingsServiceError {
    /// No building with that id
    #[error("building not found")]
    NotFound,

    /// A required field is empty
    #[error("missing required field `{0}`")]
    MissingRequiredData(&'static str),
}
