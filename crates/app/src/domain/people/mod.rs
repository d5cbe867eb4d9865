//! People

pub mod data;
pub mod errors;
pub mod owners;
pub mod records;
mod repository;
pub mod service;

pub use errors::PeopleServiceError;
pub use owners::{UNKNOWN_OWNER, owner_display_name};
pub use service::*;
