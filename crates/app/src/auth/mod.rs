//! Authentication
//!
//! The dashboard sits behind a placeholder login: a fixed credential pair
//! checked after a simulated delay. It gates the UI; it does not secure
//! anything.

mod errors;
mod models;
mod service;

pub use errors::*;
pub use models::*;
pub use service::*;
