//! Property management domain: buildings with their apartments, the people
//! who own or rent them, and the dashboard that edits both.

pub mod auth;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;
