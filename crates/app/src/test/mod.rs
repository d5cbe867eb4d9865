//! Shared fixtures for service and dashboard tests.

mod context;
mod helpers;

pub(crate) use context::TestContext;
