//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, PlaceholderAuthService},
    config::StoreConfig,
    domain::{
        buildings::{BuildingsService, MemoryBuildingsService},
        people::{MemoryPeopleService, PeopleService},
    },
};

/// Composition root handing the services to the dashboard.
#[derive(Clone)]
pub struct AppContext {
    /// Buildings and their apartments.
    pub buildings: Arc<dyn BuildingsService>,

    /// Owners and tenants.
    pub people: Arc<dyn PeopleService>,

    /// Login gate.
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build an application context backed by empty in-memory stores.
    #[must_use]
    pub fn in_memory(config: &StoreConfig) -> Self {
        Self {
            buildings: Arc::new(MemoryBuildingsService::new(config.save_latency())),
            people: Arc::new(MemoryPeopleService::new(config.save_latency())),
            auth: Arc::new(PlaceholderAuthService::new(config.login_latency())),
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
