//! Test context for service-level tests.

use std::sync::Arc;

use crate::{
    auth::PlaceholderAuthService,
    config::SimulatedLatency,
    context::AppContext,
    domain::{buildings::MemoryBuildingsService, people::MemoryPeopleService},
};

/// Fresh, empty stores. Clones of the services share the same collections,
/// so records created through the context are visible to an [`AppContext`]
/// built from it.
pub(crate) struct TestContext {
    pub buildings: MemoryBuildingsService,
    pub people: MemoryPeopleService,
    pub auth: PlaceholderAuthService,
}

impl TestContext {
    /// Stores and login that answer immediately.
    pub(crate) fn new() -> Self {
        Self::with_save_latency(0)
    }

    /// Stores whose mutations wait `millis` before committing.
    pub(crate) fn with_save_latency(millis: u64) -> Self {
        let latency = SimulatedLatency::from_millis(millis);

        Self {
            buildings: MemoryBuildingsService::new(latency),
            people: MemoryPeopleService::new(latency),
            auth: PlaceholderAuthService::new(SimulatedLatency::NONE),
        }
    }

    pub(crate) fn app_context(&self) -> AppContext {
        AppContext {
            buildings: Arc::new(self.buildings.clone()),
            people: Arc::new(self.people.clone()),
            auth: Arc::new(self.auth.clone()),
        }
    }
}
