//! Buildings Repository

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::buildings::records::{ApartmentRecord, BuildingRecord, BuildingUuid};

#[derive(Debug, Clone, Default)]
/// In-memory buildings repository. Clones share the same collection.
pub(crate) struct MemoryBuildingsRepository {
    buildings: Arc<RwLock<Vec<BuildingRecord>>>,
}

impl MemoryBuildingsRepository {
    /// Creates an empty repository.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn list_buildings(&self) -> Vec<BuildingRecord> {
        self.buildings.read().await.clone()
    }

    pub(crate) async fn get_building(&self, building: BuildingUuid) -> Option<BuildingRecord> {
        self.buildings
            .read()
            .await
            .iter()
            .find(|record| record.uuid == building)
            .cloned()
    }

    pub(crate) async fn insert_building(&self, building: BuildingRecord) -> BuildingRecord {
        self.buildings.write().await.push(building.clone());

        building
    }

    /// Replace name and location, keeping uuid and apartments.
    pub(crate) async fn update_building(
        &self,
        building: BuildingUuid,
        name: String,
        location: String,
    ) -> Option<BuildingRecord> {
        let mut buildings = self.buildings.write().await;
        let record = buildings.iter_mut().find(|record| record.uuid == building)?;

        record.name = name;
        record.location = location;

        Some(record.clone())
    }

    pub(crate) async fn push_apartment(
        &self,
        building: BuildingUuid,
        apartment: ApartmentRecord,
    ) -> Option<ApartmentRecord> {
        let mut buildings = self.buildings.write().await;
        let record = buildings.iter_mut().find(|record| record.uuid == building)?;

        record.apartments.push(apartment.clone());

        Some(apartment)
    }
}
