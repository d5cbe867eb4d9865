//! Buildings service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    config::SimulatedLatency,
    domain::{
        buildings::{
            BuildingsServiceError,
            data::{BuildingUpdate, DEFAULT_FLOOR, NewApartment, NewBuilding},
            records::{
                ApartmentRecord, ApartmentStatus, ApartmentUuid, BuildingRecord, BuildingUuid,
            },
            repository::MemoryBuildingsRepository,
        },
        is_blank,
    },
};

/// In-memory buildings store. Clones share the same collection.
#[derive(Debug, Clone)]
pub struct MemoryBuildingsService {
    repository: MemoryBuildingsRepository,
    latency: SimulatedLatency,
}

impl MemoryBuildingsService {
    /// Empty store whose mutations wait `latency` before committing.
    #[must_use]
    pub fn new(latency: SimulatedLatency) -> Self {
        Self {
            repository: MemoryBuildingsRepository::new(),
            latency,
        }
    }
}

#[async_trait]
impl BuildingsService for MemoryBuildingsService {
    async fn list_buildings(&self) -> Vec<BuildingRecord> {
        self.repository.list_buildings().await
    }

    async fn get_building(
        &self,
        building: BuildingUuid,
    ) -> Result<BuildingRecord, BuildingsServiceError> {
        self.repository
            .get_building(building)
            .await
            .ok_or(BuildingsServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "buildings.service.create_building",
        skip(self, building),
        fields(building_uuid = tracing::field::Empty),
        err
    )]
    async fn create_building(
        &self,
        building: NewBuilding,
    ) -> Result<BuildingRecord, BuildingsServiceError> {
        require("name", &building.name)?;
        require("location", &building.location)?;

        self.latency.wait().await;

        let record = BuildingRecord {
            uuid: BuildingUuid::new(),
            name: building.name,
            location: building.location,
            apartments: Vec::new(),
        };

        Span::current().record("building_uuid", tracing::field::display(record.uuid));

        let created = self.repository.insert_building(record).await;

        info!(building_uuid = %created.uuid, "created building");

        Ok(created)
    }

    #[tracing::instrument(
        name = "buildings.service.update_building",
        skip(self, update),
        fields(building_uuid = %building),
        err
    )]
    async fn update_building(
        &self,
        building: BuildingUuid,
        update: BuildingUpdate,
    ) -> Result<BuildingRecord, BuildingsServiceError> {
        require("name", &update.name)?;
        require("location", &update.location)?;

        self.latency.wait().await;

        let updated = self
            .repository
            .update_building(building, update.name, update.location)
            .await
            .ok_or(BuildingsServiceError::NotFound)?;

        info!(building_uuid = %updated.uuid, "updated building");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "buildings.service.add_apartment",
        skip(self, apartment),
        fields(
            building_uuid = %building,
            apartment_uuid = tracing::field::Empty,
            has_owner = apartment.owner.is_some()
        ),
        err
    )]
    async fn add_apartment(
        &self,
        building: BuildingUuid,
        apartment: NewApartment,
    ) -> Result<ApartmentRecord, BuildingsServiceError> {
        require("unit_number", &apartment.unit_number)?;

        self.latency.wait().await;

        let floor = if is_blank(&apartment.floor) {
            DEFAULT_FLOOR.to_string()
        } else {
            apartment.floor
        };

        let record = ApartmentRecord {
            uuid: ApartmentUuid::new(),
            unit_number: apartment.unit_number,
            floor,
            status: ApartmentStatus::Vacant,
            owner: apartment.owner,
        };

        Span::current().record("apartment_uuid", tracing::field::display(record.uuid));

        let added = self
            .repository
            .push_apartment(building, record)
            .await
            .ok_or(BuildingsServiceError::NotFound)?;

        info!(apartment_uuid = %added.uuid, "added apartment");

        Ok(added)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), BuildingsServiceError> {
    if is_blank(value) {
        return Err(BuildingsServiceError::MissingRequiredData(field));
    }

    Ok(())
}

/// Buildings store operations.
#[automock]
#[async_trait]
pub trait BuildingsService: Send + Sync {
    /// Retrieves all buildings in insertion order.
    async fn list_buildings(&self) -> Vec<BuildingRecord>;

    /// Retrieve a single building with its apartments.
    async fn get_building(
        &self,
        building: BuildingUuid,
    ) -> Result<BuildingRecord, BuildingsServiceError>;

    /// Creates a building with no apartments and a freshly generated UUID.
    async fn create_building(
        &self,
        building: NewBuilding,
    ) -> Result<BuildingRecord, BuildingsServiceError>;

    /// Replaces name and location of an existing building.
    async fn update_building(
        &self,
        building: BuildingUuid,
        update: BuildingUpdate,
    ) -> Result<BuildingRecord, BuildingsServiceError>;

    /// Appends a vacant apartment to the given building.
    async fn add_apartment(
        &self,
        building: BuildingUuid,
        apartment: NewApartment,
    ) -> Result<ApartmentRecord, BuildingsServiceError>;
}
