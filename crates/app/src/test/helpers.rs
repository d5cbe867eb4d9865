//! Test Helpers

use crate::{
    domain::{
        buildings::{
            BuildingsService, BuildingsServiceError, data::NewBuilding, records::BuildingRecord,
        },
        people::{
            PeopleService, PeopleServiceError,
            data::NewPerson,
            records::{PersonRecord, PersonRole},
        },
    },
    test::TestContext,
};

impl TestContext {
    pub(crate) async fn create_building(
        &self,
        name: &str,
        location: &str,
    ) -> Result<BuildingRecord, BuildingsServiceError> {
        self.buildings
            .create_building(NewBuilding {
                name: name.to_string(),
                location: location.to_string(),
            })
            .await
    }

    pub(crate) async fn create_person(
        &self,
        name: &str,
        role: PersonRole,
        password: &str,
    ) -> Result<PersonRecord, PeopleServiceError> {
        self.people
            .create_person(NewPerson {
                name: name.to_string(),
                role,
                email: None,
                phone: None,
                password: password.to_string(),
            })
            .await
    }
}
