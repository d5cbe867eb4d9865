//! People service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    config::SimulatedLatency,
    domain::{
        is_blank, non_blank,
        people::{
            PeopleServiceError,
            data::{NewPerson, PersonUpdate},
            owners,
            records::{Password, PersonRecord, PersonUuid},
            repository::{MemoryPeopleRepository, PersonChanges},
        },
    },
};

/// In-memory people store. Clones share the same collection.
#[derive(Debug, Clone)]
pub struct MemoryPeopleService {
    repository: MemoryPeopleRepository,
    latency: SimulatedLatency,
}

impl MemoryPeopleService {
    /// Empty store whose mutations wait `latency` before committing.
    #[must_use]
    pub fn new(latency: SimulatedLatency) -> Self {
        Self {
            repository: MemoryPeopleRepository::new(),
            latency,
        }
    }
}

#[async_trait]
impl PeopleService for MemoryPeopleService {
    async fn list_people(&self) -> Vec<PersonRecord> {
        self.repository.list_people().await
    }

    async fn list_owners(&self) -> Vec<PersonRecord> {
        let people = self.repository.list_people().await;

        owners::owners(&people).cloned().collect()
    }

    async fn get_person(&self, person: PersonUuid) -> Result<PersonRecord, PeopleServiceError> {
        self.repository
            .get_person(person)
            .await
            .ok_or(PeopleServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "people.service.create_person",
        skip(self, person),
        fields(person_uuid = tracing::field::Empty, role = %person.role),
        err
    )]
    async fn create_person(&self, person: NewPerson) -> Result<PersonRecord, PeopleServiceError> {
        if is_blank(&person.name) {
            return Err(PeopleServiceError::MissingRequiredData("name"));
        }

        if is_blank(&person.password) {
            return Err(PeopleServiceError::MissingRequiredData("password"));
        }

        self.latency.wait().await;

        let record = PersonRecord {
            uuid: PersonUuid::new(),
            name: person.name,
            role: person.role,
            email: non_blank(person.email),
            phone: non_blank(person.phone),
            password: Password::new(person.password),
        };

        Span::current().record("person_uuid", tracing::field::display(record.uuid));

        let created = self.repository.insert_person(record).await;

        info!(person_uuid = %created.uuid, "created person");

        Ok(created)
    }

    #[tracing::instrument(
        name = "people.service.update_person",
        skip(self, update),
        fields(person_uuid = %person, role = %update.role),
        err
    )]
    async fn update_person(
        &self,
        person: PersonUuid,
        update: PersonUpdate,
    ) -> Result<PersonRecord, PeopleServiceError> {
        if is_blank(&update.name) {
            return Err(PeopleServiceError::MissingRequiredData("name"));
        }

        self.latency.wait().await;

        let changes = PersonChanges {
            name: update.name,
            role: update.role,
            email: non_blank(update.email),
            phone: non_blank(update.phone),
            password: non_blank(update.password).map(Password::new),
        };

        let updated = self
            .repository
            .update_person(person, changes)
            .await
            .ok_or(PeopleServiceError::NotFound)?;

        info!(person_uuid = %updated.uuid, "updated person");

        Ok(updated)
    }
}

/// People store operations.
#[automock]
#[async_trait]
pub trait PeopleService: Send + Sync {
    /// Retrieves all people in insertion order.
    async fn list_people(&self) -> Vec<PersonRecord>;

    /// Retrieves the people whose role is owner.
    async fn list_owners(&self) -> Vec<PersonRecord>;

    /// Retrieve a single person.
    async fn get_person(&self, person: PersonUuid) -> Result<PersonRecord, PeopleServiceError>;

    /// Creates a person with a freshly generated UUID. A password is required.
    async fn create_person(&self, person: NewPerson) -> Result<PersonRecord, PeopleServiceError>;

    /// Overwrites a person's details. A blank password keeps the current one.
    async fn update_person(
        &self,
        person: PersonUuid,
        update: PersonUpdate,
    ) -> Result<PersonRecord, PeopleServiceError>;
}
