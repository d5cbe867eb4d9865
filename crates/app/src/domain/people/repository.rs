//! People Repository

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::people::records::{Password, PersonRecord, PersonRole, PersonUuid};

#[derive(Debug, Clone, Default)]
/// In-memory people repository. Clones share the same collection.
pub(crate) struct MemoryPeopleRepository {
    people: Arc<RwLock<Vec<PersonRecord>>>,
}

/// Field values written by an update. `password: None` keeps the stored one.
#[derive(Debug)]
pub(crate) struct PersonChanges {
    pub name: String,
    pub role: PersonRole,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<Password>,
}

impl MemoryPeopleRepository {
    /// Creates an empty repository.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn list_people(&self) -> Vec<PersonRecord> {
        self.people.read().await.clone()
    }

    pub(crate) async fn get_person(&self, person: PersonUuid) -> Option<PersonRecord> {
        self.people
            .read()
            .await
            .iter()
            .find(|record| record.uuid == person)
            .cloned()
    }

    pub(crate) async fn insert_person(&self, person: PersonRecord) -> PersonRecord {
        self.people.write().await.push(person.clone());

        person
    }

    pub(crate) async fn update_person(
        &self,
        person: PersonUuid,
        changes: PersonChanges,
    ) -> Option<PersonRecord> {
        let mut people = self.people.write().await;
        let record = people.iter_mut().find(|record| record.uuid == person)?;

        record.name = changes.name;
        record.role = changes.role;
        record.email = changes.email;
        record.phone = changes.phone;

        if let Some(password) = changes.password {
            record.password = password;
        }

        Some(record.clone())
    }
}
