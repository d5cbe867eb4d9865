//! Fixture replay.
//!
//! A seed fixture is replayed through the dashboard dialogs one record at a
//! time, so it is held to exactly the rules an admin typing into the forms is.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use estates_app::{
    auth::{AuthServiceError, Credentials, Session},
    dashboard::{Dashboard, SubmitOutcome, Tab},
    domain::people::records::{PersonRole, PersonUuid},
};

/// Seeding errors
#[derive(Debug, Error)]
pub(crate) enum SeedError {
    /// IO error reading the fixture or writing the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Login refused
    #[error("login failed: {0}")]
    Login(#[from] AuthServiceError),

    /// Two people share a fixture key
    #[error("duplicate person key: {0}")]
    DuplicateKey(String),

    /// An apartment names an owner key nobody defines
    #[error("unknown owner key: {0}")]
    UnknownOwner(String),

    /// An apartment names a person who is not an owner
    #[error("person is not an owner: {0}")]
    NotAnOwner(String),

    /// The dashboard did not save a record
    #[error("{entity} {label:?} was not saved: {outcome:?}")]
    NotSaved {
        entity: &'static str,
        label: String,
        outcome: SubmitOutcome,
    },
}

/// Seed fixture from YAML
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SeedFixture {
    #[serde(default)]
    pub people: Vec<PersonFixture>,

    #[serde(default)]
    pub buildings: Vec<BuildingFixture>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PersonFixture {
    /// Key apartments use to name this person as owner
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub role: PersonRole,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BuildingFixture {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub apartments: Vec<ApartmentFixture>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ApartmentFixture {
    pub unit_number: String,
    #[serde(default)]
    pub floor: String,
    pub owner: Option<String>,
}

/// Counts of what a replay saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SeedSummary {
    pub people: usize,
    pub buildings: usize,
    pub apartments: usize,
}

impl SeedFixture {
    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if owner
    /// references do not resolve.
    pub(crate) fn load(path: &Path) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    pub(crate) fn from_yaml(contents: &str) -> Result<Self, SeedError> {
        let fixture: Self = serde_norway::from_str(contents)?;

        fixture.check_owner_keys()?;

        Ok(fixture)
    }

    fn check_owner_keys(&self) -> Result<(), SeedError> {
        let mut roles = FxHashMap::default();

        for person in &self.people {
            if roles.insert(person.key.as_str(), person.role).is_some() {
                return Err(SeedError::DuplicateKey(person.key.clone()));
            }
        }

        let owner_keys = self
            .buildings
            .iter()
            .flat_map(|building| &building.apartments)
            .filter_map(|apartment| apartment.owner.as_deref());

        for key in owner_keys {
            match roles.get(key) {
                None => return Err(SeedError::UnknownOwner(key.to_string())),
                Some(PersonRole::Tenant) => return Err(SeedError::NotAnOwner(key.to_string())),
                Some(PersonRole::Owner) => {}
            }
        }

        Ok(())
    }
}

/// Log in with `credentials`.
///
/// # Errors
///
/// Returns [`SeedError::Login`] when the credentials are refused.
pub(crate) async fn login(
    dashboard: &Dashboard,
    credentials: Credentials,
) -> Result<Session, SeedError> {
    Ok(dashboard.login(credentials).await?)
}

/// Replay `fixture` through the dashboard dialogs.
///
/// # Errors
///
/// Stops at the first record the dashboard does not save.
#[tracing::instrument(name = "seed.replay", skip_all, err)]
pub(crate) async fn replay(
    dashboard: &Dashboard,
    fixture: SeedFixture,
) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();
    let mut owners: FxHashMap<String, PersonUuid> = FxHashMap::default();

    dashboard.select_tab(Tab::People).await;

    for person in fixture.people {
        let uuid = add_person(dashboard, &person).await?;

        owners.insert(person.key, uuid);
        summary.people += 1;
    }

    dashboard.home().await;

    for building in fixture.buildings {
        summary.apartments += add_building(dashboard, building, &owners).await?;
        summary.buildings += 1;
    }

    info!(
        people = summary.people,
        buildings = summary.buildings,
        apartments = summary.apartments,
        "fixture replayed"
    );

    Ok(summary)
}

async fn add_person(dashboard: &Dashboard, person: &PersonFixture) -> Result<PersonUuid, SeedError> {
    dashboard.open_create_person().await;
    dashboard
        .edit_person_draft(|draft| {
            draft.name.clone_from(&person.name);
            draft.role = person.role;
            draft.email.clone_from(&person.email);
            draft.phone.clone_from(&person.phone);
            draft.password.clone_from(&person.password);
        })
        .await;

    saved("person", &person.name, dashboard.submit_person().await)
}

async fn add_building(
    dashboard: &Dashboard,
    building: BuildingFixture,
    owners: &FxHashMap<String, PersonUuid>,
) -> Result<usize, SeedError> {
    dashboard.open_create_building().await;
    dashboard
        .edit_building_draft(|draft| {
            draft.name.clone_from(&building.name);
            draft.location.clone_from(&building.location);
        })
        .await;

    let created = saved("building", &building.name, dashboard.submit_building().await)?;

    dashboard.select_building(created).await;

    let mut added = 0;

    for apartment in building.apartments {
        let owner = match apartment.owner.as_deref() {
            Some(key) => Some(
                *owners
                    .get(key)
                    .ok_or_else(|| SeedError::UnknownOwner(key.to_string()))?,
            ),
            None => None,
        };

        dashboard.open_create_apartment().await;
        dashboard
            .edit_apartment_draft(|draft| {
                draft.unit_number.clone_from(&apartment.unit_number);
                draft.floor.clone_from(&apartment.floor);
                draft.owner = owner;
            })
            .await;

        saved(
            "apartment",
            &apartment.unit_number,
            dashboard.submit_apartment().await,
        )?;

        added += 1;
    }

    dashboard.back().await;

    Ok(added)
}

/// The id of the saved record, or why the dialog did not save it.
fn saved<K>(
    entity: &'static str,
    label: &str,
    outcome: SubmitOutcome<K>,
) -> Result<K, SeedError> {
    match outcome {
        SubmitOutcome::Saved(key) => Ok(key),
        outcome => Err(SeedError::NotSaved {
            entity,
            label: label.to_string(),
            outcome: outcome.map_saved(|_| ()),
        }),
    }
}
