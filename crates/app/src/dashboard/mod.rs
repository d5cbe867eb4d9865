//! Dashboard
//!
//! Coordinates what the admin is looking at and the dialogs they have open,
//! and forwards completed drafts to the stores in [`AppContext`].
//!
//! State transitions take a short lock; store calls run outside it, so a
//! dialog can be closed or reopened while its save is still in flight.

use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    auth::{AuthServiceError, Credentials, Session},
    context::AppContext,
    domain::{
        buildings::records::{ApartmentUuid, BuildingRecord, BuildingUuid},
        people::{
            owner_display_name,
            records::{PersonRecord, PersonUuid},
        },
    },
};

pub mod forms;
pub mod modal;
pub mod navigation;

pub use forms::{ApartmentDraft, BuildingDraft, Draft, FormMode, PersonDraft};
pub use modal::{FormSession, Modal, PendingSubmit, SubmitOutcome};
pub use navigation::{Navigation, Tab};

/// Everything the dashboard remembers between events.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// The logged-in admin, if any.
    pub session: Option<Session>,

    /// Current tab and building selection.
    pub navigation: Navigation,

    /// Create/edit building dialog.
    pub building: Modal<BuildingDraft>,

    /// Add apartment dialog. Targets the selected building.
    pub apartment: Modal<ApartmentDraft>,

    /// Create/edit person dialog.
    pub person: Modal<PersonDraft>,
}

/// The main pane as it should currently be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Every building, in creation order.
    Buildings(Vec<BuildingRecord>),

    /// Detail of the selected building with its apartments.
    Building(BuildingRecord),

    /// Every person, in creation order.
    People(Vec<PersonRecord>),
}

/// The admin dashboard: session, navigation and dialogs over the stores.
#[derive(Debug)]
pub struct Dashboard {
    context: AppContext,
    state: Mutex<DashboardState>,
}

impl Dashboard {
    /// A logged-out dashboard on the buildings list with every dialog closed.
    #[must_use]
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            state: Mutex::new(DashboardState::default()),
        }
    }

    /// Check `credentials` and remember the session on success.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::InvalidCredentials`] for anything but the
    /// admin pair. A failed attempt leaves any current session alone.
    pub async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError> {
        let session = self.context.auth.login(credentials).await?;

        self.state.lock().await.session = Some(session.clone());

        Ok(session)
    }

    /// Drop the session and return to a fresh dashboard.
    pub async fn logout(&self) {
        *self.state.lock().await = DashboardState::default();
    }

    /// The logged-in session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.state.lock().await.session.clone()
    }

    /// Copy of the current navigation and dialog state.
    pub async fn snapshot(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    /// Resolve the main pane. A selection that no longer resolves falls back
    /// to the buildings list.
    pub async fn view(&self) -> View {
        let navigation = self.state.lock().await.navigation;

        if navigation.tab() == Tab::People {
            return View::People(self.context.people.list_people().await);
        }

        if let Some(uuid) = navigation.selected_building() {
            match self.context.buildings.get_building(uuid).await {
                Ok(building) => return View::Building(building),
                Err(error) => debug!(building_uuid = %uuid, %error, "selection did not resolve"),
            }
        }

        View::Buildings(self.context.buildings.list_buildings().await)
    }

    /// Every building, in creation order.
    pub async fn buildings(&self) -> Vec<BuildingRecord> {
        self.context.buildings.list_buildings().await
    }

    /// Every person, in creation order.
    pub async fn people(&self) -> Vec<PersonRecord> {
        self.context.people.list_people().await
    }

    /// People offered in the apartment owner picker.
    pub async fn owners(&self) -> Vec<PersonRecord> {
        self.context.people.list_owners().await
    }

    /// Label for an apartment's owner column. `None` when no owner is set.
    pub async fn owner_name(&self, owner: Option<PersonUuid>) -> Option<String> {
        let owner = owner?;
        let people = self.context.people.list_people().await;

        Some(owner_display_name(&people, owner).to_string())
    }

    /// See [`Navigation::select_tab`].
    pub async fn select_tab(&self, tab: Tab) {
        self.state.lock().await.navigation.select_tab(tab);
    }

    /// See [`Navigation::select_building`].
    pub async fn select_building(&self, building: BuildingUuid) {
        self.state.lock().await.navigation.select_building(building);
    }

    /// See [`Navigation::back`].
    pub async fn back(&self) {
        self.state.lock().await.navigation.back();
    }

    /// See [`Navigation::home`].
    pub async fn home(&self) {
        self.state.lock().await.navigation.home();
    }

    /// Open the building dialog with an empty draft.
    pub async fn open_create_building(&self) {
        self.state.lock().await.building.open_create();
    }

    /// Open the building dialog prefilled from `building`. Does nothing if
    /// the building is unknown.
    pub async fn open_edit_building(&self, building: BuildingUuid) {
        match self.context.buildings.get_building(building).await {
            Ok(record) => {
                let draft = BuildingDraft::from_record(&record);

                self.state.lock().await.building.open_edit(building, draft);
            }
            Err(error) => debug!(building_uuid = %building, %error, "edit target missing"),
        }
    }

    /// Close the building dialog, dropping its draft.
    pub async fn close_building_modal(&self) {
        self.state.lock().await.building.close();
    }

    /// Apply a field edit to the open building draft. Returns `false` when
    /// the dialog is closed.
    pub async fn edit_building_draft(&self, edit: impl FnOnce(&mut BuildingDraft)) -> bool {
        self.state.lock().await.building.draft_mut().map(edit).is_some()
    }

    /// Create or update the building from the open draft.
    pub async fn submit_building(&self) -> SubmitOutcome<BuildingUuid> {
        let submit = match self.state.lock().await.building.begin_submit() {
            Ok(submit) => submit,
            Err(outcome) => {
                debug!(?outcome, "building submit not started");

                return outcome;
            }
        };

        let draft = submit.draft().clone();

        let result = match submit.editing() {
            Some(uuid) => self
                .context
                .buildings
                .update_building(uuid, draft.into_update())
                .await,
            None => {
                self.context
                    .buildings
                    .create_building(draft.into_new_building())
                    .await
            }
        };

        let saved = match result {
            Ok(record) => Some(record.uuid),
            Err(error) => {
                debug!(%error, "building not saved");

                None
            }
        };

        let outcome = self
            .state
            .lock()
            .await
            .building
            .finish_submit(submit, saved);

        debug!(?outcome, "building submit settled");

        outcome
    }

    /// Open the apartment dialog with an empty draft.
    pub async fn open_create_apartment(&self) {
        self.state.lock().await.apartment.open_create();
    }

    /// Close the apartment dialog, dropping its draft.
    pub async fn close_apartment_modal(&self) {
        self.state.lock().await.apartment.close();
    }

    /// Apply a field edit to the open apartment draft. Returns `false` when
    /// the dialog is closed.
    pub async fn edit_apartment_draft(&self, edit: impl FnOnce(&mut ApartmentDraft)) -> bool {
        self.state.lock().await.apartment.draft_mut().map(edit).is_some()
    }

    /// Adds the drafted apartment to whichever building is selected when the
    /// submit starts.
    pub async fn submit_apartment(&self) -> SubmitOutcome<ApartmentUuid> {
        let (submit, target) = {
            let mut state = self.state.lock().await;
            let target = state.navigation.selected_building();

            let submit = match state.apartment.begin_submit() {
                Ok(submit) => submit,
                Err(outcome) => {
                    debug!(?outcome, "apartment submit not started");

                    return outcome;
                }
            };

            let Some(target) = target else {
                debug!("apartment submit without a selected building");

                return state.apartment.finish_submit(submit, None);
            };

            (submit, target)
        };

        let result = self
            .context
            .buildings
            .add_apartment(target, submit.draft().clone().into_new_apartment())
            .await;

        let saved = match result {
            Ok(record) => Some(record.uuid),
            Err(error) => {
                debug!(building_uuid = %target, %error, "apartment not saved");

                None
            }
        };

        let outcome = self
            .state
            .lock()
            .await
            .apartment
            .finish_submit(submit, saved);

        debug!(?outcome, "apartment submit settled");

        outcome
    }

    /// Open the person dialog with an empty draft.
    pub async fn open_create_person(&self) {
        self.state.lock().await.person.open_create();
    }

    /// Open the person dialog prefilled from `person`, password blank. Does
    /// nothing if the person is unknown.
    pub async fn open_edit_person(&self, person: PersonUuid) {
        match self.context.people.get_person(person).await {
            Ok(record) => {
                let draft = PersonDraft::from_record(&record);

                self.state.lock().await.person.open_edit(person, draft);
            }
            Err(error) => debug!(person_uuid = %person, %error, "edit target missing"),
        }
    }

    /// Close the person dialog, dropping its draft.
    pub async fn close_person_modal(&self) {
        self.state.lock().await.person.close();
    }

    /// Apply a field edit to the open person draft. Returns `false` when the
    /// dialog is closed.
    pub async fn edit_person_draft(&self, edit: impl FnOnce(&mut PersonDraft)) -> bool {
        self.state.lock().await.person.draft_mut().map(edit).is_some()
    }

    /// Create or update the person from the open draft. A blank password on
    /// edit keeps the stored one.
    pub async fn submit_person(&self) -> SubmitOutcome<PersonUuid> {
        let submit = match self.state.lock().await.person.begin_submit() {
            Ok(submit) => submit,
            Err(outcome) => {
                debug!(?outcome, "person submit not started");

                return outcome;
            }
        };

        let draft = submit.draft().clone();

        let result = match submit.editing() {
            Some(uuid) => self
                .context
                .people
                .update_person(uuid, draft.into_update())
                .await,
            None => {
                self.context
                    .people
                    .create_person(draft.into_new_person())
                    .await
            }
        };

        let saved = match result {
            Ok(record) => Some(record.uuid),
            Err(error) => {
                debug!(%error, "person not saved");

                None
            }
        };

        let outcome = self
            .state
            .lock()
            .await
            .person
            .finish_submit(submit, saved);

        debug!(?outcome, "person submit settled");

        outcome
    }
}
