//! Modal dialogs and the form session behind them.

use crate::dashboard::forms::{Draft, FormMode};

/// What happened to a submit request.
///
/// The dashboard never surfaces these to the user; an unsuccessful submit
/// leaves the dialog as it was. `K` is the id of the saved record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SubmitOutcome<K = ()> {
    /// The store accepted the draft as record `K` and the dialog closed.
    Saved(K),

    /// A required field is blank. Nothing was sent to the store.
    Incomplete(&'static str),

    /// A previous submit for this dialog is still in flight.
    Pending,

    /// The dialog is closed.
    NotOpen,

    /// The store refused the draft. The dialog stays open.
    Rejected,

    /// The dialog was closed or reopened while the save was in flight.
    Discarded,
}

impl<K> SubmitOutcome<K> {
    /// The saved record's id, if the submit saved.
    pub fn saved(self) -> Option<K> {
        match self {
            Self::Saved(key) => Some(key),
            _ => None,
        }
    }

    /// Convert the saved id, keeping every other outcome as is.
    pub fn map_saved<U>(self, f: impl FnOnce(K) -> U) -> SubmitOutcome<U> {
        match self {
            Self::Saved(key) => SubmitOutcome::Saved(f(key)),
            Self::Incomplete(field) => SubmitOutcome::Incomplete(field),
            Self::Pending => SubmitOutcome::Pending,
            Self::NotOpen => SubmitOutcome::NotOpen,
            Self::Rejected => SubmitOutcome::Rejected,
            Self::Discarded => SubmitOutcome::Discarded,
        }
    }
}

/// An open dialog: which record it targets, its draft, and whether a save
/// is in flight.
#[derive(Debug, Clone)]
pub struct FormSession<D: Draft> {
    editing: Option<D::Key>,
    initial: D,
    draft: D,
    pending: bool,
}

impl<D: Draft> FormSession<D> {
    fn new(editing: Option<D::Key>, draft: D) -> Self {
        Self {
            editing,
            initial: draft.clone(),
            draft,
            pending: false,
        }
    }

    /// Edit when the dialog targets an existing record, create otherwise.
    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// The record being edited. `None` in create mode.
    pub fn editing(&self) -> Option<D::Key> {
        self.editing
    }

    /// The draft as currently edited.
    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Whether a save is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the draft differs from what the dialog opened with.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial
    }
}

/// A snapshot of the draft taken when a submit starts.
#[derive(Debug)]
pub struct PendingSubmit<D: Draft> {
    generation: u64,
    editing: Option<D::Key>,
    draft: D,
}

impl<D: Draft> PendingSubmit<D> {
    /// The record to update. `None` when the submit creates one.
    pub fn editing(&self) -> Option<D::Key> {
        self.editing
    }

    /// The draft as it was when the submit started.
    pub fn draft(&self) -> &D {
        &self.draft
    }
}

/// One dialog of the dashboard.
///
/// Every open bumps the generation, so a save that completes after the
/// dialog was closed or reopened can tell it no longer owns the dialog.
#[derive(Debug, Clone)]
pub struct Modal<D: Draft> {
    session: Option<FormSession<D>>,
    generation: u64,
}

impl<D: Draft> Default for Modal<D> {
    fn default() -> Self {
        Self {
            session: None,
            generation: 0,
        }
    }
}

impl<D: Draft> Modal<D> {
    /// Open with an empty draft for a new record.
    pub fn open_create(&mut self) {
        self.open(None, D::default());
    }

    /// Open prefilled from an existing record.
    pub fn open_edit(&mut self, key: D::Key, draft: D) {
        self.open(Some(key), draft);
    }

    fn open(&mut self, editing: Option<D::Key>, draft: D) {
        self.generation = self.generation.wrapping_add(1);
        self.session = Some(FormSession::new(editing, draft));
    }

    /// Close and throw the draft away.
    pub fn close(&mut self) {
        self.session = None;
    }

    /// Whether a session is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The open session. `None` while closed.
    pub fn session(&self) -> Option<&FormSession<D>> {
        self.session.as_ref()
    }

    /// See [`FormSession::mode`].
    pub fn mode(&self) -> Option<FormMode> {
        self.session.as_ref().map(FormSession::mode)
    }

    /// See [`FormSession::editing`].
    pub fn editing(&self) -> Option<D::Key> {
        self.session.as_ref().and_then(FormSession::editing)
    }

    /// See [`FormSession::draft`].
    pub fn draft(&self) -> Option<&D> {
        self.session.as_ref().map(FormSession::draft)
    }

    /// Mutable access to the draft for field edits. `None` while closed.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        self.session.as_mut().map(|session| &mut session.draft)
    }

    /// Whether the open session has a save in flight.
    pub fn is_pending(&self) -> bool {
        self.session.as_ref().is_some_and(FormSession::is_pending)
    }

    /// Start a submit: checks required fields and marks the dialog pending.
    ///
    /// # Errors
    ///
    /// Returns the outcome to report when the submit cannot start.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit<D>, SubmitOutcome<D::Key>> {
        let Some(session) = self.session.as_mut() else {
            return Err(SubmitOutcome::NotOpen);
        };

        if session.pending {
            return Err(SubmitOutcome::Pending);
        }

        if let Some(field) = session.draft.missing_field(session.mode()) {
            return Err(SubmitOutcome::Incomplete(field));
        }

        session.pending = true;

        Ok(PendingSubmit {
            generation: self.generation,
            editing: session.editing,
            draft: session.draft.clone(),
        })
    }

    /// Settle a submit started with [`Modal::begin_submit`].
    ///
    /// `saved` is the stored record's id, or `None` when the store refused.
    /// On success the dialog closes. On failure it stays open with its draft.
    /// If the dialog moved on in the meantime it is left untouched.
    pub fn finish_submit(
        &mut self,
        submit: PendingSubmit<D>,
        saved: Option<D::Key>,
    ) -> SubmitOutcome<D::Key> {
        if submit.generation != self.generation || self.session.is_none() {
            return SubmitOutcome::Discarded;
        }

        if let Some(key) = saved {
            self.session = None;

            return SubmitOutcome::Saved(key);
        }

        if let Some(session) = self.session.as_mut() {
            session.pending = false;
        }

        SubmitOutcome::Rejected
    }
}

#[cfg(test)]
mod tests {
    use crate::{dashboard::forms::BuildingDraft, domain::buildings::records::BuildingUuid};

    use super::*;

    fn filled() -> BuildingDraft {
        BuildingDraft {
            name: "Sunset Heights".to_string(),
            location: "1234 Market St".to_string(),
        }
    }

    #[test]
    fn closed_modal_has_no_session() {
        let mut modal = Modal::<BuildingDraft>::default();

        assert!(!modal.is_open());
        assert_eq!(modal.draft_mut(), None);
        assert!(matches!(modal.begin_submit(), Err(SubmitOutcome::NotOpen)));
    }

    #[test]
    fn open_create_starts_with_an_empty_draft() {
        let mut modal = Modal::<BuildingDraft>::default();

        modal.open_create();

        assert_eq!(modal.mode(), Some(FormMode::Create));
        assert_eq!(modal.editing(), None);
        assert_eq!(modal.draft(), Some(&BuildingDraft::default()));
    }

    #[test]
    fn open_edit_prefills_and_tracks_dirtiness() {
        let mut modal = Modal::default();
        let uuid = BuildingUuid::new();

        modal.open_edit(uuid, filled());

        assert_eq!(modal.mode(), Some(FormMode::Edit));
        assert_eq!(modal.editing(), Some(uuid));
        assert!(!modal.session().is_some_and(FormSession::is_dirty));

        if let Some(draft) = modal.draft_mut() {
            draft.name = "Sunset Towers".to_string();
        }

        assert!(modal.session().is_some_and(FormSession::is_dirty));
    }

    #[test]
    fn reopening_discards_previous_draft() {
        let mut modal = Modal::<BuildingDraft>::default();

        modal.open_edit(BuildingUuid::new(), filled());
        modal.close();
        modal.open_create();

        assert_eq!(modal.draft(), Some(&BuildingDraft::default()));
        assert_eq!(modal.editing(), None);
    }

    #[test]
    fn incomplete_draft_does_not_start_submit() {
        let mut modal = Modal::<BuildingDraft>::default();

        modal.open_create();

        assert!(matches!(
            modal.begin_submit(),
            Err(SubmitOutcome::Incomplete("name"))
        ));
        assert!(!modal.is_pending());
    }

    #[test]
    fn second_submit_while_pending_is_refused() {
        let mut modal = Modal::default();

        modal.open_edit(BuildingUuid::new(), filled());

        let first = modal.begin_submit();

        assert!(first.is_ok());
        assert!(modal.is_pending());
        assert!(matches!(modal.begin_submit(), Err(SubmitOutcome::Pending)));
    }

    #[test]
    fn successful_submit_closes_the_modal() {
        let mut modal = Modal::default();
        let uuid = BuildingUuid::new();

        modal.open_edit(uuid, filled());

        let Ok(submit) = modal.begin_submit() else {
            panic!("submit should start");
        };

        assert_eq!(
            modal.finish_submit(submit, Some(uuid)),
            SubmitOutcome::Saved(uuid)
        );
        assert!(!modal.is_open());
    }

    #[test]
    fn saved_outcome_exposes_the_record_id() {
        let uuid = BuildingUuid::new();

        assert_eq!(SubmitOutcome::Saved(uuid).saved(), Some(uuid));
        assert_eq!(SubmitOutcome::<BuildingUuid>::Rejected.saved(), None);
        assert_eq!(
            SubmitOutcome::Saved(uuid).map_saved(|_| ()),
            SubmitOutcome::Saved(())
        );
        assert_eq!(
            SubmitOutcome::<BuildingUuid>::Incomplete("name").map_saved(|_| ()),
            SubmitOutcome::Incomplete("name")
        );
    }

    #[test]
    fn failed_submit_keeps_draft_and_clears_pending() {
        let mut modal = Modal::default();

        modal.open_edit(BuildingUuid::new(), filled());

        let Ok(submit) = modal.begin_submit() else {
            panic!("submit should start");
        };

        assert_eq!(modal.finish_submit(submit, None), SubmitOutcome::Rejected);
        assert!(modal.is_open());
        assert!(!modal.is_pending());
        assert_eq!(modal.draft(), Some(&filled()));
    }

    #[test]
    fn completion_after_reopen_leaves_new_session_alone() {
        let mut modal = Modal::default();

        modal.open_edit(BuildingUuid::new(), filled());

        let Ok(submit) = modal.begin_submit() else {
            panic!("submit should start");
        };

        modal.close();
        modal.open_create();

        assert_eq!(
            modal.finish_submit(submit, Some(BuildingUuid::new())),
            SubmitOutcome::Discarded
        );
        assert!(modal.is_open());
        assert_eq!(modal.mode(), Some(FormMode::Create));
        assert!(!modal.is_pending());
    }

    #[test]
    fn completion_after_close_stays_closed() {
        let mut modal = Modal::default();

        modal.open_edit(BuildingUuid::new(), filled());

        let Ok(submit) = modal.begin_submit() else {
            panic!("submit should start");
        };

        modal.close();

        assert_eq!(modal.finish_submit(submit, None), SubmitOutcome::Discarded);
        assert!(!modal.is_open());
    }
}
