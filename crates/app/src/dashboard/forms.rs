//! Form drafts.
//!
//! A draft holds the raw field values of one dialog. It never references a
//! stored record; edit dialogs copy the record's fields in when they open.

use std::fmt;

use crate::domain::{
    buildings::{
        data::{BuildingUpdate, NewApartment, NewBuilding},
        records::{ApartmentUuid, BuildingRecord, BuildingUuid},
    },
    is_blank,
    people::{
        data::{NewPerson, PersonUpdate},
        records::{PersonRecord, PersonRole, PersonUuid},
    },
};

/// Whether a dialog creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// The dialog adds a new record.
    Create,

    /// The dialog changes an existing record.
    Edit,
}

/// Field values behind one kind of dialog.
pub trait Draft: Clone + Default + PartialEq + fmt::Debug {
    /// Identifier of the record an edit dialog targets.
    type Key: Copy + PartialEq + fmt::Debug;

    /// First required field that is still blank.
    fn missing_field(&self, mode: FormMode) -> Option<&'static str>;
}

/// Building dialog fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingDraft {
    /// Required.
    pub name: String,

    /// Street address. Required.
    pub location: String,
}

impl BuildingDraft {
    /// Copy the editable fields of a stored building.
    pub fn from_record(building: &BuildingRecord) -> Self {
        Self {
            name: building.name.clone(),
            location: building.location.clone(),
        }
    }

    /// Input for a create.
    pub fn into_new_building(self) -> NewBuilding {
        NewBuilding {
            name: self.name,
            location: self.location,
        }
    }

    /// Input for an edit.
    pub fn into_update(self) -> BuildingUpdate {
        BuildingUpdate {
            name: self.name,
            location: self.location,
        }
    }
}

impl Draft for BuildingDraft {
    type Key = BuildingUuid;

    fn missing_field(&self, _mode: FormMode) -> Option<&'static str> {
        if is_blank(&self.name) {
            return Some("name");
        }

        if is_blank(&self.location) {
            return Some("location");
        }

        None
    }
}

/// Apartment dialog fields. Apartments are only ever created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApartmentDraft {
    /// Required.
    pub unit_number: String,

    /// Left empty, the store files the unit on the first floor.
    pub floor: String,

    /// Chosen from the owners list; `None` is "no owner assigned".
    pub owner: Option<PersonUuid>,
}

impl ApartmentDraft {
    /// Input for the store's add apartment.
    pub fn into_new_apartment(self) -> NewApartment {
        NewApartment {
            unit_number: self.unit_number,
            floor: self.floor,
            owner: self.owner,
        }
    }
}

impl Draft for ApartmentDraft {
    type Key = ApartmentUuid;

    fn missing_field(&self, _mode: FormMode) -> Option<&'static str> {
        is_blank(&self.unit_number).then_some("unit_number")
    }
}

/// Person dialog fields.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    /// Required.
    pub name: String,

    /// Owner or tenant.
    pub role: PersonRole,

    /// Optional. Left empty, nothing is stored.
    pub email: String,

    /// Optional. Left empty, nothing is stored.
    pub phone: String,

    /// Write-only. Required when creating; blank on edit keeps the stored one.
    pub password: String,
}

impl PersonDraft {
    /// Copy the editable fields of a stored person. The password stays blank.
    pub fn from_record(person: &PersonRecord) -> Self {
        Self {
            name: person.name.clone(),
            role: person.role,
            email: person.email.clone().unwrap_or_default(),
            phone: person.phone.clone().unwrap_or_default(),
            password: String::new(),
        }
    }

    /// Input for a create.
    pub fn into_new_person(self) -> NewPerson {
        NewPerson {
            name: self.name,
            role: self.role,
            email: Some(self.email),
            phone: Some(self.phone),
            password: self.password,
        }
    }

    /// Input for an edit. An empty password leaves the stored one alone.
    pub fn into_update(self) -> PersonUpdate {
        PersonUpdate {
            name: self.name,
            role: self.role,
            email: Some(self.email),
            phone: Some(self.phone),
            password: Some(self.password),
        }
    }
}

impl Draft for PersonDraft {
    type Key = PersonUuid;

    fn missing_field(&self, mode: FormMode) -> Option<&'static str> {
        if is_blank(&self.name) {
            return Some("name");
        }

        if mode == FormMode::Create && is_blank(&self.password) {
            return Some("password");
        }

        None
    }
}

impl fmt::Debug for PersonDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonDraft")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password_set", &!self.password.is_empty())
            .finish()
    }
}
