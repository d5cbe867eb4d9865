//! Building Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{domain::people::records::PersonUuid, uuids::TypedUuid};

/// Building UUID
pub type BuildingUuid = TypedUuid<BuildingRecord>;

/// Apartment UUID
pub type ApartmentUuid = TypedUuid<ApartmentRecord>;

/// Building Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingRecord {
    /// Unique building identifier.
    pub uuid: BuildingUuid,

    /// Display name, e.g. "Sunset Heights".
    pub name: String,

    /// Street address or free-form location.
    pub location: String,

    /// Units in insertion order. Owned by this building only.
    pub apartments: Vec<ApartmentRecord>,
}

impl BuildingRecord {
    /// Number of units in the building.
    pub fn unit_count(&self) -> usize {
        self.apartments.len()
    }
}

/// Apartment Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApartmentRecord {
    /// Unique apartment identifier.
    pub uuid: ApartmentUuid,

    /// Unit label, e.g. "3B".
    pub unit_number: String,

    /// Floor label. Never blank once stored.
    pub floor: String,

    /// Occupancy status.
    pub status: ApartmentStatus,

    /// Weak reference to the owning person. May dangle.
    pub owner: Option<PersonUuid>,
}

/// Occupancy status of an apartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApartmentStatus {
    /// Nobody lives there. Every new apartment starts vacant.
    #[default]
    Vacant,

    /// Somebody lives there.
    Occupied,
}

impl ApartmentStatus {
    /// Lowercase label as shown on the dashboard.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vacant => "vacant",
            Self::Occupied => "occupied",
        }
    }
}

impl Display for ApartmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
