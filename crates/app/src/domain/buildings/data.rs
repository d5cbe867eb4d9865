//! Building Data

use crate::domain::people::records::PersonUuid;

/// Floor assigned to apartments submitted without one.
pub const DEFAULT_FLOOR: &str = "1";

/// New Building Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBuilding {
    /// Building name. Required.
    pub name: String,

    /// Building location. Required.
    pub location: String,
}

/// Building Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingUpdate {
    /// Replacement name. Required.
    pub name: String,

    /// Replacement location. Required.
    pub location: String,
}

/// New Apartment Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApartment {
    /// Unit label. Required.
    pub unit_number: String,

    /// Floor label. Blank means [`DEFAULT_FLOOR`].
    pub floor: String,

    /// Optional owner.
    pub owner: Option<PersonUuid>,
}
