//! Owner lookups.
//!
//! Apartments hold a weak reference to their owner. Nothing keeps that
//! reference valid, so every lookup tolerates a person that does not exist.

use crate::domain::people::records::{PersonRecord, PersonUuid};

/// Name shown for an owner reference that resolves to nobody.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Display name for an apartment owner, or [`UNKNOWN_OWNER`].
pub fn owner_display_name(people: &[PersonRecord], owner: PersonUuid) -> &str {
    people
        .iter()
        .find(|person| person.uuid == owner)
        .map_or(UNKNOWN_OWNER, |person| person.name.as_str())
}

/// People that may be assigned as apartment owners, in insertion order.
pub fn owners(people: &[PersonRecord]) -> impl Iterator<Item = &PersonRecord> {
    people.iter().filter(|person| person.is_owner())
}
