//! Report
//!
//! Terminal tables of the stored buildings and people.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use estates_app::domain::{
    buildings::records::BuildingRecord,
    people::{owner_display_name, records::PersonRecord},
};

/// Write both tables to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) fn write_report(
    out: &mut impl io::Write,
    buildings: &[BuildingRecord],
    people: &[PersonRecord],
) -> io::Result<()> {
    writeln!(out, "\n{}", buildings_table(buildings, people))?;
    writeln!(out, "\n{}", people_table(people))?;

    Ok(())
}

/// One row per apartment; buildings without apartments get a single row.
pub(crate) fn buildings_table(buildings: &[BuildingRecord], people: &[PersonRecord]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Building", "Location", "Units", "Unit", "Floor", "Status", "Owner"]);

    for building in buildings {
        let units = building.unit_count().to_string();

        if building.apartments.is_empty() {
            builder.push_record([
                building.name.as_str(),
                building.location.as_str(),
                units.as_str(),
                "",
                "",
                "",
                "",
            ]);

            continue;
        }

        for apartment in &building.apartments {
            let owner = apartment
                .owner
                .map_or("", |owner| owner_display_name(people, owner));

            builder.push_record([
                building.name.as_str(),
                building.location.as_str(),
                units.as_str(),
                apartment.unit_number.as_str(),
                apartment.floor.as_str(),
                apartment.status.as_str(),
                owner,
            ]);
        }
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..3), Alignment::right());

    table.to_string()
}

pub(crate) fn people_table(people: &[PersonRecord]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Name", "Role", "Email", "Phone"]);

    for person in people {
        builder.push_record([
            person.name.as_str(),
            person.role.as_str(),
            person.email.as_deref().unwrap_or(""),
            person.phone.as_deref().unwrap_or(""),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    table.to_string()
}

#[cfg(test)]
mod tests {
    use estates_app::domain::{
        buildings::records::{ApartmentRecord, ApartmentStatus, ApartmentUuid, BuildingUuid},
        people::records::{Password, PersonRole, PersonUuid},
    };

    use super::*;

    fn alice() -> PersonRecord {
        PersonRecord {
            uuid: PersonUuid::new(),
            name: "Alice Johnson".to_string(),
            role: PersonRole::Owner,
            email: Some("alice@example.com".to_string()),
            phone: None,
            password: Password::new("secret"),
        }
    }

    fn building(apartments: Vec<ApartmentRecord>) -> BuildingRecord {
        BuildingRecord {
            uuid: BuildingUuid::new(),
            name: "Sunset Heights".to_string(),
            location: "1234 Market St".to_string(),
            apartments,
        }
    }

    fn apartment(unit: &str, owner: Option<PersonUuid>) -> ApartmentRecord {
        ApartmentRecord {
            uuid: ApartmentUuid::new(),
            unit_number: unit.to_string(),
            floor: "3".to_string(),
            status: ApartmentStatus::Vacant,
            owner,
        }
    }

    #[test]
    fn owner_names_resolve_and_dangling_owners_show_unknown() {
        let alice = alice();
        let table = buildings_table(
            &[building(vec![
                apartment("3B", Some(alice.uuid)),
                apartment("4C", Some(PersonUuid::new())),
            ])],
            &[alice],
        );

        assert!(table.contains("Alice Johnson"), "owner missing:\n{table}");
        assert!(table.contains("Unknown"), "dangling owner missing:\n{table}");
        assert!(table.contains("vacant"), "status missing:\n{table}");
    }

    #[test]
    fn empty_building_still_gets_a_row() {
        let table = buildings_table(&[building(Vec::new())], &[]);

        assert!(table.contains("Sunset Heights"), "building missing:\n{table}");
    }

    #[test]
    fn people_table_never_shows_passwords() {
        let table = people_table(&[alice()]);

        assert!(table.contains("alice@example.com"), "email missing:\n{table}");
        assert!(table.contains("owner"), "role missing:\n{table}");
        assert!(!table.contains("secret"), "password leaked:\n{table}");
    }
}
