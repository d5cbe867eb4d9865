//! Integration tests for the dashboard form flows

use testresult::TestResult;

use estates_app::{
    auth::{AuthServiceError, Credentials},
    config::StoreConfig,
    context::AppContext,
    dashboard::{Dashboard, SubmitOutcome, Tab, View},
    domain::{
        buildings::records::ApartmentStatus,
        people::records::{PersonRole, PersonUuid},
    },
};

fn dashboard() -> Dashboard {
    Dashboard::new(AppContext::in_memory(&StoreConfig::instant()))
}

async fn add_owner(dashboard: &Dashboard, name: &str) -> Option<PersonUuid> {
    dashboard.select_tab(Tab::People).await;
    dashboard.open_create_person().await;
    dashboard
        .edit_person_draft(|draft| {
            draft.name = name.to_string();
            draft.role = PersonRole::Owner;
            draft.password = "pw".to_string();
        })
        .await;

    dashboard.submit_person().await.saved()
}

#[tokio::test]
async fn building_with_one_apartment() -> TestResult {
    let dashboard = dashboard();

    dashboard.open_create_building().await;
    dashboard
        .edit_building_draft(|draft| {
            draft.name = "Sunset Heights".to_string();
            draft.location = "1234 Market St".to_string();
        })
        .await;

    let building = dashboard
        .submit_building()
        .await
        .saved()
        .ok_or("building was not stored")?;

    dashboard.select_building(building).await;
    dashboard.open_create_apartment().await;
    dashboard
        .edit_apartment_draft(|draft| {
            draft.unit_number = "3B".to_string();
            draft.floor = "3".to_string();
        })
        .await;

    let saved = dashboard.submit_apartment().await;

    assert!(matches!(saved, SubmitOutcome::Saved(_)), "got {saved:?}");

    let View::Building(building) = dashboard.view().await else {
        return Err("expected the building detail view".into());
    };

    assert_eq!(dashboard.buildings().await.len(), 1);
    assert_eq!(building.unit_count(), 1);

    let apartment = building.apartments.first().ok_or("apartment missing")?;

    assert_eq!(saved.saved(), Some(apartment.uuid));
    assert_eq!(apartment.unit_number, "3B");
    assert_eq!(apartment.floor, "3");
    assert_eq!(apartment.status, ApartmentStatus::Vacant);
    assert_eq!(apartment.owner, None);
    assert_eq!(dashboard.owner_name(apartment.owner).await, None);

    Ok(())
}

#[tokio::test]
async fn apartment_owner_is_picked_from_owners() -> TestResult {
    let dashboard = dashboard();
    let owner = add_owner(&dashboard, "Alice").await.ok_or("owner not saved")?;

    dashboard.home().await;
    dashboard.open_create_building().await;
    dashboard
        .edit_building_draft(|draft| {
            draft.name = "Harbor View".to_string();
            draft.location = "9 Pier Rd".to_string();
        })
        .await;

    let building = dashboard
        .submit_building()
        .await
        .saved()
        .ok_or("building was not stored")?;

    dashboard.select_building(building).await;
    dashboard.open_create_apartment().await;
    dashboard
        .edit_apartment_draft(|draft| {
            draft.unit_number = "101".to_string();
            draft.owner = Some(owner);
        })
        .await;

    dashboard
        .submit_apartment()
        .await
        .saved()
        .ok_or("apartment was not stored")?;

    let View::Building(building) = dashboard.view().await else {
        return Err("expected the building detail view".into());
    };

    let apartment = building.apartments.first().ok_or("apartment missing")?;

    assert_eq!(apartment.floor, "1");
    assert_eq!(
        dashboard.owner_name(apartment.owner).await.as_deref(),
        Some("Alice")
    );

    Ok(())
}

#[tokio::test]
async fn cancelled_modal_leaves_store_untouched() {
    let dashboard = dashboard();

    dashboard.open_create_building().await;
    dashboard
        .edit_building_draft(|draft| draft.name = "Draft Only".to_string())
        .await;
    dashboard.close_building_modal().await;

    assert!(!dashboard.snapshot().await.building.is_open());
    assert_eq!(dashboard.view().await, View::Buildings(Vec::new()));

    dashboard.open_create_building().await;

    let state = dashboard.snapshot().await;

    assert_eq!(
        state.building.draft().map(|draft| draft.name.as_str()),
        Some("")
    );
}

#[tokio::test]
async fn login_gate_accepts_only_the_admin_pair() -> TestResult {
    let context = AppContext::in_memory(&StoreConfig::instant());

    let session = context.auth.login(Credentials::new("ADMIN", "admin")).await?;

    assert_eq!(session.username, "ADMIN");

    let rejected = context.auth.login(Credentials::new("admin", "wrong")).await;

    assert_eq!(rejected, Err(AuthServiceError::InvalidCredentials));

    Ok(())
}
