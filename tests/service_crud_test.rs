use cleaning_rota::{CleaningService, InMemoryStore, RoomInventory, RotaError};
use uuid::Uuid;

fn five_room_service() -> CleaningService<InMemoryStore> {
    let inventory = RoomInventory::new(vec![101, 102, 103, 104, 105]);
    CleaningService::new(InMemoryStore::new(), inventory)
}

fn maids(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn test_create_excluding_one_room_matches_expected_roster() {
    let service = five_room_service();

    let record = service.create(maids(&["Ana", "Bo"]), "103").await.unwrap();

    assert_eq!(record.rooms_to_clean, vec![101, 102, 104, 105]);
    assert_eq!(record.assignments, vec!["Ana: 101, 104", "Bo: 102, 105"]);
    assert_eq!(record.maids, vec!["Ana", "Bo"]);
}

#[tokio::test]
async fn test_create_with_empty_exclusions_keeps_full_inventory() {
    let service = five_room_service();

    let record = service.create(maids(&["Ana"]), "").await.unwrap();

    assert_eq!(record.rooms_to_clean, vec![101, 102, 103, 104, 105]);
    assert_eq!(record.assignments, vec!["Ana: 101, 102, 103, 104, 105"]);
}

#[tokio::test]
async fn test_create_without_maids_is_rejected() {
    let service = five_room_service();

    let err = service.create(vec![], "").await.unwrap_err();

    assert!(matches!(err, RotaError::NoMaids));
    assert!(service.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_bad_exclusion_token_stores_nothing() {
    let service = five_room_service();

    let err = service.create(maids(&["Ana"]), "103, lobby").await.unwrap_err();

    assert!(matches!(err, RotaError::InvalidRoomNumber { .. }));
    assert!(service.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_excluding_unknown_room_is_a_no_op() {
    let service = five_room_service();

    let record = service.create(maids(&["Ana"]), "999").await.unwrap();

    assert_eq!(record.rooms_to_clean, vec![101, 102, 103, 104, 105]);
}

#[tokio::test]
async fn test_double_create_yields_equal_rosters_with_distinct_identities() {
    let service = five_room_service();

    let first = service.create(maids(&["Ana", "Bo"]), "103").await.unwrap();
    let second = service.create(maids(&["Ana", "Bo"]), "103").await.unwrap();

    assert_eq!(first.rooms_to_clean, second.rooms_to_clean);
    assert_eq!(first.assignments, second.assignments);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_get_unknown_id_is_none() {
    let service = five_room_service();

    assert!(service.get(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_preserves_id_and_registration_time() {
    let service = five_room_service();
    let created = service.create(maids(&["Ana", "Bo"]), "").await.unwrap();

    let updated = service
        .update(created.id, maids(&["Cara"]), "101, 102")
        .await
        .unwrap()
        .expect("record should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.registered_at, created.registered_at);
    assert_eq!(updated.maids, vec!["Cara"]);
    assert_eq!(updated.rooms_to_clean, vec![103, 104, 105]);
    assert_eq!(updated.assignments, vec!["Cara: 103, 104, 105"]);

    // The stored copy was overwritten, not merged.
    let fetched = service.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.maids, vec!["Cara"]);
    assert_eq!(fetched.rooms_to_clean, vec![103, 104, 105]);
}

#[tokio::test]
async fn test_update_unknown_id_is_none() {
    let service = five_room_service();

    let result = service
        .update(Uuid::new_v4(), maids(&["Ana"]), "")
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_with_bad_inputs_leaves_record_untouched() {
    let service = five_room_service();
    let created = service.create(maids(&["Ana"]), "").await.unwrap();

    let err = service
        .update(created.id, vec![], "")
        .await
        .unwrap_err();
    assert!(matches!(err, RotaError::NoMaids));

    let fetched = service.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.maids, vec!["Ana"]);
    assert_eq!(fetched.assignments, created.assignments);
}

#[tokio::test]
async fn test_delete_then_get_is_none_and_delete_is_idempotent() {
    let service = five_room_service();
    let created = service.create(maids(&["Ana"]), "").await.unwrap();

    service.delete(created.id).await.unwrap();
    assert!(service.get(created.id).await.unwrap().is_none());

    // Second delete of the same id still succeeds.
    service.delete(created.id).await.unwrap();
}

#[tokio::test]
async fn test_all_returns_records_in_insertion_order() {
    let service = five_room_service();

    let first = service.create(maids(&["Ana"]), "").await.unwrap();
    let second = service.create(maids(&["Bo"]), "").await.unwrap();
    let third = service.create(maids(&["Cara"]), "").await.unwrap();

    let ids: Vec<_> = service.all().await.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[tokio::test]
async fn test_default_inventory_roster_covers_all_86_rooms() {
    let service = CleaningService::with_default_inventory(InMemoryStore::new());

    let record = service
        .create(maids(&["Ana", "Bo", "Cara"]), "")
        .await
        .unwrap();

    assert_eq!(record.rooms_to_clean.len(), 86);
    assert!(!record.rooms_to_clean.contains(&513));
    // 86 = 3 * 28 + 2: the first two maids take 29 rooms, the third 28.
    let sizes: Vec<usize> = record
        .assignments
        .iter()
        .map(|a| a.split(": ").nth(1).unwrap().split(", ").count())
        .collect();
    assert_eq!(sizes, vec![29, 29, 28]);
}
