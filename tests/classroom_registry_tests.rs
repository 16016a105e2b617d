//! Classroom registry behavior: unique codes, preferred-level resolution,
//! delete guards and listing order.

mod support;

use lectio::db::repositories::LocalRepository;
use lectio::db::repository::{ClassroomRepository, SessionRepository, TimeSlotRepository};
use lectio::models::{ClassroomPatch, Weekday};
use uuid::Uuid;

use support::{classroom_input, seed_reference, session_input, slot_input, staffed_assignment};

#[tokio::test]
async fn test_duplicate_code_yields_one_success_one_conflict() {
    let repo = LocalRepository::new();

    let first = repo.insert_classroom(classroom_input("Math room", "R-101")).await;
    assert!(first.is_ok());

    let second = repo.insert_classroom(classroom_input("Other room", "R-101")).await;
    let err = second.unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(repo.classroom_count(), 1);
}

#[tokio::test]
async fn test_repeated_failed_create_is_idempotent() {
    let repo = LocalRepository::new();
    repo.insert_classroom(classroom_input("Math room", "R-101"))
        .await
        .unwrap();

    for _ in 0..2 {
        let err = repo
            .insert_classroom(classroom_input("Copy", "R-101"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }
    assert_eq!(repo.classroom_count(), 1);
}

#[tokio::test]
async fn test_get_unknown_classroom_is_not_found() {
    let repo = LocalRepository::new();
    let err = repo.get_classroom(Uuid::new_v4()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_with_unknown_preferred_level() {
    let repo = LocalRepository::new();
    let mut input = classroom_input("Lab", "LAB-1");
    input.preferred_level_id = Some(Uuid::new_v4());

    let err = repo.insert_classroom(input).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(repo.classroom_count(), 0);
}

#[tokio::test]
async fn test_create_with_known_preferred_level() {
    let repo = LocalRepository::new();
    let refs = seed_reference(&repo).await;

    let mut input = classroom_input("Lab", "LAB-1");
    input.preferred_level_id = Some(refs.level_id);

    let room = repo.insert_classroom(input).await.unwrap();
    assert_eq!(room.preferred_level_id, Some(refs.level_id));
}

#[tokio::test]
async fn test_update_code_collision_with_other_row() {
    let repo = LocalRepository::new();
    repo.insert_classroom(classroom_input("A", "R-101")).await.unwrap();
    let b = repo.insert_classroom(classroom_input("B", "R-102")).await.unwrap();

    let err = repo
        .update_classroom(
            b.id,
            ClassroomPatch {
                code: Some("R-101".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    // Keeping your own code is not a collision.
    let same = repo
        .update_classroom(
            b.id,
            ClassroomPatch {
                code: Some("R-102".to_string()),
                name: Some("B renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same.name, "B renamed");
}

#[tokio::test]
async fn test_delete_without_references_succeeds() {
    let repo = LocalRepository::new();
    let room = repo.insert_classroom(classroom_input("A", "R-101")).await.unwrap();

    repo.delete_classroom(room.id).await.unwrap();
    assert!(repo.get_classroom(room.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_delete_with_active_session_fails() {
    let repo = LocalRepository::new();
    let refs = seed_reference(&repo).await;
    let room = repo.insert_classroom(classroom_input("A", "R-101")).await.unwrap();
    let slot = repo
        .insert_time_slot(slot_input(refs.level_id, "1st", (8, 0), (9, 0), 1))
        .await
        .unwrap();
    let assignment = staffed_assignment(&repo, refs.year_id).await;
    repo.insert_session(session_input(
        assignment.id,
        room.id,
        slot.id,
        Weekday::Monday,
        refs.year_id,
    ))
    .await
    .unwrap();

    let err = repo.delete_classroom(room.id).await.unwrap_err();
    assert!(err.is_validation());
    // Row is intact after the failed delete.
    assert!(repo.get_classroom(room.id).await.is_ok());
}

#[tokio::test]
async fn test_delete_with_only_inactive_session_succeeds() {
    let repo = LocalRepository::new();
    let refs = seed_reference(&repo).await;
    let room = repo.insert_classroom(classroom_input("A", "R-101")).await.unwrap();
    let slot = repo
        .insert_time_slot(slot_input(refs.level_id, "1st", (8, 0), (9, 0), 1))
        .await
        .unwrap();
    let assignment = staffed_assignment(&repo, refs.year_id).await;

    let mut input = session_input(
        assignment.id,
        room.id,
        slot.id,
        Weekday::Monday,
        refs.year_id,
    );
    input.is_active = false;
    repo.insert_session(input).await.unwrap();

    repo.delete_classroom(room.id).await.unwrap();
}

#[tokio::test]
async fn test_list_sorted_by_building_floor_name() {
    let repo = LocalRepository::new();

    let mut east = classroom_input("Zeta", "E-1");
    east.building = Some("East".to_string());
    east.floor = Some(2);
    let mut west_low = classroom_input("Alpha", "W-1");
    west_low.building = Some("West".to_string());
    west_low.floor = Some(1);
    let mut east_low = classroom_input("Alpha", "E-2");
    east_low.building = Some("East".to_string());
    east_low.floor = Some(1);

    repo.insert_classroom(west_low).await.unwrap();
    repo.insert_classroom(east).await.unwrap();
    repo.insert_classroom(east_low).await.unwrap();

    let rooms = repo.list_classrooms().await.unwrap();
    let codes: Vec<&str> = rooms.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["E-2", "E-1", "W-1"]);
}
