//! Schedule-session behavior: the three-part conflict check, update
//! self-exclusion, reference resolution and listings.

mod support;

use lectio::db::repositories::LocalRepository;
use lectio::db::repository::{ClassroomRepository, SessionRepository, TimeSlotRepository};
use lectio::models::{NewSession, SessionPatch, TimeSlot, Weekday};
use uuid::Uuid;

use support::{
    assignment_with, classroom_input, date, seed_reference, session_input, slot_input,
    staffed_assignment, ReferenceIds,
};

struct Fixture {
    repo: LocalRepository,
    refs: ReferenceIds,
    room_a: Uuid,
    room_b: Uuid,
    slot_1: TimeSlot,
    slot_2: TimeSlot,
}

async fn fixture() -> Fixture {
    let repo = LocalRepository::new();
    let refs = seed_reference(&repo).await;
    let room_a = repo
        .insert_classroom(classroom_input("Room A", "R-A"))
        .await
        .unwrap()
        .id;
    let room_b = repo
        .insert_classroom(classroom_input("Room B", "R-B"))
        .await
        .unwrap()
        .id;
    let slot_1 = repo
        .insert_time_slot(slot_input(refs.level_id, "1st", (8, 0), (9, 0), 1))
        .await
        .unwrap();
    let slot_2 = repo
        .insert_time_slot(slot_input(refs.level_id, "2nd", (9, 0), (10, 0), 2))
        .await
        .unwrap();

    Fixture {
        repo,
        refs,
        room_a,
        room_b,
        slot_1,
        slot_2,
    }
}

// =========================================================
// Reference resolution
// =========================================================

#[tokio::test]
async fn test_unknown_references_are_not_found() {
    let fx = fixture().await;
    let assignment = staffed_assignment(&fx.repo, fx.refs.year_id).await;

    let cases: Vec<NewSession> = vec![
        session_input(
            Uuid::new_v4(),
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ),
        session_input(
            assignment.id,
            Uuid::new_v4(),
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ),
        session_input(
            assignment.id,
            fx.room_a,
            Uuid::new_v4(),
            Weekday::Monday,
            fx.refs.year_id,
        ),
        session_input(
            assignment.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            Uuid::new_v4(),
        ),
    ];

    for input in cases {
        let err = fx.repo.insert_session(input).await.unwrap_err();
        assert!(err.is_not_found());
    }
    assert_eq!(fx.repo.session_count(), 0);
}

#[tokio::test]
async fn test_unstaffed_assignment_is_not_found() {
    let fx = fixture().await;

    let no_teacher = assignment_with(&fx.repo, fx.refs.year_id, None, Some(Uuid::new_v4())).await;
    let err = fx
        .repo
        .insert_session(session_input(
            no_teacher.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.message().contains("no teacher"));

    let no_group = assignment_with(&fx.repo, fx.refs.year_id, Some(Uuid::new_v4()), None).await;
    let err = fx
        .repo
        .insert_session(session_input(
            no_group.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.message().contains("no class group"));
}

#[tokio::test]
async fn test_inverted_date_window_rejected() {
    let fx = fixture().await;
    let assignment = staffed_assignment(&fx.repo, fx.refs.year_id).await;

    let mut input = session_input(
        assignment.id,
        fx.room_a,
        fx.slot_1.id,
        Weekday::Monday,
        fx.refs.year_id,
    );
    input.start_date = date(2026, 6, 30);
    input.end_date = date(2025, 9, 1);

    let err = fx.repo.insert_session(input).await.unwrap_err();
    assert!(err.is_validation());
}

// =========================================================
// Conflict checks
// =========================================================

#[tokio::test]
async fn test_room_occupied_regardless_of_assignment() {
    let fx = fixture().await;
    let a1 = staffed_assignment(&fx.repo, fx.refs.year_id).await;
    let a2 = staffed_assignment(&fx.repo, fx.refs.year_id).await;

    fx.repo
        .insert_session(session_input(
            a1.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    let err = fx
        .repo
        .insert_session(session_input(
            a2.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert!(err.message().contains("room occupied"));
    assert_eq!(fx.repo.session_count(), 1);
}

#[tokio::test]
async fn test_teacher_double_booked_in_other_room() {
    let fx = fixture().await;
    let teacher = Uuid::new_v4();
    let a1 = assignment_with(&fx.repo, fx.refs.year_id, Some(teacher), Some(Uuid::new_v4())).await;
    let a2 = assignment_with(&fx.repo, fx.refs.year_id, Some(teacher), Some(Uuid::new_v4())).await;

    fx.repo
        .insert_session(session_input(
            a1.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    let err = fx
        .repo
        .insert_session(session_input(
            a2.id,
            fx.room_b,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert!(err.message().contains("teacher double-booked"));
}

#[tokio::test]
async fn test_class_group_double_booked_in_other_room() {
    let fx = fixture().await;
    let group = Uuid::new_v4();
    let a1 = assignment_with(&fx.repo, fx.refs.year_id, Some(Uuid::new_v4()), Some(group)).await;
    let a2 = assignment_with(&fx.repo, fx.refs.year_id, Some(Uuid::new_v4()), Some(group)).await;

    fx.repo
        .insert_session(session_input(
            a1.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    let err = fx
        .repo
        .insert_session(session_input(
            a2.id,
            fx.room_b,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert!(err.message().contains("class group double-booked"));
}

#[tokio::test]
async fn test_same_tuple_on_other_day_or_slot_is_free() {
    let fx = fixture().await;
    let assignment = staffed_assignment(&fx.repo, fx.refs.year_id).await;

    fx.repo
        .insert_session(session_input(
            assignment.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    // Same room and slot on Tuesday.
    fx.repo
        .insert_session(session_input(
            assignment.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Tuesday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    // Same room and day in the next slot.
    fx.repo
        .insert_session(session_input(
            assignment.id,
            fx.room_a,
            fx.slot_2.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    assert_eq!(fx.repo.session_count(), 3);
}

#[tokio::test]
async fn test_inactive_session_does_not_block() {
    let fx = fixture().await;
    let a1 = staffed_assignment(&fx.repo, fx.refs.year_id).await;
    let a2 = staffed_assignment(&fx.repo, fx.refs.year_id).await;

    let mut inactive = session_input(
        a1.id,
        fx.room_a,
        fx.slot_1.id,
        Weekday::Monday,
        fx.refs.year_id,
    );
    inactive.is_active = false;
    fx.repo.insert_session(inactive).await.unwrap();

    fx.repo
        .insert_session(session_input(
            a2.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();
}

// =========================================================
// Updates
// =========================================================

#[tokio::test]
async fn test_update_to_free_slot_succeeds_and_stays_active() {
    let fx = fixture().await;
    let assignment = staffed_assignment(&fx.repo, fx.refs.year_id).await;
    let session = fx
        .repo
        .insert_session(session_input(
            assignment.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    let updated = fx
        .repo
        .update_session(
            session.id,
            SessionPatch {
                time_slot_id: Some(fx.slot_2.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.time_slot_id, fx.slot_2.id);
    assert!(updated.is_active);
}

#[tokio::test]
async fn test_update_keeping_own_slot_does_not_self_conflict() {
    let fx = fixture().await;
    let assignment = staffed_assignment(&fx.repo, fx.refs.year_id).await;
    let session = fx
        .repo
        .insert_session(session_input(
            assignment.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    // Only the notes change; the occupancy tuple is its own.
    let updated = fx
        .repo
        .update_session(
            session.id,
            SessionPatch {
                notes: Some("moved projector in".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.notes.as_deref(), Some("moved projector in"));
}

#[tokio::test]
async fn test_update_conflict_leaves_row_unchanged() {
    let fx = fixture().await;
    let a1 = staffed_assignment(&fx.repo, fx.refs.year_id).await;
    let a3 = staffed_assignment(&fx.repo, fx.refs.year_id).await;

    let s1 = fx
        .repo
        .insert_session(session_input(
            a1.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();
    // Unrelated session occupying room B in slot 2.
    fx.repo
        .insert_session(session_input(
            a3.id,
            fx.room_b,
            fx.slot_2.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    let err = fx
        .repo
        .update_session(
            s1.id,
            SessionPatch {
                classroom_id: Some(fx.room_b),
                time_slot_id: Some(fx.slot_2.id),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    // Rollback property: every stored field is as before the attempt.
    let current = fx.repo.get_session(s1.id).await.unwrap();
    assert_eq!(current.classroom_id, fx.room_a);
    assert_eq!(current.time_slot_id, fx.slot_1.id);
    assert_eq!(current.day_of_week, Weekday::Monday);
    assert!(current.is_active);
}

#[tokio::test]
async fn test_update_unknown_session_is_not_found() {
    let fx = fixture().await;
    let err = fx
        .repo
        .update_session(Uuid::new_v4(), SessionPatch::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

// =========================================================
// Deletes and listings
// =========================================================

#[tokio::test]
async fn test_delete_is_unconditional() {
    let fx = fixture().await;
    let assignment = staffed_assignment(&fx.repo, fx.refs.year_id).await;
    let session = fx
        .repo
        .insert_session(session_input(
            assignment.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    fx.repo.delete_session(session.id).await.unwrap();
    let err = fx.repo.delete_session(session.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_listings_filter_and_order() {
    let fx = fixture().await;
    let teacher = Uuid::new_v4();
    let group = Uuid::new_v4();
    let a1 = assignment_with(&fx.repo, fx.refs.year_id, Some(teacher), Some(group)).await;
    let a2 = staffed_assignment(&fx.repo, fx.refs.year_id).await;

    // Tuesday slot 2, Monday slot 2, Monday slot 1 - inserted out of order.
    fx.repo
        .insert_session(session_input(
            a1.id,
            fx.room_a,
            fx.slot_2.id,
            Weekday::Tuesday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();
    fx.repo
        .insert_session(session_input(
            a1.id,
            fx.room_a,
            fx.slot_2.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();
    let mut inactive = session_input(
        a2.id,
        fx.room_b,
        fx.slot_1.id,
        Weekday::Monday,
        fx.refs.year_id,
    );
    inactive.is_active = false;
    fx.repo.insert_session(inactive).await.unwrap();
    fx.repo
        .insert_session(session_input(
            a2.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap();

    // Inactive sessions are excluded; order is day then slot order.
    let all = fx.repo.list_sessions().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].day_of_week, Weekday::Monday);
    assert_eq!(all[0].time_slot_id, fx.slot_1.id);
    assert_eq!(all[1].time_slot_id, fx.slot_2.id);
    assert_eq!(all[2].day_of_week, Weekday::Tuesday);

    let by_teacher = fx.repo.list_sessions_by_teacher(teacher).await.unwrap();
    assert_eq!(by_teacher.len(), 2);

    let by_group = fx.repo.list_sessions_by_class_group(group).await.unwrap();
    assert_eq!(by_group.len(), 2);

    let by_room = fx.repo.list_sessions_by_classroom(fx.room_a).await.unwrap();
    assert_eq!(by_room.len(), 3);
    let by_room_b = fx.repo.list_sessions_by_classroom(fx.room_b).await.unwrap();
    assert!(by_room_b.is_empty());
}

#[tokio::test]
async fn test_unhealthy_repository_rejects_writes() {
    let fx = fixture().await;
    let assignment = staffed_assignment(&fx.repo, fx.refs.year_id).await;
    fx.repo.set_healthy(false);

    let err = fx
        .repo
        .insert_session(session_input(
            assignment.id,
            fx.room_a,
            fx.slot_1.id,
            Weekday::Monday,
            fx.refs.year_id,
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        lectio::db::repository::RepositoryError::ConnectionError { .. }
    ));
    assert!(!fx.repo.health_check().await.unwrap());
}
