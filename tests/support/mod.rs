#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::NaiveDate;
use uuid::Uuid;

use lectio::db::repositories::LocalRepository;
use lectio::db::repository::ReferenceRepository;
use lectio::models::{
    NewAcademicYear, NewClassroom, NewEducationalLevel, NewSession, NewSubjectAssignment,
    NewTimeSlot, SubjectAssignment, WallTime, Weekday,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Ids of the reference rows most tests need.
pub struct ReferenceIds {
    pub level_id: Uuid,
    pub year_id: Uuid,
}

/// Insert one educational level and one academic year.
pub async fn seed_reference(repo: &LocalRepository) -> ReferenceIds {
    let level = repo
        .insert_educational_level(NewEducationalLevel {
            name: "Secondary".to_string(),
            code: "SEC".to_string(),
        })
        .await
        .expect("seed level");
    let year = repo
        .insert_academic_year(NewAcademicYear {
            name: "2025-2026".to_string(),
            start_date: date(2025, 9, 1),
            end_date: date(2026, 6, 30),
            is_current: true,
        })
        .await
        .expect("seed year");

    ReferenceIds {
        level_id: level.id,
        year_id: year.id,
    }
}

/// Insert a fully staffed subject assignment.
pub async fn staffed_assignment(repo: &LocalRepository, year_id: Uuid) -> SubjectAssignment {
    assignment_with(repo, year_id, Some(Uuid::new_v4()), Some(Uuid::new_v4())).await
}

/// Insert a subject assignment with explicit (possibly missing) staffing.
pub async fn assignment_with(
    repo: &LocalRepository,
    year_id: Uuid,
    teacher_id: Option<Uuid>,
    class_group_id: Option<Uuid>,
) -> SubjectAssignment {
    repo.insert_subject_assignment(NewSubjectAssignment {
        teacher_id,
        subject_id: Uuid::new_v4(),
        class_group_id,
        academic_year_id: year_id,
        weekly_hours: 4,
    })
    .await
    .expect("seed assignment")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn wall(h: u32, m: u32) -> WallTime {
    WallTime::new(h, m).expect("valid wall time")
}

pub fn classroom_input(name: &str, code: &str) -> NewClassroom {
    NewClassroom {
        name: name.to_string(),
        code: code.to_string(),
        capacity: 30,
        kind: Default::default(),
        equipment: vec![],
        building: None,
        floor: None,
        description: None,
        is_active: true,
        preferred_level_id: None,
    }
}

pub fn slot_input(
    level_id: Uuid,
    name: &str,
    start: (u32, u32),
    end: (u32, u32),
    order: i32,
) -> NewTimeSlot {
    NewTimeSlot {
        name: name.to_string(),
        start_time: wall(start.0, start.1),
        end_time: wall(end.0, end.1),
        order,
        is_break: false,
        is_active: true,
        level_id,
    }
}

pub fn session_input(
    subject_assignment_id: Uuid,
    classroom_id: Uuid,
    time_slot_id: Uuid,
    day_of_week: Weekday,
    academic_year_id: Uuid,
) -> NewSession {
    NewSession {
        subject_assignment_id,
        classroom_id,
        time_slot_id,
        day_of_week,
        academic_year_id,
        start_date: date(2025, 9, 1),
        end_date: date(2026, 6, 30),
        is_active: true,
        notes: None,
    }
}
