//! Conflict detection for schedule sessions.
//!
//! Pure functions over already-fetched rows; the repository runs them
//! while holding its write guard so a check-and-insert commits atomically.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ScheduleSession, SubjectAssignment, WallTime, Weekday};

/// Half-open interval overlap test: `[a_start, a_end)` vs `[b_start, b_end)`.
/// Touching endpoints (10:00-11:00 after 09:00-10:00) do not overlap.
pub fn ranges_overlap(a_start: WallTime, a_end: WallTime, b_start: WallTime, b_end: WallTime) -> bool {
    a_start < b_end && a_end > b_start
}

/// The occupancy scope of a proposed session: conflicts are only possible
/// against active sessions sharing all three of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionKey {
    pub time_slot_id: Uuid,
    pub day_of_week: Weekday,
    pub academic_year_id: Uuid,
}

/// Which resource a conflicting session already occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    Classroom,
    Teacher,
    ClassGroup,
}

/// A detected double-booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConflict {
    pub kind: ConflictKind,
    /// The existing active session that blocks the proposal.
    pub blocking_session_id: Uuid,
}

impl ScheduleConflict {
    /// Caller-facing description of the double-booking.
    pub fn message(&self) -> &'static str {
        match self.kind {
            ConflictKind::Classroom => "room occupied: the classroom already has an active session in this time slot",
            ConflictKind::Teacher => "teacher double-booked: the teacher already has an active session in this time slot",
            ConflictKind::ClassGroup => "class group double-booked: the group already has an active session in this time slot",
        }
    }
}

/// Find the first double-booking for a proposed session.
///
/// Runs the three occupancy checks in the fixed order classroom, teacher,
/// class-group and short-circuits on the first hit. Only active sessions
/// sharing the proposal's (time slot, day, year) scope participate;
/// `exclude` removes the session being updated from consideration.
///
/// `teacher_id` and `class_group_id` are the proposal's own, resolved from
/// its subject assignment by the caller (which rejects assignments missing
/// either before getting here).
pub fn find_conflict(
    key: &SessionKey,
    classroom_id: Uuid,
    teacher_id: Uuid,
    class_group_id: Uuid,
    existing: &[(&ScheduleSession, &SubjectAssignment)],
    exclude: Option<Uuid>,
) -> Option<ScheduleConflict> {
    let in_scope = |session: &ScheduleSession| {
        session.is_active
            && Some(session.id) != exclude
            && session.time_slot_id == key.time_slot_id
            && session.day_of_week == key.day_of_week
            && session.academic_year_id == key.academic_year_id
    };

    for (session, _) in existing {
        if in_scope(session) && session.classroom_id == classroom_id {
            return Some(ScheduleConflict {
                kind: ConflictKind::Classroom,
                blocking_session_id: session.id,
            });
        }
    }

    for (session, assignment) in existing {
        if in_scope(session) && assignment.teacher_id == Some(teacher_id) {
            return Some(ScheduleConflict {
                kind: ConflictKind::Teacher,
                blocking_session_id: session.id,
            });
        }
    }

    for (session, assignment) in existing {
        if in_scope(session) && assignment.class_group_id == Some(class_group_id) {
            return Some(ScheduleConflict {
                kind: ConflictKind::ClassGroup,
                blocking_session_id: session.id,
            });
        }
    }

    None
}
