//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap structures, providing fast, deterministic and
//! isolated execution.
//!
//! Every write operation performs its invariant checks and the write
//! itself under one lock guard. That single-guard discipline is what turns
//! the read-then-write conflict checks into atomic check-and-commit
//! operations: a concurrent request cannot slip a colliding row in between.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::repository::*;
use crate::models::*;
use crate::scheduling::{find_conflict, ranges_overlap, SessionKey};

/// In-memory local repository.
///
/// # Example
/// ```
/// use lectio::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.session_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    classrooms: HashMap<Uuid, Classroom>,
    time_slots: HashMap<Uuid, TimeSlot>,
    sessions: HashMap<Uuid, ScheduleSession>,

    levels: HashMap<Uuid, EducationalLevel>,
    academic_years: HashMap<Uuid, AcademicYear>,
    assignments: HashMap<Uuid, SubjectAssignment>,

    // Connection health
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let healthy = data.is_healthy;
        *data = LocalData {
            is_healthy: healthy,
            ..Default::default()
        };
    }

    /// Number of classrooms stored.
    pub fn classroom_count(&self) -> usize {
        self.data.read().classrooms.len()
    }

    /// Number of sessions stored, active or not.
    pub fn session_count(&self) -> usize {
        self.data.read().sessions.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, data: &LocalData) -> RepositoryResult<()> {
        if !data.is_healthy {
            return Err(RepositoryError::connection("Repository is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Internal lookup helpers ====================

impl LocalData {
    fn classroom(&self, id: Uuid) -> RepositoryResult<&Classroom> {
        self.classrooms.get(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Classroom {} not found", id),
                ErrorContext::default().with_entity("classroom").with_entity_id(id),
            )
        })
    }

    fn time_slot(&self, id: Uuid) -> RepositoryResult<&TimeSlot> {
        self.time_slots.get(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Time slot {} not found", id),
                ErrorContext::default().with_entity("time_slot").with_entity_id(id),
            )
        })
    }

    fn session(&self, id: Uuid) -> RepositoryResult<&ScheduleSession> {
        self.sessions.get(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Schedule session {} not found", id),
                ErrorContext::default().with_entity("session").with_entity_id(id),
            )
        })
    }

    fn level(&self, id: Uuid) -> RepositoryResult<&EducationalLevel> {
        self.levels.get(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Educational level {} not found", id),
                ErrorContext::default()
                    .with_entity("educational_level")
                    .with_entity_id(id),
            )
        })
    }

    fn academic_year(&self, id: Uuid) -> RepositoryResult<&AcademicYear> {
        self.academic_years.get(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Academic year {} not found", id),
                ErrorContext::default()
                    .with_entity("academic_year")
                    .with_entity_id(id),
            )
        })
    }

    fn assignment(&self, id: Uuid) -> RepositoryResult<&SubjectAssignment> {
        self.assignments.get(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Subject assignment {} not found", id),
                ErrorContext::default()
                    .with_entity("subject_assignment")
                    .with_entity_id(id),
            )
        })
    }

    /// Slot order used for session listings. Active sessions can only
    /// reference existing slots (delete_time_slot guards that), so the
    /// fallback never shows up in listed output.
    fn slot_order(&self, slot_id: Uuid) -> i32 {
        self.time_slots.get(&slot_id).map(|s| s.order).unwrap_or(i32::MAX)
    }

    /// Sessions paired with their subject assignments, the shape the
    /// conflict predicate consumes.
    fn session_pairs(&self) -> Vec<(&ScheduleSession, &SubjectAssignment)> {
        self.sessions
            .values()
            .filter_map(|s| self.assignments.get(&s.subject_assignment_id).map(|a| (s, a)))
            .collect()
    }

    /// Resolve a session tuple's references, returning the assignment's
    /// teacher and class-group. Any miss is a NotFound, including an
    /// assignment that lacks either participant: without them the session
    /// cannot be safely conflict-checked.
    fn resolve_session_refs(
        &self,
        assignment_id: Uuid,
        classroom_id: Uuid,
        time_slot_id: Uuid,
        academic_year_id: Uuid,
    ) -> RepositoryResult<(Uuid, Uuid)> {
        let assignment = self.assignment(assignment_id)?;
        self.classroom(classroom_id)?;
        self.time_slot(time_slot_id)?;
        self.academic_year(academic_year_id)?;

        let teacher_id = assignment.teacher_id.ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Subject assignment {} has no teacher", assignment_id),
                ErrorContext::default()
                    .with_entity("subject_assignment")
                    .with_entity_id(assignment_id),
            )
        })?;
        let class_group_id = assignment.class_group_id.ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Subject assignment {} has no class group", assignment_id),
                ErrorContext::default()
                    .with_entity("subject_assignment")
                    .with_entity_id(assignment_id),
            )
        })?;

        Ok((teacher_id, class_group_id))
    }

    /// Overlap check for a slot range against the other active slots of a
    /// level. `exclude` removes the slot being updated.
    fn overlapping_slot(
        &self,
        level_id: Uuid,
        start: WallTime,
        end: WallTime,
        exclude: Option<Uuid>,
    ) -> Option<&TimeSlot> {
        self.time_slots.values().find(|other| {
            other.level_id == level_id
                && other.is_active
                && Some(other.id) != exclude
                && ranges_overlap(start, end, other.start_time, other.end_time)
        })
    }

    fn active_sessions_reference_classroom(&self, classroom_id: Uuid) -> bool {
        self.sessions
            .values()
            .any(|s| s.is_active && s.classroom_id == classroom_id)
    }

    fn active_sessions_reference_slot(&self, slot_id: Uuid) -> bool {
        self.sessions
            .values()
            .any(|s| s.is_active && s.time_slot_id == slot_id)
    }
}

fn validate_slot_times(start: WallTime, end: WallTime) -> RepositoryResult<()> {
    if start >= end {
        return Err(RepositoryError::validation(format!(
            "startTime {} must be before endTime {}",
            start, end
        )));
    }
    Ok(())
}

fn validate_date_window(
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> RepositoryResult<()> {
    if start > end {
        return Err(RepositoryError::validation(format!(
            "startDate {} must not be after endDate {}",
            start, end
        )));
    }
    Ok(())
}

// ==================== Classroom registry ====================

#[async_trait]
impl ClassroomRepository for LocalRepository {
    async fn list_classrooms(&self) -> RepositoryResult<Vec<Classroom>> {
        let data = self.data.read();
        let mut rooms: Vec<Classroom> = data.classrooms.values().cloned().collect();
        rooms.sort_by(|a, b| {
            (a.building.as_deref(), a.floor, a.name.as_str())
                .cmp(&(b.building.as_deref(), b.floor, b.name.as_str()))
        });
        Ok(rooms)
    }

    async fn get_classroom(&self, id: Uuid) -> RepositoryResult<Classroom> {
        Ok(self.data.read().classroom(id)?.clone())
    }

    async fn insert_classroom(&self, input: NewClassroom) -> RepositoryResult<Classroom> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        if data.classrooms.values().any(|c| c.code == input.code) {
            return Err(RepositoryError::conflict_with_context(
                format!("Classroom code '{}' already exists", input.code),
                ErrorContext::new("insert_classroom").with_entity("classroom"),
            ));
        }
        if let Some(level_id) = input.preferred_level_id {
            data.level(level_id)?;
        }

        let room = Classroom {
            id: Uuid::new_v4(),
            name: input.name,
            code: input.code,
            capacity: input.capacity,
            kind: input.kind,
            equipment: input.equipment,
            building: input.building,
            floor: input.floor,
            description: input.description,
            is_active: input.is_active,
            preferred_level_id: input.preferred_level_id,
        };
        data.classrooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn update_classroom(
        &self,
        id: Uuid,
        patch: ClassroomPatch,
    ) -> RepositoryResult<Classroom> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        let mut room = data.classroom(id)?.clone();

        if let Some(code) = patch.code {
            if code != room.code && data.classrooms.values().any(|c| c.code == code && c.id != id)
            {
                return Err(RepositoryError::conflict_with_context(
                    format!("Classroom code '{}' already exists", code),
                    ErrorContext::new("update_classroom")
                        .with_entity("classroom")
                        .with_entity_id(id),
                ));
            }
            room.code = code;
        }
        if let Some(level_id) = patch.preferred_level_id {
            data.level(level_id)?;
            room.preferred_level_id = Some(level_id);
        }
        if let Some(name) = patch.name {
            room.name = name;
        }
        if let Some(capacity) = patch.capacity {
            room.capacity = capacity;
        }
        if let Some(kind) = patch.kind {
            room.kind = kind;
        }
        if let Some(equipment) = patch.equipment {
            room.equipment = equipment;
        }
        if let Some(building) = patch.building {
            room.building = Some(building);
        }
        if let Some(floor) = patch.floor {
            room.floor = Some(floor);
        }
        if let Some(description) = patch.description {
            room.description = Some(description);
        }
        if let Some(is_active) = patch.is_active {
            room.is_active = is_active;
        }

        data.classrooms.insert(id, room.clone());
        Ok(room)
    }

    async fn delete_classroom(&self, id: Uuid) -> RepositoryResult<()> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        data.classroom(id)?;
        if data.active_sessions_reference_classroom(id) {
            return Err(RepositoryError::validation_with_context(
                "Classroom is referenced by active schedule sessions",
                ErrorContext::new("delete_classroom")
                    .with_entity("classroom")
                    .with_entity_id(id),
            ));
        }
        data.classrooms.remove(&id);
        Ok(())
    }
}

// ==================== Time-slot registry ====================

#[async_trait]
impl TimeSlotRepository for LocalRepository {
    async fn list_time_slots(&self) -> RepositoryResult<Vec<TimeSlot>> {
        let data = self.data.read();
        let mut slots: Vec<TimeSlot> = data.time_slots.values().cloned().collect();
        slots.sort_by(|a, b| {
            let level_a = data.levels.get(&a.level_id).map(|l| l.name.as_str()).unwrap_or("");
            let level_b = data.levels.get(&b.level_id).map(|l| l.name.as_str()).unwrap_or("");
            (level_a, a.order).cmp(&(level_b, b.order))
        });
        Ok(slots)
    }

    async fn list_time_slots_by_level(&self, level_id: Uuid) -> RepositoryResult<Vec<TimeSlot>> {
        let data = self.data.read();
        data.level(level_id)?;
        let mut slots: Vec<TimeSlot> = data
            .time_slots
            .values()
            .filter(|s| s.level_id == level_id)
            .cloned()
            .collect();
        slots.sort_by_key(|s| s.order);
        Ok(slots)
    }

    async fn get_time_slot(&self, id: Uuid) -> RepositoryResult<TimeSlot> {
        Ok(self.data.read().time_slot(id)?.clone())
    }

    async fn insert_time_slot(&self, input: NewTimeSlot) -> RepositoryResult<TimeSlot> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        data.level(input.level_id)?;
        validate_slot_times(input.start_time, input.end_time)?;

        if let Some(other) =
            data.overlapping_slot(input.level_id, input.start_time, input.end_time, None)
        {
            return Err(RepositoryError::conflict_with_context(
                format!(
                    "Time slot overlaps active slot '{}' ({}-{})",
                    other.name, other.start_time, other.end_time
                ),
                ErrorContext::new("insert_time_slot").with_entity("time_slot"),
            ));
        }

        let slot = TimeSlot {
            id: Uuid::new_v4(),
            name: input.name,
            start_time: input.start_time,
            end_time: input.end_time,
            order: input.order,
            is_break: input.is_break,
            is_active: input.is_active,
            level_id: input.level_id,
        };
        data.time_slots.insert(slot.id, slot.clone());
        Ok(slot)
    }

    async fn update_time_slot(
        &self,
        id: Uuid,
        patch: TimeSlotPatch,
    ) -> RepositoryResult<TimeSlot> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        let mut slot = data.time_slot(id)?.clone();

        if let Some(level_id) = patch.level_id {
            data.level(level_id)?;
            slot.level_id = level_id;
        }
        if let Some(name) = patch.name {
            slot.name = name;
        }
        if let Some(start_time) = patch.start_time {
            slot.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            slot.end_time = end_time;
        }
        if let Some(order) = patch.order {
            slot.order = order;
        }
        if let Some(is_break) = patch.is_break {
            slot.is_break = is_break;
        }
        if let Some(is_active) = patch.is_active {
            slot.is_active = is_active;
        }

        validate_slot_times(slot.start_time, slot.end_time)?;

        // The overlap invariant only constrains active slots, so a slot
        // being deactivated is free to keep any range.
        if slot.is_active {
            if let Some(other) =
                data.overlapping_slot(slot.level_id, slot.start_time, slot.end_time, Some(id))
            {
                return Err(RepositoryError::conflict_with_context(
                    format!(
                        "Time slot overlaps active slot '{}' ({}-{})",
                        other.name, other.start_time, other.end_time
                    ),
                    ErrorContext::new("update_time_slot")
                        .with_entity("time_slot")
                        .with_entity_id(id),
                ));
            }
        }

        data.time_slots.insert(id, slot.clone());
        Ok(slot)
    }

    async fn delete_time_slot(&self, id: Uuid) -> RepositoryResult<()> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        data.time_slot(id)?;
        if data.active_sessions_reference_slot(id) {
            return Err(RepositoryError::validation_with_context(
                "Time slot is referenced by active schedule sessions",
                ErrorContext::new("delete_time_slot")
                    .with_entity("time_slot")
                    .with_entity_id(id),
            ));
        }
        data.time_slots.remove(&id);
        Ok(())
    }
}

// ==================== Schedule sessions ====================

#[async_trait]
impl SessionRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_sessions(&self) -> RepositoryResult<Vec<ScheduleSession>> {
        let data = self.data.read();
        let mut sessions: Vec<ScheduleSession> =
            data.sessions.values().filter(|s| s.is_active).cloned().collect();
        sessions.sort_by_key(|s| (s.day_of_week, data.slot_order(s.time_slot_id)));
        Ok(sessions)
    }

    async fn list_sessions_by_teacher(
        &self,
        teacher_id: Uuid,
    ) -> RepositoryResult<Vec<ScheduleSession>> {
        let data = self.data.read();
        let mut sessions: Vec<ScheduleSession> = data
            .sessions
            .values()
            .filter(|s| {
                s.is_active
                    && data
                        .assignments
                        .get(&s.subject_assignment_id)
                        .is_some_and(|a| a.teacher_id == Some(teacher_id))
            })
            .cloned()
            .collect();
        sessions.sort_by_key(|s| (s.day_of_week, data.slot_order(s.time_slot_id)));
        Ok(sessions)
    }

    async fn list_sessions_by_class_group(
        &self,
        class_group_id: Uuid,
    ) -> RepositoryResult<Vec<ScheduleSession>> {
        let data = self.data.read();
        let mut sessions: Vec<ScheduleSession> = data
            .sessions
            .values()
            .filter(|s| {
                s.is_active
                    && data
                        .assignments
                        .get(&s.subject_assignment_id)
                        .is_some_and(|a| a.class_group_id == Some(class_group_id))
            })
            .cloned()
            .collect();
        sessions.sort_by_key(|s| (s.day_of_week, data.slot_order(s.time_slot_id)));
        Ok(sessions)
    }

    async fn list_sessions_by_classroom(
        &self,
        classroom_id: Uuid,
    ) -> RepositoryResult<Vec<ScheduleSession>> {
        let data = self.data.read();
        let mut sessions: Vec<ScheduleSession> = data
            .sessions
            .values()
            .filter(|s| s.is_active && s.classroom_id == classroom_id)
            .cloned()
            .collect();
        sessions.sort_by_key(|s| (s.day_of_week, data.slot_order(s.time_slot_id)));
        Ok(sessions)
    }

    async fn get_session(&self, id: Uuid) -> RepositoryResult<ScheduleSession> {
        Ok(self.data.read().session(id)?.clone())
    }

    async fn insert_session(&self, input: NewSession) -> RepositoryResult<ScheduleSession> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        let (teacher_id, class_group_id) = data.resolve_session_refs(
            input.subject_assignment_id,
            input.classroom_id,
            input.time_slot_id,
            input.academic_year_id,
        )?;
        validate_date_window(input.start_date, input.end_date)?;

        let key = SessionKey {
            time_slot_id: input.time_slot_id,
            day_of_week: input.day_of_week,
            academic_year_id: input.academic_year_id,
        };
        if let Some(conflict) = find_conflict(
            &key,
            input.classroom_id,
            teacher_id,
            class_group_id,
            &data.session_pairs(),
            None,
        ) {
            return Err(RepositoryError::conflict_with_context(
                conflict.message(),
                ErrorContext::new("insert_session")
                    .with_entity("session")
                    .with_details(format!("blocking session {}", conflict.blocking_session_id)),
            ));
        }

        let session = ScheduleSession {
            id: Uuid::new_v4(),
            subject_assignment_id: input.subject_assignment_id,
            classroom_id: input.classroom_id,
            time_slot_id: input.time_slot_id,
            day_of_week: input.day_of_week,
            academic_year_id: input.academic_year_id,
            start_date: input.start_date,
            end_date: input.end_date,
            is_active: input.is_active,
            notes: input.notes,
        };
        data.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn update_session(
        &self,
        id: Uuid,
        patch: SessionPatch,
    ) -> RepositoryResult<ScheduleSession> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        // Merge the patch over the current row, then validate the merged
        // tuple exactly like a create, with this session excluded from the
        // conflict queries. The stored row is only replaced on success.
        let mut session = data.session(id)?.clone();

        if let Some(v) = patch.subject_assignment_id {
            session.subject_assignment_id = v;
        }
        if let Some(v) = patch.classroom_id {
            session.classroom_id = v;
        }
        if let Some(v) = patch.time_slot_id {
            session.time_slot_id = v;
        }
        if let Some(v) = patch.day_of_week {
            session.day_of_week = v;
        }
        if let Some(v) = patch.academic_year_id {
            session.academic_year_id = v;
        }
        if let Some(v) = patch.start_date {
            session.start_date = v;
        }
        if let Some(v) = patch.end_date {
            session.end_date = v;
        }
        if let Some(v) = patch.is_active {
            session.is_active = v;
        }
        if let Some(v) = patch.notes {
            session.notes = Some(v);
        }

        let (teacher_id, class_group_id) = data.resolve_session_refs(
            session.subject_assignment_id,
            session.classroom_id,
            session.time_slot_id,
            session.academic_year_id,
        )?;
        validate_date_window(session.start_date, session.end_date)?;

        let key = SessionKey {
            time_slot_id: session.time_slot_id,
            day_of_week: session.day_of_week,
            academic_year_id: session.academic_year_id,
        };
        if let Some(conflict) = find_conflict(
            &key,
            session.classroom_id,
            teacher_id,
            class_group_id,
            &data.session_pairs(),
            Some(id),
        ) {
            return Err(RepositoryError::conflict_with_context(
                conflict.message(),
                ErrorContext::new("update_session")
                    .with_entity("session")
                    .with_entity_id(id)
                    .with_details(format!("blocking session {}", conflict.blocking_session_id)),
            ));
        }

        data.sessions.insert(id, session.clone());
        Ok(session)
    }

    async fn delete_session(&self, id: Uuid) -> RepositoryResult<()> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        data.session(id)?;
        data.sessions.remove(&id);
        Ok(())
    }
}

// ==================== Reference data ====================

#[async_trait]
impl ReferenceRepository for LocalRepository {
    async fn list_educational_levels(&self) -> RepositoryResult<Vec<EducationalLevel>> {
        let data = self.data.read();
        let mut levels: Vec<EducationalLevel> = data.levels.values().cloned().collect();
        levels.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(levels)
    }

    async fn get_educational_level(&self, id: Uuid) -> RepositoryResult<EducationalLevel> {
        Ok(self.data.read().level(id)?.clone())
    }

    async fn insert_educational_level(
        &self,
        input: NewEducationalLevel,
    ) -> RepositoryResult<EducationalLevel> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        if data.levels.values().any(|l| l.code == input.code) {
            return Err(RepositoryError::conflict_with_context(
                format!("Educational level code '{}' already exists", input.code),
                ErrorContext::new("insert_educational_level").with_entity("educational_level"),
            ));
        }

        let level = EducationalLevel {
            id: Uuid::new_v4(),
            name: input.name,
            code: input.code,
        };
        data.levels.insert(level.id, level.clone());
        Ok(level)
    }

    async fn list_academic_years(&self) -> RepositoryResult<Vec<AcademicYear>> {
        let data = self.data.read();
        let mut years: Vec<AcademicYear> = data.academic_years.values().cloned().collect();
        years.sort_by_key(|y| y.start_date);
        Ok(years)
    }

    async fn get_academic_year(&self, id: Uuid) -> RepositoryResult<AcademicYear> {
        Ok(self.data.read().academic_year(id)?.clone())
    }

    async fn insert_academic_year(
        &self,
        input: NewAcademicYear,
    ) -> RepositoryResult<AcademicYear> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        validate_date_window(input.start_date, input.end_date)?;

        let year = AcademicYear {
            id: Uuid::new_v4(),
            name: input.name,
            start_date: input.start_date,
            end_date: input.end_date,
            is_current: input.is_current,
        };
        data.academic_years.insert(year.id, year.clone());
        Ok(year)
    }

    async fn list_subject_assignments(&self) -> RepositoryResult<Vec<SubjectAssignment>> {
        let data = self.data.read();
        let mut assignments: Vec<SubjectAssignment> =
            data.assignments.values().cloned().collect();
        assignments.sort_by_key(|a| a.id);
        Ok(assignments)
    }

    async fn get_subject_assignment(&self, id: Uuid) -> RepositoryResult<SubjectAssignment> {
        Ok(self.data.read().assignment(id)?.clone())
    }

    async fn insert_subject_assignment(
        &self,
        input: NewSubjectAssignment,
    ) -> RepositoryResult<SubjectAssignment> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        data.academic_year(input.academic_year_id)?;
        if input.weekly_hours <= 0 {
            return Err(RepositoryError::validation(format!(
                "weeklyHours must be positive, got {}",
                input.weekly_hours
            )));
        }

        let assignment = SubjectAssignment {
            id: Uuid::new_v4(),
            teacher_id: input.teacher_id,
            subject_id: input.subject_id,
            class_group_id: input.class_group_id,
            academic_year_id: input.academic_year_id,
            weekly_hours: input.weekly_hours,
        };
        data.assignments.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }
}
