//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint: it gates the caller role,
//! delegates to the repository and shapes the response. Every invariant
//! (uniqueness, overlap, occupancy conflicts) is enforced inside the
//! repository so the handlers stay declarative.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::auth::AuthUser;
use super::dto::{
    AcademicYearListResponse, ClassroomListResponse, EducationalLevelListResponse,
    HealthResponse, SessionListResponse, SubjectAssignmentListResponse, TimeSlotListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{
    AcademicYear, Classroom, ClassroomPatch, EducationalLevel, NewAcademicYear, NewClassroom,
    NewEducationalLevel, NewSession, NewSubjectAssignment, NewTimeSlot, ScheduleSession,
    SessionPatch, SubjectAssignment, TimeSlot, TimeSlotPatch,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for create handlers (201 + body).
pub type CreatedResult<T> = Result<(StatusCode, Json<T>), AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is reachable. Unauthenticated.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Classroom Registry
// =============================================================================

/// GET /schedules/classrooms
pub async fn list_classrooms(
    State(state): State<AppState>,
    _user: AuthUser,
) -> HandlerResult<ClassroomListResponse> {
    let classrooms = state.repository.list_classrooms().await?;
    let total = classrooms.len();
    Ok(Json(ClassroomListResponse { classrooms, total }))
}

/// GET /schedules/classrooms/{id}
pub async fn get_classroom(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> HandlerResult<Classroom> {
    Ok(Json(state.repository.get_classroom(id).await?))
}

/// POST /schedules/classrooms
pub async fn create_classroom(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<NewClassroom>,
) -> CreatedResult<Classroom> {
    user.require_admin()?;
    let room = state.repository.insert_classroom(input).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// PATCH /schedules/classrooms/{id}
pub async fn update_classroom(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<ClassroomPatch>,
) -> HandlerResult<Classroom> {
    user.require_admin()?;
    Ok(Json(state.repository.update_classroom(id, patch).await?))
}

/// DELETE /schedules/classrooms/{id}
pub async fn delete_classroom(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    user.require_admin()?;
    state.repository.delete_classroom(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Time-Slot Registry
// =============================================================================

/// GET /schedules/time-slots
pub async fn list_time_slots(
    State(state): State<AppState>,
    user: AuthUser,
) -> HandlerResult<TimeSlotListResponse> {
    user.require_admin()?;
    let time_slots = state.repository.list_time_slots().await?;
    let total = time_slots.len();
    Ok(Json(TimeSlotListResponse { time_slots, total }))
}

/// GET /schedules/time-slots/by-educational-level/{id}
pub async fn list_time_slots_by_level(
    State(state): State<AppState>,
    user: AuthUser,
    Path(level_id): Path<Uuid>,
) -> HandlerResult<TimeSlotListResponse> {
    user.require_admin()?;
    let time_slots = state.repository.list_time_slots_by_level(level_id).await?;
    let total = time_slots.len();
    Ok(Json(TimeSlotListResponse { time_slots, total }))
}

/// GET /schedules/time-slots/{id}
pub async fn get_time_slot(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> HandlerResult<TimeSlot> {
    user.require_admin()?;
    Ok(Json(state.repository.get_time_slot(id).await?))
}

/// POST /schedules/time-slots
pub async fn create_time_slot(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<NewTimeSlot>,
) -> CreatedResult<TimeSlot> {
    user.require_admin()?;
    let slot = state.repository.insert_time_slot(input).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

/// PATCH /schedules/time-slots/{id}
pub async fn update_time_slot(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<TimeSlotPatch>,
) -> HandlerResult<TimeSlot> {
    user.require_admin()?;
    Ok(Json(state.repository.update_time_slot(id, patch).await?))
}

/// DELETE /schedules/time-slots/{id}
pub async fn delete_time_slot(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    user.require_admin()?;
    state.repository.delete_time_slot(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Schedule Sessions
// =============================================================================

/// GET /schedules/sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    _user: AuthUser,
) -> HandlerResult<SessionListResponse> {
    let sessions = state.repository.list_sessions().await?;
    let total = sessions.len();
    Ok(Json(SessionListResponse { sessions, total }))
}

/// GET /schedules/sessions/by-teacher/{teacherId}
pub async fn list_sessions_by_teacher(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(teacher_id): Path<Uuid>,
) -> HandlerResult<SessionListResponse> {
    let sessions = state.repository.list_sessions_by_teacher(teacher_id).await?;
    let total = sessions.len();
    Ok(Json(SessionListResponse { sessions, total }))
}

/// GET /schedules/sessions/by-class-group/{classGroupId}
pub async fn list_sessions_by_class_group(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(class_group_id): Path<Uuid>,
) -> HandlerResult<SessionListResponse> {
    let sessions = state
        .repository
        .list_sessions_by_class_group(class_group_id)
        .await?;
    let total = sessions.len();
    Ok(Json(SessionListResponse { sessions, total }))
}

/// GET /schedules/sessions/by-classroom/{classroomId}
pub async fn list_sessions_by_classroom(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(classroom_id): Path<Uuid>,
) -> HandlerResult<SessionListResponse> {
    let sessions = state
        .repository
        .list_sessions_by_classroom(classroom_id)
        .await?;
    let total = sessions.len();
    Ok(Json(SessionListResponse { sessions, total }))
}

/// POST /schedules/sessions
///
/// Creates a session after the repository resolves all references and the
/// classroom/teacher/class-group occupancy checks pass.
pub async fn create_session(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<NewSession>,
) -> CreatedResult<ScheduleSession> {
    user.require_admin()?;
    let session = state.repository.insert_session(input).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// PATCH /schedules/sessions/{id}
///
/// Merges the patch over the stored session and re-runs the occupancy
/// checks with the session itself excluded; on conflict the stored row is
/// untouched.
pub async fn update_session(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<SessionPatch>,
) -> HandlerResult<ScheduleSession> {
    user.require_admin()?;
    Ok(Json(state.repository.update_session(id, patch).await?))
}

/// DELETE /schedules/sessions/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    user.require_admin()?;
    state.repository.delete_session(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Reference Registry
// =============================================================================

/// GET /reference/educational-levels
pub async fn list_educational_levels(
    State(state): State<AppState>,
    _user: AuthUser,
) -> HandlerResult<EducationalLevelListResponse> {
    let educational_levels = state.repository.list_educational_levels().await?;
    let total = educational_levels.len();
    Ok(Json(EducationalLevelListResponse {
        educational_levels,
        total,
    }))
}

/// GET /reference/educational-levels/{id}
pub async fn get_educational_level(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> HandlerResult<EducationalLevel> {
    Ok(Json(state.repository.get_educational_level(id).await?))
}

/// POST /reference/educational-levels
pub async fn create_educational_level(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<NewEducationalLevel>,
) -> CreatedResult<EducationalLevel> {
    user.require_admin()?;
    let level = state.repository.insert_educational_level(input).await?;
    Ok((StatusCode::CREATED, Json(level)))
}

/// GET /reference/academic-years
pub async fn list_academic_years(
    State(state): State<AppState>,
    _user: AuthUser,
) -> HandlerResult<AcademicYearListResponse> {
    let academic_years = state.repository.list_academic_years().await?;
    let total = academic_years.len();
    Ok(Json(AcademicYearListResponse {
        academic_years,
        total,
    }))
}

/// GET /reference/academic-years/{id}
pub async fn get_academic_year(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> HandlerResult<AcademicYear> {
    Ok(Json(state.repository.get_academic_year(id).await?))
}

/// POST /reference/academic-years
pub async fn create_academic_year(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<NewAcademicYear>,
) -> CreatedResult<AcademicYear> {
    user.require_admin()?;
    let year = state.repository.insert_academic_year(input).await?;
    Ok((StatusCode::CREATED, Json(year)))
}

/// GET /reference/subject-assignments
pub async fn list_subject_assignments(
    State(state): State<AppState>,
    _user: AuthUser,
) -> HandlerResult<SubjectAssignmentListResponse> {
    let subject_assignments = state.repository.list_subject_assignments().await?;
    let total = subject_assignments.len();
    Ok(Json(SubjectAssignmentListResponse {
        subject_assignments,
        total,
    }))
}

/// GET /reference/subject-assignments/{id}
pub async fn get_subject_assignment(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> HandlerResult<SubjectAssignment> {
    Ok(Json(state.repository.get_subject_assignment(id).await?))
}

/// POST /reference/subject-assignments
pub async fn create_subject_assignment(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<NewSubjectAssignment>,
) -> CreatedResult<SubjectAssignment> {
    user.require_admin()?;
    let assignment = state.repository.insert_subject_assignment(input).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}
