//! Data Transfer Objects for the HTTP API.
//!
//! The domain types already derive Serialize/Deserialize with the wire
//! naming, so they are re-exported directly; this module adds the list
//! wrappers and the health response.

use serde::{Deserialize, Serialize};

// Re-export domain types used as request/response bodies
pub use crate::models::{
    AcademicYear, Classroom, ClassroomKind, ClassroomPatch, EducationalLevel, NewAcademicYear,
    NewClassroom, NewEducationalLevel, NewSession, NewSubjectAssignment, NewTimeSlot,
    ScheduleSession, SessionPatch, SubjectAssignment, TimeSlot, TimeSlotPatch, WallTime, Weekday,
};

/// Classroom list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomListResponse {
    pub classrooms: Vec<Classroom>,
    pub total: usize,
}

/// Time-slot list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotListResponse {
    pub time_slots: Vec<TimeSlot>,
    pub total: usize,
}

/// Session list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<ScheduleSession>,
    pub total: usize,
}

/// Educational level list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalLevelListResponse {
    pub educational_levels: Vec<EducationalLevel>,
    pub total: usize,
}

/// Academic year list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYearListResponse {
    pub academic_years: Vec<AcademicYear>,
    pub total: usize,
}

/// Subject assignment list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAssignmentListResponse {
    pub subject_assignments: Vec<SubjectAssignment>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub database: String,
}
