//! Reference entities the scheduling core resolves against.
//!
//! These are owned by other modules of the wider platform (enrollment,
//! staffing); the scheduler treats them as read-mostly inputs. Teacher,
//! subject and class-group ids are opaque UUIDs and never dereferenced
//! here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An educational level ("Primary", "Secondary"), the scoping unit for
/// time slots and the optional preference tag on classrooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalLevel {
    pub id: Uuid,
    pub name: String,
    /// Unique short code, e.g. "PRI".
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEducationalLevel {
    pub name: String,
    pub code: String,
}

/// A school year ("2025-2026") bounding session validity windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYear {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAcademicYear {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_current: bool,
}

/// The binding of one teacher to one subject for one class-group within
/// one academic year, carrying a weekly-hour quota.
///
/// `teacher_id` and `class_group_id` may be absent while the assignment is
/// being staffed; a session referencing such an assignment cannot be
/// conflict-checked and is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAssignment {
    pub id: Uuid,
    pub teacher_id: Option<Uuid>,
    pub subject_id: Uuid,
    pub class_group_id: Option<Uuid>,
    pub academic_year_id: Uuid,
    pub weekly_hours: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubjectAssignment {
    #[serde(default)]
    pub teacher_id: Option<Uuid>,
    pub subject_id: Uuid,
    #[serde(default)]
    pub class_group_id: Option<Uuid>,
    pub academic_year_id: Uuid,
    pub weekly_hours: i32,
}
