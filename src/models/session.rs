use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time::Weekday;

/// One scheduled occurrence of a subject assignment: a (classroom,
/// time slot, day-of-week, academic year) tuple valid over a date range.
///
/// Active sessions count toward conflict detection and default listings;
/// inactive sessions are kept for audit and ignored by both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSession {
    pub id: Uuid,
    pub subject_assignment_id: Uuid,
    pub classroom_id: Uuid,
    pub time_slot_id: Uuid,
    pub day_of_week: Weekday,
    pub academic_year_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub notes: Option<String>,
}

/// Input for creating a schedule session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub subject_assignment_id: Uuid,
    pub classroom_id: Uuid,
    pub time_slot_id: Uuid,
    pub day_of_week: Weekday,
    pub academic_year_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Merge-patch input for updating a session. Absent fields are unchanged;
/// the merged tuple is re-checked for conflicts with the session itself
/// excluded from the queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPatch {
    #[serde(default)]
    pub subject_assignment_id: Option<Uuid>,
    #[serde(default)]
    pub classroom_id: Option<Uuid>,
    #[serde(default)]
    pub time_slot_id: Option<Uuid>,
    #[serde(default)]
    pub day_of_week: Option<Weekday>,
    #[serde(default)]
    pub academic_year_id: Option<Uuid>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
}
