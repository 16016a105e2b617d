use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time::WallTime;

/// A named, ordered interval of the school day, scoped to one educational
/// level (e.g. "1st period, 08:00-09:00").
///
/// Invariants enforced at write time: `start_time < end_time`, and no two
/// active slots of the same level overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: Uuid,
    pub name: String,
    pub start_time: WallTime,
    pub end_time: WallTime,
    /// Position within the day, used for sorting session listings.
    pub order: i32,
    /// Non-teaching slot (recess, lunch).
    pub is_break: bool,
    pub is_active: bool,
    pub level_id: Uuid,
}

/// Input for creating a time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeSlot {
    pub name: String,
    pub start_time: WallTime,
    pub end_time: WallTime,
    pub order: i32,
    #[serde(default)]
    pub is_break: bool,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
    pub level_id: Uuid,
}

/// Merge-patch input for updating a time slot. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_time: Option<WallTime>,
    #[serde(default)]
    pub end_time: Option<WallTime>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub is_break: Option<bool>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub level_id: Option<Uuid>,
}
