use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Room category used for placement decisions in the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassroomKind {
    Regular,
    Laboratory,
    Computer,
    Gym,
    Music,
    Art,
    Library,
    Auditorium,
}

impl Default for ClassroomKind {
    fn default() -> Self {
        ClassroomKind::Regular
    }
}

/// A named, capacity-bounded room.
///
/// Rooms are soft-disabled via `is_active` and hard-deleted only when no
/// active schedule session references them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: Uuid,
    pub name: String,
    /// Unique short code, e.g. "R-101".
    pub code: String,
    pub capacity: i32,
    #[serde(rename = "type")]
    pub kind: ClassroomKind,
    pub equipment: Vec<String>,
    pub building: Option<String>,
    pub floor: Option<i32>,
    pub description: Option<String>,
    pub is_active: bool,
    /// Educational level this room is preferred for, if any.
    pub preferred_level_id: Option<Uuid>,
}

/// Input for creating a classroom. The id is assigned by the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassroom {
    pub name: String,
    pub code: String,
    pub capacity: i32,
    #[serde(rename = "type", default)]
    pub kind: ClassroomKind,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub preferred_level_id: Option<Uuid>,
}

/// Merge-patch input for updating a classroom. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(rename = "type", default)]
    pub kind: Option<ClassroomKind>,
    #[serde(default)]
    pub equipment: Option<Vec<String>>,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub preferred_level_id: Option<Uuid>,
}
