//! Time-slot registry repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use super::error::RepositoryResult;
use crate::models::{NewTimeSlot, TimeSlot, TimeSlotPatch};

/// Repository trait for time-slot CRUD operations.
///
/// Implementations enforce atomically: `start_time < end_time`, no two
/// active slots of one educational level overlap, and a slot with active
/// sessions cannot be deleted.
#[async_trait]
pub trait TimeSlotRepository: Send + Sync {
    /// List all time slots, ordered by educational level then slot order.
    async fn list_time_slots(&self) -> RepositoryResult<Vec<TimeSlot>>;

    /// List the slots of one educational level, by slot order.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` if the level is unknown.
    async fn list_time_slots_by_level(&self, level_id: Uuid) -> RepositoryResult<Vec<TimeSlot>>;

    /// Retrieve a time slot by id, `NotFound` if absent.
    async fn get_time_slot(&self, id: Uuid) -> RepositoryResult<TimeSlot>;

    /// Insert a new time slot.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` if start >= end
    /// * `Err(RepositoryError::Conflict)` if an active slot of the same
    ///   level overlaps the proposed range
    /// * `Err(RepositoryError::NotFound)` if the level is unknown
    async fn insert_time_slot(&self, input: NewTimeSlot) -> RepositoryResult<TimeSlot>;

    /// Merge a patch into an existing time slot. The overlap check runs
    /// against the merged values with the slot itself excluded, and only
    /// when the merged slot is active.
    async fn update_time_slot(&self, id: Uuid, patch: TimeSlotPatch)
        -> RepositoryResult<TimeSlot>;

    /// Hard-delete a time slot.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` if any active session
    ///   still references the slot
    /// * `Err(RepositoryError::NotFound)` if it doesn't exist
    async fn delete_time_slot(&self, id: Uuid) -> RepositoryResult<()>;
}
