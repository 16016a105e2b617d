//! Classroom registry repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use super::error::RepositoryResult;
use crate::models::{Classroom, ClassroomPatch, NewClassroom};

/// Repository trait for classroom CRUD operations.
///
/// Implementations enforce the registry invariants atomically: classroom
/// codes are unique, a referenced preferred level must exist, and a room
/// with active sessions cannot be deleted.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ClassroomRepository: Send + Sync {
    /// List all classrooms, sorted by (building, floor, name).
    async fn list_classrooms(&self) -> RepositoryResult<Vec<Classroom>>;

    /// Retrieve a classroom by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` if the classroom doesn't exist.
    async fn get_classroom(&self, id: Uuid) -> RepositoryResult<Classroom>;

    /// Insert a new classroom.
    ///
    /// # Returns
    /// * `Ok(Classroom)` - the stored row with its assigned id
    /// * `Err(RepositoryError::Conflict)` if the code is already taken
    /// * `Err(RepositoryError::NotFound)` if `preferred_level_id` is unknown
    async fn insert_classroom(&self, input: NewClassroom) -> RepositoryResult<Classroom>;

    /// Merge a patch into an existing classroom.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` if the classroom or a newly
    ///   referenced preferred level doesn't exist
    /// * `Err(RepositoryError::Conflict)` if the new code belongs to a
    ///   different row
    async fn update_classroom(
        &self,
        id: Uuid,
        patch: ClassroomPatch,
    ) -> RepositoryResult<Classroom>;

    /// Hard-delete a classroom.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` if any active session
    ///   still references the room
    /// * `Err(RepositoryError::NotFound)` if it doesn't exist
    async fn delete_classroom(&self, id: Uuid) -> RepositoryResult<()>;
}
