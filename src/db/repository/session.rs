//! Schedule-session repository trait, the scheduling core.

use async_trait::async_trait;
use uuid::Uuid;

use super::error::RepositoryResult;
use crate::models::{NewSession, ScheduleSession, SessionPatch};

/// Repository trait for schedule sessions and their conflict checks.
///
/// Creates and updates run the full occupancy check (classroom, teacher,
/// class-group, in that order, short-circuiting) against all other active
/// sessions of the same (time slot, day, academic year) scope, and commit
/// only if no conflict is found. Check and write happen under the same
/// guard, so two concurrent requests can never both book the same resource.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the backing store is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Listings ====================

    /// All active sessions, ordered by day of week then slot order.
    async fn list_sessions(&self) -> RepositoryResult<Vec<ScheduleSession>>;

    /// Active sessions whose subject assignment names this teacher.
    async fn list_sessions_by_teacher(
        &self,
        teacher_id: Uuid,
    ) -> RepositoryResult<Vec<ScheduleSession>>;

    /// Active sessions whose subject assignment names this class-group.
    async fn list_sessions_by_class_group(
        &self,
        class_group_id: Uuid,
    ) -> RepositoryResult<Vec<ScheduleSession>>;

    /// Active sessions held in this classroom.
    async fn list_sessions_by_classroom(
        &self,
        classroom_id: Uuid,
    ) -> RepositoryResult<Vec<ScheduleSession>>;

    /// Retrieve a session by id, `NotFound` if absent.
    async fn get_session(&self, id: Uuid) -> RepositoryResult<ScheduleSession>;

    // ==================== Writes ====================

    /// Create a session after resolving its references and passing the
    /// conflict check.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` if the subject assignment,
    ///   classroom, time slot or academic year is unknown, or the
    ///   assignment lacks a teacher or class-group
    /// * `Err(RepositoryError::Conflict)` on a classroom/teacher/group
    ///   double-booking
    /// * `Err(RepositoryError::ValidationError)` if the date window is
    ///   inverted
    async fn insert_session(&self, input: NewSession) -> RepositoryResult<ScheduleSession>;

    /// Merge a patch into an existing session and re-run the conflict
    /// check with the session itself excluded. On conflict the stored row
    /// is left untouched.
    async fn update_session(
        &self,
        id: Uuid,
        patch: SessionPatch,
    ) -> RepositoryResult<ScheduleSession>;

    /// Unconditional hard delete, `NotFound` if absent.
    async fn delete_session(&self, id: Uuid) -> RepositoryResult<()>;
}
