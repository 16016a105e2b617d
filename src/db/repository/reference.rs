//! Reference-data repository trait: educational levels, academic years
//! and subject assignments.

use async_trait::async_trait;
use uuid::Uuid;

use super::error::RepositoryResult;
use crate::models::{
    AcademicYear, EducationalLevel, NewAcademicYear, NewEducationalLevel, NewSubjectAssignment,
    SubjectAssignment,
};

/// Repository trait for the read-mostly reference entities the scheduler
/// resolves against.
#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    // ==================== Educational Levels ====================

    /// List all levels, by name.
    async fn list_educational_levels(&self) -> RepositoryResult<Vec<EducationalLevel>>;

    /// Retrieve a level by id, `NotFound` if absent.
    async fn get_educational_level(&self, id: Uuid) -> RepositoryResult<EducationalLevel>;

    /// Insert a level; `Conflict` if the code is taken.
    async fn insert_educational_level(
        &self,
        input: NewEducationalLevel,
    ) -> RepositoryResult<EducationalLevel>;

    // ==================== Academic Years ====================

    /// List all academic years, by start date.
    async fn list_academic_years(&self) -> RepositoryResult<Vec<AcademicYear>>;

    /// Retrieve an academic year by id, `NotFound` if absent.
    async fn get_academic_year(&self, id: Uuid) -> RepositoryResult<AcademicYear>;

    /// Insert an academic year; `ValidationError` on an inverted window.
    async fn insert_academic_year(&self, input: NewAcademicYear)
        -> RepositoryResult<AcademicYear>;

    // ==================== Subject Assignments ====================

    /// List all subject assignments.
    async fn list_subject_assignments(&self) -> RepositoryResult<Vec<SubjectAssignment>>;

    /// Retrieve a subject assignment by id, `NotFound` if absent.
    async fn get_subject_assignment(&self, id: Uuid) -> RepositoryResult<SubjectAssignment>;

    /// Insert a subject assignment.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` if the academic year is unknown
    /// * `Err(RepositoryError::ValidationError)` if the weekly-hour quota
    ///   is not positive
    async fn insert_subject_assignment(
        &self,
        input: NewSubjectAssignment,
    ) -> RepositoryResult<SubjectAssignment>;
}
