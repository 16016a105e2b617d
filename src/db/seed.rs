//! Reference-data seeding from a TOML file.
//!
//! A fresh in-memory instance has no educational levels, academic years or
//! subject assignments, so the scheduling endpoints would 404 on every
//! reference. The server binary can point `SEED_FILE` at a TOML document
//! to load them at startup.
//!
//! Academic years are referenced by name from assignments since ids are
//! assigned at insert time. Teacher / subject / class-group ids are the
//! external modules' UUIDs, written verbatim.
//!
//! ```toml
//! [[educational_levels]]
//! name = "Primary"
//! code = "PRI"
//!
//! [[academic_years]]
//! name = "2025-2026"
//! start_date = "2025-09-01"
//! end_date = "2026-06-30"
//! is_current = true
//!
//! [[subject_assignments]]
//! teacher_id = "7f8d7a9e-0c3b-4b1e-9a67-2f4de1a05c55"
//! subject_id = "b3a1c9d2-5e4f-4a6b-8c7d-9e0f1a2b3c4d"
//! class_group_id = "c4d5e6f7-8a9b-4c0d-a1e2-f3a4b5c6d7e8"
//! academic_year = "2025-2026"
//! weekly_hours = 4
//! ```

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::{NewAcademicYear, NewEducationalLevel, NewSubjectAssignment};

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    educational_levels: Vec<SeedLevel>,
    #[serde(default)]
    academic_years: Vec<SeedYear>,
    #[serde(default)]
    subject_assignments: Vec<SeedAssignment>,
}

#[derive(Debug, Deserialize)]
struct SeedLevel {
    name: String,
    code: String,
}

#[derive(Debug, Deserialize)]
struct SeedYear {
    name: String,
    start_date: String,
    end_date: String,
    #[serde(default)]
    is_current: bool,
}

#[derive(Debug, Deserialize)]
struct SeedAssignment {
    #[serde(default)]
    teacher_id: Option<Uuid>,
    subject_id: Uuid,
    #[serde(default)]
    class_group_id: Option<Uuid>,
    /// Name of an academic year defined in the same file.
    academic_year: String,
    weekly_hours: i32,
}

/// Counts of the rows a seed load inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub levels: usize,
    pub academic_years: usize,
    pub subject_assignments: usize,
}

fn parse_date(value: &str, field: &str) -> RepositoryResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        RepositoryError::configuration(format!(
            "Seed file: invalid date '{}' in {}, expected YYYY-MM-DD",
            value, field
        ))
    })
}

/// Load reference data from a TOML seed file into the repository.
pub async fn load_seed_file(
    repo: &dyn FullRepository,
    path: &Path,
) -> RepositoryResult<SeedSummary> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        RepositoryError::configuration(format!("Cannot read seed file {}: {}", path.display(), e))
    })?;
    let seed: SeedFile = toml::from_str(&raw).map_err(|e| {
        RepositoryError::configuration(format!("Invalid seed file {}: {}", path.display(), e))
    })?;

    let mut summary = SeedSummary::default();

    for level in seed.educational_levels {
        repo.insert_educational_level(NewEducationalLevel {
            name: level.name,
            code: level.code,
        })
        .await?;
        summary.levels += 1;
    }

    let mut year_ids: HashMap<String, Uuid> = HashMap::new();
    for year in seed.academic_years {
        let start_date = parse_date(&year.start_date, "academic_years.start_date")?;
        let end_date = parse_date(&year.end_date, "academic_years.end_date")?;
        let stored = repo
            .insert_academic_year(NewAcademicYear {
                name: year.name.clone(),
                start_date,
                end_date,
                is_current: year.is_current,
            })
            .await?;
        year_ids.insert(year.name, stored.id);
        summary.academic_years += 1;
    }

    for assignment in seed.subject_assignments {
        let academic_year_id = *year_ids.get(&assignment.academic_year).ok_or_else(|| {
            RepositoryError::configuration(format!(
                "Seed file: subject assignment references unknown academic year '{}'",
                assignment.academic_year
            ))
        })?;
        repo.insert_subject_assignment(NewSubjectAssignment {
            teacher_id: assignment.teacher_id,
            subject_id: assignment.subject_id,
            class_group_id: assignment.class_group_id,
            academic_year_id,
            weekly_hours: assignment.weekly_hours,
        })
        .await?;
        summary.subject_assignments += 1;
    }

    info!(
        levels = summary.levels,
        academic_years = summary.academic_years,
        subject_assignments = summary.subject_assignments,
        "seed data loaded"
    );
    Ok(summary)
}
