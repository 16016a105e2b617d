//! Scheduling domain logic: occupancy conflict detection and interval math.

pub mod conflicts;

pub use conflicts::{find_conflict, ranges_overlap, ConflictKind, ScheduleConflict, SessionKey};
