use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored cleaning roster: which maids work, which rooms need cleaning,
/// and who takes which rooms.
///
/// `id` and `registered_at` are fixed at creation; an update replaces the
/// other three fields wholesale, never merging per-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningRecord {
    pub id: Uuid,
    pub registered_at: DateTime<Utc>,
    /// Maid names in input order; this order drives the round-robin.
    pub maids: Vec<String>,
    /// Inventory minus exclusions, ascending.
    pub rooms_to_clean: Vec<u32>,
    /// One `"<maid>: <room>, <room>, ..."` line per maid, same order as `maids`.
    pub assignments: Vec<String>,
}

/// A record before the store has assigned its identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCleaningRecord {
    pub registered_at: DateTime<Utc>,
    pub maids: Vec<String>,
    pub rooms_to_clean: Vec<u32>,
    pub assignments: Vec<String>,
}

impl NewCleaningRecord {
    pub fn into_record(self, id: Uuid) -> CleaningRecord {
        CleaningRecord {
            id,
            registered_at: self.registered_at,
            maids: self.maids,
            rooms_to_clean: self.rooms_to_clean,
            assignments: self.assignments,
        }
    }
}
