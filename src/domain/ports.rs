use crate::domain::model::{CleaningRecord, NewCleaningRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Keyed collection of cleaning records. Any durable or in-memory store
/// qualifies; the bundled adapters keep insertion order for `find_all`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Stores the draft under a freshly generated identifier and returns
    /// the complete record.
    async fn insert(&self, draft: NewCleaningRecord) -> Result<CleaningRecord>;

    async fn find_all(&self) -> Result<Vec<CleaningRecord>>;

    /// `Ok(None)` when no record carries the identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CleaningRecord>>;

    /// Overwrites the record with the same identifier. `Ok(None)` when the
    /// identifier is absent; nothing is inserted in that case.
    async fn replace(&self, record: CleaningRecord) -> Result<Option<CleaningRecord>>;

    /// Removes the record if present. Deleting an absent identifier is not
    /// an error.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
