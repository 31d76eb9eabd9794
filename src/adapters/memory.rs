use crate::domain::model::{CleaningRecord, NewCleaningRecord};
use crate::domain::ports::RecordStore;
use crate::utils::error::{Result, RotaError};
use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory record store for tests and embedding. A plain `Vec` behind a
/// `RwLock`: insertion order is the iteration order, and lookups are linear
/// scans over a handful of records.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<CleaningRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> RotaError {
    RotaError::StoreUnavailable {
        message: "record store lock poisoned".to_string(),
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn insert(&self, draft: NewCleaningRecord) -> Result<CleaningRecord> {
        let record = draft.into_record(Uuid::new_v4());
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.push(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<CleaningRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CleaningRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn replace(&self, record: CleaningRecord) -> Result<Option<CleaningRecord>> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.retain(|r| r.id != id);
        Ok(())
    }
}
