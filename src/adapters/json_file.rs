use crate::domain::model::{CleaningRecord, NewCleaningRecord};
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed record store: one JSON array per file. Every operation reads
/// the whole file, mutates, and writes it back, which also keeps the file
/// readable by hand.
///
/// A missing file reads as an empty store; the parent directory is created
/// on first write. IO and serde failures surface unchanged.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<CleaningRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn save(&self, records: &[CleaningRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn insert(&self, draft: NewCleaningRecord) -> Result<CleaningRecord> {
        let mut records = self.load()?;
        let record = draft.into_record(Uuid::new_v4());
        records.push(record.clone());
        self.save(&records)?;
        tracing::debug!("Stored record {} in {}", record.id, self.path.display());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<CleaningRecord>> {
        self.load()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CleaningRecord>> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }

    async fn replace(&self, record: CleaningRecord) -> Result<Option<CleaningRecord>> {
        let mut records = self.load()?;
        let Some(slot) = records.iter_mut().find(|r| r.id == record.id) else {
            return Ok(None);
        };
        *slot = record.clone();
        self.save(&records)?;
        Ok(Some(record))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() != before {
            self.save(&records)?;
        }
        Ok(())
    }
}
