use crate::core::assignment;
use crate::core::inventory::{default_inventory, RoomInventory};
use crate::domain::model::{CleaningRecord, NewCleaningRecord};
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use chrono::Utc;
use uuid::Uuid;

/// The record-store gateway: computes rosters through the assignment
/// engine and persists them through whatever `RecordStore` it is given.
pub struct CleaningService<S> {
    store: S,
    inventory: RoomInventory,
}

impl<S: RecordStore> CleaningService<S> {
    pub fn new(store: S, inventory: RoomInventory) -> Self {
        Self { store, inventory }
    }

    pub fn with_default_inventory(store: S) -> Self {
        Self::new(store, default_inventory().clone())
    }

    pub fn inventory(&self) -> &RoomInventory {
        &self.inventory
    }

    /// Computes a fresh roster and stores it. The registration timestamp is
    /// stamped here; the identifier comes from the store.
    pub async fn create(
        &self,
        maids: Vec<String>,
        excluded_rooms: &str,
    ) -> Result<CleaningRecord> {
        let (rooms, assignments) =
            assignment::compute_assignment(&self.inventory, &maids, excluded_rooms)?;
        let draft = NewCleaningRecord {
            registered_at: Utc::now(),
            maids,
            rooms_to_clean: rooms,
            assignments,
        };
        let record = self.store.insert(draft).await?;
        tracing::info!(
            "Created record {} ({} rooms across {} maids)",
            record.id,
            record.rooms_to_clean.len(),
            record.maids.len()
        );
        Ok(record)
    }

    /// Every stored record, in the store's default order.
    pub async fn all(&self) -> Result<Vec<CleaningRecord>> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<CleaningRecord>> {
        self.store.find_by_id(id).await
    }

    /// Recomputes the roster from new inputs and overwrites the stored
    /// record wholesale, keeping its identifier and original registration
    /// timestamp. `Ok(None)` when the identifier is unknown; a computation
    /// failure leaves the stored record untouched.
    pub async fn update(
        &self,
        id: Uuid,
        maids: Vec<String>,
        excluded_rooms: &str,
    ) -> Result<Option<CleaningRecord>> {
        let Some(existing) = self.store.find_by_id(id).await? else {
            tracing::debug!("Update requested for unknown record {}", id);
            return Ok(None);
        };
        let (rooms, assignments) =
            assignment::compute_assignment(&self.inventory, &maids, excluded_rooms)?;
        let updated = CleaningRecord {
            id: existing.id,
            registered_at: existing.registered_at,
            maids,
            rooms_to_clean: rooms,
            assignments,
        };
        let replaced = self.store.replace(updated).await?;
        if replaced.is_some() {
            tracing::info!("Updated record {}", id);
        }
        Ok(replaced)
    }

    /// Idempotent: deleting an identifier that is already gone succeeds.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete(id).await?;
        tracing::info!("Deleted record {} (if it existed)", id);
        Ok(())
    }
}
