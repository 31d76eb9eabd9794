pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{json_file::JsonFileStore, memory::InMemoryStore};
pub use crate::config::{cli::Cli, inventory_file::InventoryFile};
pub use crate::core::{assignment, inventory::RoomInventory, service::CleaningService};
pub use crate::domain::model::{CleaningRecord, NewCleaningRecord};
pub use crate::domain::ports::RecordStore;
pub use crate::utils::error::{Result, RotaError};
