use crate::core::inventory::RoomInventory;
use crate::utils::error::{Result, RotaError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Room inventory loaded from a TOML file, as an alternative to the
/// built-in hotel layout. Each `[[floors]]` entry is an inclusive range
/// with an optional list of rooms to skip:
///
/// ```toml
/// [[floors]]
/// start = 501
/// end = 516
/// skip = [513]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryFile {
    pub floors: Vec<FloorRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorRange {
    pub start: u32,
    pub end: u32,
    #[serde(default)]
    pub skip: Vec<u32>,
}

impl InventoryFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RotaError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RotaError::Config {
            message: format!("inventory file: {}", e),
        })
    }

    /// Normalizes the ranges into a `RoomInventory`. Reversed ranges and a
    /// resulting empty inventory are configuration errors.
    pub fn build(&self) -> Result<RoomInventory> {
        let mut rooms: Vec<u32> = Vec::new();
        for floor in &self.floors {
            if floor.end < floor.start {
                return Err(RotaError::Config {
                    message: format!("floor range {}-{} is reversed", floor.start, floor.end),
                });
            }
            rooms.extend((floor.start..=floor.end).filter(|room| !floor.skip.contains(room)));
        }
        let inventory = RoomInventory::new(rooms);
        if inventory.is_empty() {
            return Err(RotaError::Config {
                message: "inventory file defines no rooms".to_string(),
            });
        }
        Ok(inventory)
    }
}
