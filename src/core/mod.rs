pub mod assignment;
pub mod inventory;
pub mod service;

pub use crate::domain::model::{CleaningRecord, NewCleaningRecord};
pub use crate::domain::ports::RecordStore;
pub use crate::utils::error::Result;
