pub mod cli;
pub mod inventory_file;

pub use cli::{Cli, Command};
pub use inventory_file::InventoryFile;
