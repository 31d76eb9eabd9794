use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Clone, Parser)]
#[command(name = "cleaning-rota")]
#[command(about = "Hotel room-cleaning roster: distributes rooms across maids and keeps the records")]
pub struct Cli {
    #[arg(long, default_value = "./cleaning-records.json")]
    pub store_path: String,

    #[arg(long, help = "TOML file overriding the built-in room inventory")]
    pub inventory: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute a new cleaning roster and store it
    Create {
        #[arg(long, value_delimiter = ',', required = true)]
        maids: Vec<String>,

        #[arg(long, default_value = "", help = "Comma-separated room numbers to skip")]
        excluded_rooms: String,
    },

    /// List every stored record
    List,

    /// Fetch one record by id
    Get { id: Uuid },

    /// Recompute a stored record from new inputs, keeping its id and
    /// registration time
    Update {
        id: Uuid,

        #[arg(long, value_delimiter = ',', required = true)]
        maids: Vec<String>,

        #[arg(long, default_value = "", help = "Comma-separated room numbers to skip")]
        excluded_rooms: String,
    },

    /// Remove a record; removing an unknown id succeeds
    Delete { id: Uuid },
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validate_path("store-path", &self.store_path)?;
        if let Some(path) = &self.inventory {
            validate_path("inventory", path)?;
        }
        match &self.command {
            Command::Create { maids, .. } | Command::Update { maids, .. } => {
                for maid in maids {
                    validate_non_empty_string("maid name", maid)?;
                }
            }
            Command::List | Command::Get { .. } | Command::Delete { .. } => {}
        }
        Ok(())
    }
}
