use clap::Parser;
use cleaning_rota::config::cli::{Cli, Command};
use cleaning_rota::core::inventory::default_inventory;
use cleaning_rota::utils::{logger, validation::Validate};
use cleaning_rota::{CleaningService, InventoryFile, JsonFileStore, RecordStore, Result};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting cleaning-rota CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let inventory = match &cli.inventory {
        Some(path) => match InventoryFile::from_file(path).and_then(|f| f.build()) {
            Ok(inventory) => {
                tracing::info!("Loaded {} rooms from {}", inventory.len(), path);
                inventory
            }
            Err(e) => {
                tracing::error!("Could not load inventory from {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
        },
        None => default_inventory().clone(),
    };

    let store = JsonFileStore::new(&cli.store_path);
    let service = CleaningService::new(store, inventory);

    if let Err(e) = dispatch(&service, cli.command).await {
        tracing::error!("Operation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn dispatch<S: RecordStore>(service: &CleaningService<S>, command: Command) -> Result<()> {
    match command {
        Command::Create {
            maids,
            excluded_rooms,
        } => {
            let record = service.create(maids, &excluded_rooms).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::List => {
            let records = service.all().await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Get { id } => match service.get(id).await? {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => not_found(id),
        },
        Command::Update {
            id,
            maids,
            excluded_rooms,
        } => match service.update(id, maids, &excluded_rooms).await? {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => not_found(id),
        },
        Command::Delete { id } => {
            service.delete(id).await?;
            println!("Deleted {}", id);
        }
    }
    Ok(())
}

fn not_found(id: uuid::Uuid) -> ! {
    eprintln!("❌ No record with id {}", id);
    std::process::exit(1);
}
