//! Event Dispatcher - Entry Point
//!
//! Loads configuration, initializes logging, wires the built-in handlers
//! and dispatches one domain event described on the command line.
//!
//! | Command | Event |
//! |---------|-------|
//! | `evd product-created --name N --description D --price P` | `ProductCreatedEvent` |
//! | `evd customer-created [--id I] [--name N]` | `CustomerCreatedEvent` |
//! | `evd address-changed --id UUID --name N --address A` | `CustomerAddressChangedEvent` |

use clap::{Parser, Subcommand};
use evd::domain::events::{
    CustomerAddressChangedData, CustomerAddressChangedEvent, CustomerCreatedData,
    CustomerCreatedEvent, DomainEvent, ProductCreatedData, ProductCreatedEvent,
};
use evd::EventDispatcher;
use evd::infrastructure::ConfigLoader;
use evd::infrastructure::logging::init_logging;
use uuid::Uuid;

/// Command line interface for the event dispatcher
#[derive(Parser, Debug)]
#[command(name = "evd")]
#[command(about = "Dispatch a domain event to its registered handlers")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Event to raise
    #[command(subcommand)]
    pub command: Command,
}

/// Events that can be raised from the command line
#[derive(Subcommand, Debug)]
pub enum Command {
    /// A product was created
    ProductCreated {
        /// Product name
        #[arg(long)]
        name: String,
        /// Product description
        #[arg(long, default_value = "")]
        description: String,
        /// Unit price
        #[arg(long)]
        price: f64,
    },
    /// A customer was created
    CustomerCreated {
        /// Customer identifier
        #[arg(long)]
        id: Option<String>,
        /// Customer name
        #[arg(long)]
        name: Option<String>,
    },
    /// A customer's address changed
    AddressChanged {
        /// Customer identifier
        #[arg(long)]
        id: Uuid,
        /// Customer name
        #[arg(long)]
        name: String,
        /// New address
        #[arg(long)]
        address: String,
    },
}

impl Command {
    /// Build the domain event this command describes
    fn into_event(self) -> Box<dyn DomainEvent> {
        match self {
            Self::ProductCreated {
                name,
                description,
                price,
            } => Box::new(ProductCreatedEvent::new(ProductCreatedData {
                name,
                description,
                price,
            })),
            Self::CustomerCreated { id, name } => {
                Box::new(CustomerCreatedEvent::new(CustomerCreatedData { id, name }))
            }
            Self::AddressChanged { id, name, address } => Box::new(
                CustomerAddressChangedEvent::new(CustomerAddressChangedData {
                    id,
                    name,
                    address,
                }),
            ),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let dispatcher = evd::bootstrap(&config);
    let event = cli.command.into_event();
    tracing::debug!(event = event.event_name(), "Raising event");
    dispatcher.notify(event.as_ref())?;
    Ok(())
}
