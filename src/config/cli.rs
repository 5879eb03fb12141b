use crate::config::toml_config::CartConfig;
use crate::config::CartSettings;
use crate::core::Product;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_price, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cart")]
#[command(about = "Inspect and edit a locally persisted shopping cart")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the persisted cart (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Storage key of the cart snapshot (overrides the config file)
    #[arg(long)]
    pub storage_key: Option<String>,

    /// Accept persisted carts without checking their invariants
    #[arg(long)]
    pub lenient: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every cart line
    List,
    /// Add a product, or bump its quantity if already present
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        image_url: String,
        #[arg(long)]
        price: f64,
    },
    /// Increase the quantity of a line by one
    Increment { id: String },
    /// Decrease the quantity of a line by one, stopping at 1
    Decrement { id: String },
    /// Print item count and cart total
    Total,
}

impl CliConfig {
    /// Loads the optional config file and applies command-line overrides on top.
    pub fn load_file(&self) -> Result<Option<CartConfig>> {
        self.config.as_deref().map(CartConfig::from_file).transpose()
    }

    pub fn resolve(&self, file: Option<&CartConfig>) -> CartSettings {
        let mut settings = file.map(CartConfig::to_settings).unwrap_or_default();

        if let Some(data_dir) = &self.data_dir {
            settings.data_dir = data_dir.clone();
        }
        if let Some(key) = &self.storage_key {
            settings.storage_key = key.clone();
        }
        if self.lenient {
            settings.validate_snapshot = false;
        }

        settings
    }
}

impl Command {
    pub fn product(&self) -> Option<Product> {
        match self {
            Command::Add {
                id,
                title,
                image_url,
                price,
            } => Some(Product::new(id.as_str(), title.as_str(), image_url.as_str(), *price)),
            _ => None,
        }
    }
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::Add { id, price, .. } => {
                validate_non_empty_string("id", id)?;
                validate_price("price", *price)
            }
            Command::Increment { id } | Command::Decrement { id } => {
                validate_non_empty_string("id", id)
            }
            Command::List | Command::Total => Ok(()),
        }
    }
}
