pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::storage::{LocalStorage, MemoryStorage};
pub use config::CartSettings;
pub use core::cart_store::{CartStore, DEFAULT_STORAGE_KEY};
pub use core::snapshot::SnapshotPolicy;
pub use domain::model::{Cart, CartLine, Product};
pub use domain::ports::{ConfigProvider, KeyValueStore};
pub use utils::error::{CartError, Result};
