#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::cart_store::DEFAULT_STORAGE_KEY;
use crate::core::snapshot::SnapshotPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};

/// Resolved settings for opening a cart store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSettings {
    pub data_dir: String,
    pub storage_key: String,
    pub validate_snapshot: bool,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            data_dir: "./cart-data".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            validate_snapshot: true,
        }
    }
}

impl ConfigProvider for CartSettings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        if self.validate_snapshot {
            SnapshotPolicy::Strict
        } else {
            SnapshotPolicy::Lenient
        }
    }
}

impl Validate for CartSettings {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_non_empty_string("storage_key", &self.storage_key)?;
        Ok(())
    }
}
