use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid persisted snapshot: {reason}")]
    InvalidSnapshotError { reason: String },

    #[error("Invalid product '{id}': {reason}")]
    InvalidProductError { id: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No cart line with id '{id}'")]
    LineNotFoundError { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl CartError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CartError::LineNotFoundError { .. } => ErrorSeverity::Low,
            CartError::ConfigError { .. }
            | CartError::InvalidConfigValueError { .. }
            | CartError::InvalidSnapshotError { .. }
            | CartError::InvalidProductError { .. }
            | CartError::SerializationError(_) => ErrorSeverity::High,
            CartError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::IoError(e) => format!("Could not access cart storage: {}", e),
            CartError::SerializationError(_) | CartError::InvalidSnapshotError { .. } => {
                format!("The saved cart could not be read: {}", self)
            }
            CartError::InvalidProductError { id, reason } => {
                format!("Product '{}' cannot be added: {}", id, reason)
            }
            CartError::ConfigError { message } => format!("Bad configuration: {}", message),
            CartError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration for {}: {}", field, reason)
            }
            CartError::LineNotFoundError { id } => format!("Product '{}' is not in the cart", id),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CartError::IoError(_) => "Check that the data directory exists and is writable",
            CartError::SerializationError(_) | CartError::InvalidSnapshotError { .. } => {
                "Remove the stored cart file or rerun with --lenient"
            }
            CartError::InvalidProductError { .. } => "Give the product a finite price",
            CartError::ConfigError { .. } | CartError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
            CartError::LineNotFoundError { .. } => "Run `cart list` to see the products in the cart",
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
