pub mod cart_store;
pub mod snapshot;

pub use crate::domain::model::{Cart, CartLine, Product};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore};
pub use crate::utils::error::Result;
