use crate::core::snapshot::{self, SnapshotPolicy};
use crate::core::{Cart, CartLine, ConfigProvider, KeyValueStore, Product};
use crate::utils::error::Result;
use crate::utils::validation::validate_product;
use tokio::sync::{watch, Mutex};

pub const DEFAULT_STORAGE_KEY: &str = "@GoMarketplace:products";

/// Write-through cart state.
///
/// Every mutation persists the full snapshot under `key` before the new
/// snapshot becomes visible through [`CartStore::products`]. Mutations are
/// serialized by `write_lock`, which is held across the storage write, so
/// concurrent callers never overwrite each other's changes.
pub struct CartStore<S: KeyValueStore> {
    storage: S,
    key: String,
    write_lock: Mutex<()>,
    published: watch::Sender<Cart>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Hydrates the cart from `storage`. A missing value starts an empty cart.
    pub async fn load(storage: S, key: impl Into<String>, policy: SnapshotPolicy) -> Result<Self> {
        let key = key.into();

        let cart = match storage.get_item(&key).await? {
            Some(raw) if !raw.trim().is_empty() => snapshot::decode(&raw, policy)?,
            _ => Cart::new(),
        };

        tracing::debug!(key = %key, lines = cart.len(), "Hydrated cart from storage");

        let (published, _) = watch::channel(cart);
        Ok(Self {
            storage,
            key,
            write_lock: Mutex::new(()),
            published,
        })
    }

    pub async fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Result<Self> {
        Self::load(storage, config.storage_key(), config.snapshot_policy()).await
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current published snapshot.
    pub fn products(&self) -> Cart {
        self.published.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<CartLine> {
        self.published.borrow().get(id).cloned()
    }

    /// Receiver notified after each persisted mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.published.subscribe()
    }

    /// Rejects products with an empty id or a non-finite price before writing.
    pub async fn add_to_cart(&self, product: Product) -> Result<Cart> {
        tracing::debug!(id = %product.id, "add_to_cart");
        validate_product(&product)?;
        self.update(|cart| cart.with_added(product)).await
    }

    /// Unknown ids still write the unchanged snapshot.
    pub async fn increment(&self, id: &str) -> Result<Cart> {
        tracing::debug!(id = %id, "increment");
        self.update(|cart| cart.with_incremented(id)).await
    }

    /// Quantity stops at 1; the line is never removed.
    pub async fn decrement(&self, id: &str) -> Result<Cart> {
        tracing::debug!(id = %id, "decrement");
        self.update(|cart| cart.with_decremented(id)).await
    }

    async fn update<F>(&self, transition: F) -> Result<Cart>
    where
        F: FnOnce(&Cart) -> Cart,
    {
        let _guard = self.write_lock.lock().await;

        let next = {
            let current = self.published.borrow();
            transition(&current)
        };

        let encoded = snapshot::encode(&next)?;
        if let Err(e) = self.storage.set_item(&self.key, &encoded).await {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist cart snapshot");
            return Err(e);
        }

        tracing::debug!(
            key = %self.key,
            lines = next.len(),
            items = next.item_count(),
            "Persisted cart snapshot"
        );

        self.published.send_replace(next.clone());
        Ok(next)
    }
}
