use crate::core::snapshot::SnapshotPolicy;
use crate::utils::error::Result;

/// Asynchronous string key-value store holding the persisted cart snapshot.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;

    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn storage_key(&self) -> &str;
    fn snapshot_policy(&self) -> SnapshotPolicy;
}
