use super::domain::{CatalogItem, ToolId};
use crate::workflows::store::StoreError;

/// Storage abstraction over the tool catalog.
///
/// Administrators own the write side; the recommendation path only lists
/// active entries.
pub trait CatalogRepository: Send + Sync {
    fn insert(&self, item: CatalogItem) -> Result<CatalogItem, StoreError>;
    fn update(&self, item: CatalogItem) -> Result<(), StoreError>;
    fn remove(&self, id: &ToolId) -> Result<(), StoreError>;
    fn fetch(&self, id: &ToolId) -> Result<Option<CatalogItem>, StoreError>;
    fn list_active(&self) -> Result<Vec<CatalogItem>, StoreError>;
}
