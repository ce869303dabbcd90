//! Tool catalog: the recommendable product entries and their admin surface.

pub mod domain;
pub mod import;
pub mod repository;
pub mod router;

pub use domain::{CatalogItem, PricingModel, SetupDifficulty, TimeToValue, ToolId};
pub use import::{CatalogCsvImporter, CatalogImportError};
pub use repository::CatalogRepository;
pub use router::catalog_router;
