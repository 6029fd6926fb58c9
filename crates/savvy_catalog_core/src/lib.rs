//! Core domain logic for the Savvy catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{default_catalog_path, resolve_catalog_path};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{names_equal, Catalog, CatalogEntry, EntryUpdate, EntryValidationError};
pub use repo::catalog_store::{CatalogStore, JsonFileCatalogStore, StoreError, StoreResult};
pub use service::catalog_service::{CatalogService, CatalogServiceError, ServiceResult};
