//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide add/list/find/update entry points for core callers.
//! - Enforce name uniqueness and partial-update rules above the store.
//!
//! # Invariants
//! - Every operation is one full load, plus one full save for mutations.
//! - The store is never touched when input validation fails.
//! - `update` keeps the entry at its original position and never renames it.
//! - No locking: concurrent writers race and the last full save wins.

use crate::model::entry::{Catalog, CatalogEntry, EntryUpdate, EntryValidationError};
use crate::repo::catalog_store::{CatalogStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, CatalogServiceError>;

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum CatalogServiceError {
    /// Input fields failed validation.
    Validation(EntryValidationError),
    /// An entry with the same case-insensitive name already exists.
    Duplicate(String),
    /// No entry matches the given name.
    NotFound(String),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for CatalogServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Duplicate(name) => write!(f, "entry \"{name}\" already exists in the catalog"),
            Self::NotFound(name) => write!(f, "entry \"{name}\" not found in the catalog"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Duplicate(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<EntryValidationError> for CatalogServiceError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for CatalogServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Catalog service facade over a store implementation.
pub struct CatalogService<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a new entry to the end of the catalog.
    ///
    /// # Contract
    /// - Name and description are trimmed; blank optional fields are dropped.
    /// - Flags are stored exactly as given.
    ///
    /// # Errors
    /// - `Validation` for a blank name or description (store untouched).
    /// - `Duplicate` when a case-insensitive name match exists.
    /// - `Store` for load/save failures.
    pub fn add(&self, entry: &CatalogEntry) -> ServiceResult<()> {
        entry.validate()?;

        let mut catalog = self.store.load()?;
        if catalog.iter().any(|existing| existing.matches_name(&entry.name)) {
            warn!("event=entry_add module=service status=error error_code=duplicate");
            return Err(CatalogServiceError::Duplicate(entry.name.clone()));
        }

        catalog.push(entry.normalized());
        self.store.save(&catalog)?;
        info!(
            "event=entry_add module=service status=ok entries={}",
            catalog.len()
        );
        Ok(())
    }

    /// Lists every entry in persisted order.
    pub fn list(&self) -> ServiceResult<Catalog> {
        Ok(self.store.load()?)
    }

    /// Finds one entry by trimmed, case-insensitive exact name.
    ///
    /// Absence is a normal outcome and returns `Ok(None)`.
    pub fn find_by_name(&self, name: &str) -> ServiceResult<Option<CatalogEntry>> {
        let catalog = self.store.load()?;
        Ok(catalog.into_iter().find(|entry| entry.matches_name(name)))
    }

    /// Merges provided fields into the entry matching `name`.
    ///
    /// # Errors
    /// - `Validation` when a provided description is blank (store untouched).
    /// - `NotFound` when no entry matches `name`.
    /// - `Store` for load/save failures.
    pub fn update(&self, name: &str, updates: &EntryUpdate) -> ServiceResult<()> {
        updates.validate()?;

        let mut catalog = self.store.load()?;
        let Some(existing) = catalog.iter_mut().find(|entry| entry.matches_name(name)) else {
            warn!("event=entry_update module=service status=error error_code=not_found");
            return Err(CatalogServiceError::NotFound(name.to_string()));
        };

        updates.apply_to(existing);
        self.store.save(&catalog)?;
        info!(
            "event=entry_update module=service status=ok entries={}",
            catalog.len()
        );
        Ok(())
    }
}
