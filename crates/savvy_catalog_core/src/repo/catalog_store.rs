//! Catalog store contract and JSON file implementation.
//!
//! # Responsibility
//! - Provide whole-catalog `load`/`save` behind a swappable trait.
//! - Keep JSON encoding and file replacement details inside the store.
//!
//! # Invariants
//! - A missing backing file loads as an empty catalog, not an error.
//! - `save` replaces the file atomically (temp file in the same directory,
//!   then rename), so readers never observe a partial document.
//! - No caching: every call touches the backing file.

use crate::model::entry::{Catalog, CatalogEntry};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for catalog persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Backing file exists but could not be read, or its directory could not
    /// be prepared for writing.
    Io { path: PathBuf, source: io::Error },
    /// Backing file content is not a valid catalog document.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// In-memory catalog could not be encoded.
    Serialize(serde_json::Error),
    /// Encoded catalog could not replace the backing file.
    Persist { path: PathBuf, source: io::Error },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to access catalog `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "malformed catalog `{}`: {source}", path.display())
            }
            Self::Serialize(source) => write!(f, "failed to encode catalog: {source}"),
            Self::Persist { path, source } => {
                write!(f, "failed to write catalog `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(source) => Some(source),
            Self::Persist { source, .. } => Some(source),
        }
    }
}

/// Whole-catalog persistence interface.
///
/// Implementations must return entries in persisted order and replace all
/// persisted state on `save`.
pub trait CatalogStore {
    fn load(&self) -> StoreResult<Catalog>;
    fn save(&self, catalog: &[CatalogEntry]) -> StoreResult<()>;
}

/// JSON-file-backed catalog store.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogStore {
    path: PathBuf,
}

impl JsonFileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn write_atomically(&self, encoded: &str) -> StoreResult<()> {
        let dir = self.parent_dir();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let persist_err = |source: io::Error| StoreError::Persist {
            path: self.path.clone(),
            source,
        };
        let mut tmp = NamedTempFile::new_in(&dir).map_err(persist_err)?;
        tmp.write_all(encoded.as_bytes()).map_err(persist_err)?;
        tmp.as_file().sync_all().map_err(persist_err)?;
        tmp.persist(&self.path)
            .map(|_| ())
            .map_err(|err| persist_err(err.error))
    }
}

impl CatalogStore for JsonFileCatalogStore {
    fn load(&self) -> StoreResult<Catalog> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "event=catalog_load module=store status=ok entries=0 missing_file=true path={}",
                    self.path.display()
                );
                return Ok(Catalog::new());
            }
            Err(source) => {
                error!(
                    "event=catalog_load module=store status=error error_code=read_failed path={} error={}",
                    self.path.display(),
                    source
                );
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let catalog: Catalog = serde_json::from_str(&content).map_err(|source| {
            error!(
                "event=catalog_load module=store status=error error_code=parse_failed path={} error={}",
                self.path.display(),
                source
            );
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(
            "event=catalog_load module=store status=ok entries={} path={}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }

    fn save(&self, catalog: &[CatalogEntry]) -> StoreResult<()> {
        let started_at = Instant::now();
        let mut encoded = serde_json::to_string_pretty(catalog).map_err(StoreError::Serialize)?;
        encoded.push('\n');

        match self.write_atomically(&encoded) {
            Ok(()) => {
                info!(
                    "event=catalog_save module=store status=ok entries={} duration_ms={} path={}",
                    catalog.len(),
                    started_at.elapsed().as_millis(),
                    self.path.display()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=catalog_save module=store status=error duration_ms={} error_code=write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
