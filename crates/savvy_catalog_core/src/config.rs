//! Storage location defaults and resolution.
//!
//! # Responsibility
//! - Own the default catalog location relative to the working directory.
//! - Apply caller-provided path overrides.
//!
//! # Invariants
//! - No environment variables are consulted besides the working directory.

use std::io;
use std::path::PathBuf;

/// Directory (relative to the working directory) holding the catalog file.
pub const DEFAULT_DATA_DIR: &str = "data";
/// File name of the default catalog document.
pub const DEFAULT_CATALOG_FILE_NAME: &str = "catalog.json";

/// Returns `<cwd>/data/catalog.json`.
///
/// # Errors
/// - Returns an error when the current working directory is unavailable.
pub fn default_catalog_path() -> io::Result<PathBuf> {
    Ok(std::env::current_dir()?
        .join(DEFAULT_DATA_DIR)
        .join(DEFAULT_CATALOG_FILE_NAME))
}

/// Resolves the catalog path, preferring an explicit override.
pub fn resolve_catalog_path(override_path: Option<PathBuf>) -> io::Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path),
        None => default_catalog_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::{default_catalog_path, resolve_catalog_path};
    use std::path::PathBuf;

    #[test]
    fn default_path_ends_with_data_catalog_json() {
        let path = default_catalog_path().expect("cwd should be available in tests");
        assert!(path.is_absolute());
        assert!(path.ends_with("data/catalog.json"));
    }

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/tmp/custom/catalog.json");
        let resolved = resolve_catalog_path(Some(custom.clone())).expect("override resolves");
        assert_eq!(resolved, custom);
    }
}
