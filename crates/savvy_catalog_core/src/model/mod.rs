//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical entry record and the ordered catalog shape.
//! - Define partial-update semantics shared by service callers.
//!
//! # Invariants
//! - Every entry is identified by its case-insensitive name only.
//! - Entries are never deleted; the catalog only grows or changes in place.

pub mod entry;
