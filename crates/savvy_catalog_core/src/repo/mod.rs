//! Persistence abstractions and implementations.
//!
//! # Responsibility
//! - Define the whole-catalog storage contract used by services.
//! - Isolate file and serialization details from business orchestration.
//!
//! # Invariants
//! - Stores load and save the full ordered catalog as one unit.
//! - Stores return semantic errors (`Parse`) in addition to I/O errors.

pub mod catalog_store;
