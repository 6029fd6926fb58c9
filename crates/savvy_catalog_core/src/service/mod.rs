//! Core use-case services.
//!
//! # Responsibility
//! - Enforce catalog business rules above the storage layer.
//! - Keep CLI/embedding callers decoupled from storage details.

pub mod catalog_service;
