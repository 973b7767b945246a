//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical data shape used by store queries.
//! - Keep one tagged shape for all literature kinds.
//!
//! # Invariants
//! - Entries are validated once at construction and never mutated.

pub mod literature;
