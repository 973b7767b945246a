//! Store layer: the owned catalog sequence and its query operations.
//!
//! # Responsibility
//! - Encapsulate the item sequence behind the operations in
//!   `book_store`; no raw mutable access leaves this module.
//!
//! # Invariants
//! - Ordering guarantees (insertion order, first-encountered
//!   tie-breaks) are observable behavior and stay deterministic.

pub mod book_store;
pub mod filter;
pub mod stats;
