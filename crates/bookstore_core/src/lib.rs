//! Core domain logic for the bookstore catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::literature::{Literature, LiteratureKind, LiteratureValidationError};
pub use store::book_store::{BookStore, StoreError, StoreResult};
pub use store::filter::BookFilter;
pub use store::stats::StoreStatistics;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
