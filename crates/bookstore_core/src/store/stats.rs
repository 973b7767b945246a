//! Title statistics over one store.
//!
//! # Responsibility
//! - Aggregate title metrics without duplicating the catalog.
//! - Host the natural-order title sort, distinct from the
//!   case-insensitive alphabetical print.
//!
//! # Invariants
//! - `average_title_length` on an empty store is defined as `0.0`,
//!   consistent with the percentage query on the store itself.

use crate::store::book_store::BookStore;

/// Borrowing statistics view obtained from [`BookStore::statistics`].
pub struct StoreStatistics<'s> {
    store: &'s mut BookStore,
}

impl<'s> StoreStatistics<'s> {
    pub(crate) fn new(store: &'s mut BookStore) -> Self {
        Self { store }
    }

    /// Average title length in `char`s across all items.
    ///
    /// Returns `0.0` when the store has no items.
    pub fn average_title_length(&self) -> f64 {
        if self.store.is_empty() {
            return 0.0;
        }
        let total: usize = self
            .store
            .items()
            .iter()
            .map(|item| item.title_len())
            .sum();
        total as f64 / self.store.len() as f64
    }

    /// Sorts the store's sequence in place by natural title order
    /// (case-sensitive).
    pub fn sort_by_title(&mut self) {
        self.store
            .sort_items_by(|a, b| a.title().cmp(b.title()));
    }
}
