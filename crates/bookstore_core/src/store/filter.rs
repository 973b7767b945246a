//! Item filter seam for caller-defined selection.
//!
//! # Responsibility
//! - Let callers select catalog entries without touching the store's
//!   internal sequence.

use crate::model::literature::Literature;

/// Predicate over one catalog entry.
///
/// Blanket-implemented for closures, so
/// `store.write_filtered(out, |item| ...)` works directly.
pub trait BookFilter {
    /// Whether `item` should be selected.
    fn matches(&self, item: &Literature) -> bool;
}

impl<F> BookFilter for F
where
    F: Fn(&Literature) -> bool,
{
    fn matches(&self, item: &Literature) -> bool {
        self(item)
    }
}
