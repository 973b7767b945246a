//! Bookstore collection and its query operations.
//!
//! # Responsibility
//! - Own the ordered catalog sequence for one named store.
//! - Provide linear-scan query, aggregate and print operations.
//!
//! # Invariants
//! - Insertion order is preserved unless a sort operation reorders
//!   the sequence in place.
//! - Tie-breaks for longest-title and oldest-book resolve to the
//!   first item encountered in current sequence order.
//! - The sequence is never exposed mutably; entry invariants hold for
//!   the store's whole lifetime.

use crate::model::literature::{Literature, LiteratureKind};
use crate::store::filter::BookFilter;
use crate::store::stats::StoreStatistics;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

/// Inclusive span of a decade window: `[start, start + DECADE_SPAN]`.
const DECADE_SPAN: i32 = 9;

/// Result type used by store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store construction and non-total queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store name was empty or whitespace-only.
    BlankName,
    /// Query requires at least one item and the store has none.
    EmptyStore,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "store name cannot be empty or blank"),
            Self::EmptyStore => write!(f, "store has no items"),
        }
    }
}

impl Error for StoreError {}

/// A named, ordered collection of catalog entries.
///
/// All queries are single linear scans over the in-memory sequence;
/// catalog sizes are small and there is no index structure to keep
/// consistent.
#[derive(Debug)]
pub struct BookStore {
    name: String,
    items: Vec<Literature>,
}

impl BookStore {
    /// Creates an empty store with the given name.
    ///
    /// # Errors
    /// - `BlankName` when `name` is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::BlankName);
        }
        debug!(
            "event=store_created module=store name_len={}",
            name.chars().count()
        );
        Ok(Self {
            name,
            items: Vec::new(),
        })
    }

    /// Returns the store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of the sequence in its current order.
    pub fn items(&self) -> &[Literature] {
        &self.items
    }

    /// Appends an entry to the end of the sequence.
    pub fn add_item(&mut self, item: Literature) {
        debug!(
            "event=item_added module=store kind={:?} title_len={} year={}",
            item.kind(),
            item.title_len(),
            item.year_published()
        );
        self.items.push(item);
    }

    /// Borrows the statistics view over this store.
    pub fn statistics(&mut self) -> StoreStatistics<'_> {
        StoreStatistics::new(self)
    }

    /// Writes the store header and every item as `{title}: in stock`,
    /// in current sequence order.
    pub fn write_items<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "BookStore: {}", self.name)?;
        for item in &self.items {
            writeln!(out, "{}: in stock", item.title())?;
        }
        Ok(())
    }

    /// Writes every title uppercased, one per line.
    pub fn write_all_titles<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in &self.items {
            writeln!(out, "{}", item.title().to_uppercase())?;
        }
        Ok(())
    }

    /// Writes titles containing `substring`, matched case-insensitively.
    pub fn write_matching_titles<W: Write>(&self, out: &mut W, substring: &str) -> io::Result<()> {
        let needle = substring.to_lowercase();
        for item in &self.items {
            if item.title().to_lowercase().contains(&needle) {
                writeln!(out, "{}", item.title())?;
            }
        }
        Ok(())
    }

    /// Sorts the sequence in place by title (case-insensitive, stable
    /// for equal titles) and writes each title in the new order.
    pub fn write_titles_in_alpha_order<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.items
            .sort_by(|a, b| a.title().to_lowercase().cmp(&b.title().to_lowercase()));
        for item in &self.items {
            writeln!(out, "{}", item.title())?;
        }
        Ok(())
    }

    /// Writes titles published inside the inclusive decade window
    /// `[start_year, start_year + 9]`.
    pub fn write_group_by_decade<W: Write>(&self, out: &mut W, start_year: i32) -> io::Result<()> {
        for item in &self.items {
            let year = item.year_published();
            if year >= start_year && year <= start_year + DECADE_SPAN {
                writeln!(out, "{}", item.title())?;
            }
        }
        Ok(())
    }

    /// Writes titles accepted by `filter`, in current sequence order.
    pub fn write_filtered<W: Write, F: BookFilter>(&self, out: &mut W, filter: F) -> io::Result<()> {
        for item in &self.items {
            if filter.matches(item) {
                writeln!(out, "{item}")?;
            }
        }
        Ok(())
    }

    /// Writes the one-line store summary: name and item count.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "BookStore: {}, Items: {}", self.name, self.items.len())
    }

    /// Returns the item with the longest title.
    ///
    /// On equal lengths the item encountered first in current
    /// sequence order wins.
    ///
    /// # Errors
    /// - `EmptyStore` when the store has no items.
    pub fn longest_title(&self) -> StoreResult<&Literature> {
        let mut longest = self.items.first().ok_or(StoreError::EmptyStore)?;
        for item in &self.items {
            if item.title_len() > longest.title_len() {
                longest = item;
            }
        }
        Ok(longest)
    }

    /// Returns the item with the earliest publication year.
    ///
    /// On equal years the item encountered first in current sequence
    /// order wins.
    ///
    /// # Errors
    /// - `EmptyStore` when the store has no items.
    pub fn oldest_book(&self) -> StoreResult<&Literature> {
        let mut oldest = self.items.first().ok_or(StoreError::EmptyStore)?;
        for item in &self.items {
            if item.year_published() < oldest.year_published() {
                oldest = item;
            }
        }
        Ok(oldest)
    }

    /// Whether any item was published exactly in `year`.
    pub fn is_there_a_book_written_in(&self, year: i32) -> bool {
        self.items.iter().any(|item| item.year_published() == year)
    }

    /// Counts items whose title contains `word`, case-insensitively.
    pub fn how_many_books_contain(&self, word: &str) -> usize {
        let needle = word.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.title().to_lowercase().contains(&needle))
            .count()
    }

    /// Percentage of items published in the inclusive range
    /// `[first, last]`.
    ///
    /// Defined as `0.0` for an empty store.
    pub fn which_percent_written_between(&self, first: i32, last: i32) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let matching = self
            .items
            .iter()
            .filter(|item| item.year_published() >= first && item.year_published() <= last)
            .count();
        (matching as f64 / self.items.len() as f64) * 100.0
    }

    /// Items whose title length is exactly `length`, in current
    /// sequence order.
    pub fn books_this_length(&self, length: usize) -> Vec<&Literature> {
        self.items
            .iter()
            .filter(|item| item.title_len() == length)
            .collect()
    }

    /// Appends a copy of every novel to `collection`, preserving
    /// sequence order. The store keeps exclusive ownership of its own
    /// entries, so the target receives clones.
    pub fn add_novels_to_collection(&self, collection: &mut Vec<Literature>) {
        for item in &self.items {
            if item.kind() == LiteratureKind::Novel {
                collection.push(item.clone());
            }
        }
    }

    /// In-place sort hook for the statistics view.
    pub(crate) fn sort_items_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Literature, &Literature) -> std::cmp::Ordering,
    {
        self.items.sort_by(compare);
    }
}

#[cfg(test)]
mod tests {
    use super::{BookStore, StoreError};
    use crate::model::literature::Literature;

    #[test]
    fn new_rejects_blank_name() {
        assert_eq!(BookStore::new("   ").unwrap_err(), StoreError::BlankName);
        assert_eq!(BookStore::new("").unwrap_err(), StoreError::BlankName);
    }

    #[test]
    fn add_item_appends_in_order() {
        let mut store = BookStore::new("Corner Books").unwrap();
        store.add_item(Literature::novel("First", 2000).unwrap());
        store.add_item(Literature::magazine("Second", 2001).unwrap());

        let titles: Vec<&str> = store.items().iter().map(|item| item.title()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn empty_store_queries_fail_with_empty_store() {
        let store = BookStore::new("Corner Books").unwrap();
        assert_eq!(store.longest_title().unwrap_err(), StoreError::EmptyStore);
        assert_eq!(store.oldest_book().unwrap_err(), StoreError::EmptyStore);
    }
}
