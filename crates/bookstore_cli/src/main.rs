//! CLI demo entry point.
//!
//! # Responsibility
//! - Exercise the core store operations against a small catalog.
//! - Keep output deterministic for quick local sanity checks.

use bookstore_core::{BookStore, Literature};
use std::error::Error;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut store = BookStore::new("Bookland")?;
    store.add_item(Literature::novel("War and Peace", 1984)?);
    store.add_item(Literature::comic_book("Spider-Man", 1990)?);
    store.add_item(Literature::magazine("National Geographic", 2006)?);

    store.write_items(&mut out)?;

    writeln!(out)?;
    writeln!(out, "titles in alphabetical order:")?;
    store.write_titles_in_alpha_order(&mut out)?;

    writeln!(out)?;
    writeln!(out, "published before 1950:")?;
    store.write_filtered(&mut out, |item: &Literature| item.year_published() < 1950)?;

    writeln!(out)?;
    store.write_summary(&mut out)?;

    Ok(())
}
