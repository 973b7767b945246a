//! Literature domain model.
//!
//! # Responsibility
//! - Define the canonical catalog entry shared by every store query.
//! - Establish title/year invariants at construction time.
//!
//! # Invariants
//! - `title` is never empty or whitespace-only.
//! - `year_published` stays within `[MIN_PUB_YEAR, CUR_YEAR]`.
//! - A constructed `Literature` is immutable; no mutating API exists.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Classification tag for a catalog entry.
///
/// The three kinds are structurally identical; one shape with a kind
/// tag keeps match arms exhaustive instead of spreading the data over
/// three parallel types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteratureKind {
    /// Long-form fiction.
    Novel,
    /// Illustrated serial issue.
    ComicBook,
    /// Periodical issue.
    Magazine,
}

/// Errors from constructing (or deserializing) a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteratureValidationError {
    /// Title was empty or whitespace-only.
    BlankTitle,
    /// Publication year outside the accepted range.
    YearOutOfRange { year: i32 },
}

impl Display for LiteratureValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title cannot be empty or blank"),
            Self::YearOutOfRange { year } => write!(
                f,
                "publication year {year} outside valid range {}..={}",
                Literature::MIN_PUB_YEAR,
                Literature::CUR_YEAR
            ),
        }
    }
}

impl Error for LiteratureValidationError {}

/// One catalog entry: a title, a publication year and a kind tag.
///
/// Fields are private so the construction invariants cannot be
/// bypassed after the fact; deserialization re-runs the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLiterature")]
pub struct Literature {
    kind: LiteratureKind,
    title: String,
    year_published: i32,
}

/// Unvalidated wire shape; converted via `TryFrom` during deserialize.
#[derive(Deserialize)]
struct RawLiterature {
    kind: LiteratureKind,
    title: String,
    year_published: i32,
}

impl TryFrom<RawLiterature> for Literature {
    type Error = LiteratureValidationError;

    fn try_from(raw: RawLiterature) -> Result<Self, Self::Error> {
        Literature::new(raw.kind, raw.title, raw.year_published)
    }
}

impl Literature {
    /// Earliest accepted publication year.
    pub const MIN_PUB_YEAR: i32 = 0;
    /// Latest accepted publication year.
    pub const CUR_YEAR: i32 = 2025;

    /// Creates a validated catalog entry.
    ///
    /// # Errors
    /// - `BlankTitle` when `title` is empty or whitespace-only.
    /// - `YearOutOfRange` when `year_published` falls outside
    ///   `MIN_PUB_YEAR..=CUR_YEAR`.
    pub fn new(
        kind: LiteratureKind,
        title: impl Into<String>,
        year_published: i32,
    ) -> Result<Self, LiteratureValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LiteratureValidationError::BlankTitle);
        }
        if !(Self::MIN_PUB_YEAR..=Self::CUR_YEAR).contains(&year_published) {
            return Err(LiteratureValidationError::YearOutOfRange {
                year: year_published,
            });
        }
        Ok(Self {
            kind,
            title,
            year_published,
        })
    }

    /// Creates a novel entry.
    pub fn novel(
        title: impl Into<String>,
        year_published: i32,
    ) -> Result<Self, LiteratureValidationError> {
        Self::new(LiteratureKind::Novel, title, year_published)
    }

    /// Creates a comic book entry.
    pub fn comic_book(
        title: impl Into<String>,
        year_published: i32,
    ) -> Result<Self, LiteratureValidationError> {
        Self::new(LiteratureKind::ComicBook, title, year_published)
    }

    /// Creates a magazine entry.
    pub fn magazine(
        title: impl Into<String>,
        year_published: i32,
    ) -> Result<Self, LiteratureValidationError> {
        Self::new(LiteratureKind::Magazine, title, year_published)
    }

    /// Returns the kind tag.
    pub fn kind(&self) -> LiteratureKind {
        self.kind
    }

    /// Returns the immutable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the immutable publication year.
    pub fn year_published(&self) -> i32 {
        self.year_published
    }

    /// Title length in `char`s.
    ///
    /// Every length-based query in the store measures titles through
    /// this single definition.
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }
}

impl Display for Literature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
