//! Query vocabulary: sort orders, substring filters and pagination.
//!
//! Column names only ever come from the closed enums in this module, so a
//! backend may splice them into SQL text. Everything caller-supplied (filter
//! values, page bounds) must be bound as a parameter.

use std::{collections::BTreeMap, fmt};

use crate::{Error, Result};

// ─── Sorting ─────────────────────────────────────────────────────────────────

/// A column a single-row lookup may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
  Id,
  Title,
  Duration,
  Genre,
  Vote,
  ViewCount,
}

impl SortField {
  /// The column name in the `movies` table.
  pub fn column(self) -> &'static str {
    match self {
      Self::Id => "id",
      Self::Title => "title",
      Self::Duration => "duration",
      Self::Genre => "genre",
      Self::Vote => "vote",
      Self::ViewCount => "viewcount",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
  #[default]
  Asc,
  Desc,
}

impl SortDirection {
  pub fn keyword(self) -> &'static str {
    match self {
      Self::Asc => "ASC",
      Self::Desc => "DESC",
    }
  }
}

/// One or more sort fields plus a direction token.
///
/// Rendered as `f1,f2,... DIR`: the direction follows the last field, the
/// earlier ones use the backend's default (ascending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
  fields:    Vec<SortField>,
  direction: SortDirection,
}

impl SortOrder {
  /// Fails with [`Error::Validation`] if `fields` is empty.
  pub fn new(fields: Vec<SortField>, direction: SortDirection) -> Result<Self> {
    if fields.is_empty() {
      return Err(Error::Validation("at least one sort field is required".into()));
    }
    Ok(Self { fields, direction })
  }

  pub fn by(field: SortField, direction: SortDirection) -> Self {
    Self { fields: vec![field], direction }
  }
}

impl fmt::Display for SortOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let columns: Vec<&str> = self.fields.iter().map(|c| c.column()).collect();
    write!(f, "{} {}", columns.join(","), self.direction.keyword())
  }
}

// ─── Filtering ───────────────────────────────────────────────────────────────

/// A column that can be searched by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
  Title,
  Description,
  Artists,
  Genre,
}

impl FilterField {
  pub fn column(self) -> &'static str {
    match self {
      Self::Title => "title",
      Self::Description => "description",
      Self::Artists => "artists",
      Self::Genre => "genre",
    }
  }
}

/// A conjunction of case-sensitive substring matches, one per field.
///
/// An empty filter matches every movie. Fields iterate in a fixed order so
/// that generated SQL is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
  fields: BTreeMap<FilterField, String>,
}

impl MovieFilter {
  pub fn new() -> Self { Self::default() }

  /// Builder form of [`MovieFilter::insert`].
  pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
    self.insert(field, value);
    self
  }

  /// Require `field` to contain `value`. A later value for the same field
  /// replaces the earlier one.
  pub fn insert(&mut self, field: FilterField, value: impl Into<String>) {
    self.fields.insert(field, value.into());
  }

  pub fn get(&self, field: FilterField) -> Option<&str> {
    self.fields.get(&field).map(String::as_str)
  }

  pub fn is_empty(&self) -> bool { self.fields.is_empty() }

  pub fn len(&self) -> usize { self.fields.len() }

  pub fn iter(&self) -> impl Iterator<Item = (FilterField, &str)> {
    self.fields.iter().map(|(k, v)| (*k, v.as_str()))
  }
}

// ─── Pagination ──────────────────────────────────────────────────────────────

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A 1-based page of a listing ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  page:     u32,
  per_page: u32,
}

impl Default for Page {
  fn default() -> Self {
    Self { page: DEFAULT_PAGE, per_page: DEFAULT_PER_PAGE }
  }
}

impl Page {
  /// `page` starts at 1. A `per_page` of zero is allowed and selects nothing.
  pub fn new(page: u32, per_page: u32) -> Result<Self> {
    if page == 0 {
      return Err(Error::InvalidPage("page starts at 1".into()));
    }
    Ok(Self { page, per_page })
  }

  /// Parse raw query-string values, falling back to the defaults when a
  /// value is absent.
  pub fn parse(page: Option<&str>, per_page: Option<&str>) -> Result<Self> {
    let page = parse_bound("page", page, DEFAULT_PAGE)?;
    let per_page = parse_bound("perpage", per_page, DEFAULT_PER_PAGE)?;
    Self::new(page, per_page)
  }

  pub fn limit(&self) -> i64 { i64::from(self.per_page) }

  /// `(page - 1) * per_page`; cannot overflow since both factors are `u32`.
  pub fn offset(&self) -> i64 {
    (i64::from(self.page) - 1) * i64::from(self.per_page)
  }
}

fn parse_bound(name: &str, raw: Option<&str>, default: u32) -> Result<u32> {
  let Some(raw) = raw else { return Ok(default) };
  let value: i64 = raw.trim().parse().map_err(|_| {
    Error::InvalidPage(format!("{name} must be an integer, got {raw:?}"))
  })?;
  if value < 0 {
    return Err(Error::InvalidPage(format!("{name} must not be negative")));
  }
  u32::try_from(value)
    .map_err(|_| Error::InvalidPage(format!("{name} is too large")))
}
