//! Pagination types for paginated resource listings.
//!
//! The backend pages collections with zero-based page indices and returns a
//! page envelope carrying the slice plus totals. Only some resources expose a
//! paginated listing; the rest return the full collection in one response.
//!
//! # Example
//!
//! ```ignore
//! use collegiate_core::{Page, PageRequest, SortDirection};
//!
//! let request = PageRequest::new(0, 5).sorted_by("facultyId", SortDirection::Asc);
//! let page: Page<Faculty> = client.list_paginated(&request).await?;
//!
//! if page.has_next() {
//!     let next = request.next();
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Sort order for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The query-parameter value the backend expects.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A request for one page of a paginated listing.
///
/// Page indices are zero-based. The page size is clamped to `[1, 100]`, and
/// negative page indices are clamped to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
    sort_by: Option<String>,
    direction: SortDirection,
}

/// Default page size used by listing screens.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    /// Create a request for the given zero-based page with the given size.
    #[must_use]
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: page.max(0),
            size: size.clamp(1, 100),
            sort_by: None,
            direction: SortDirection::Asc,
        }
    }

    /// Sort the listing by the given entity field.
    #[must_use]
    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(field.into());
        self.direction = direction;
        self
    }

    /// The zero-based page index.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page
    }

    /// The effective page size, clamped to `[1, 100]`.
    #[must_use]
    pub fn size(&self) -> i64 {
        self.size
    }

    /// The sort field, if any.
    #[must_use]
    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    /// The sort direction.
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The same request pointed at the following page.
    #[must_use]
    pub fn next(&self) -> Self {
        let mut req = self.clone();
        req.page += 1;
        req
    }

    /// The same request pointed at the given zero-based page.
    #[must_use]
    pub fn at_page(&self, page: i64) -> Self {
        let mut req = self.clone();
        req.page = page.max(0);
        req
    }

    /// The query-string pairs for this request, in the order the backend
    /// documents them.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(field) = &self.sort_by {
            pairs.push(("sortBy", field.clone()));
            pairs.push(("direction", self.direction.as_str().to_string()));
        }
        pairs
    }
}

/// One page of a paginated listing, as returned by the backend.
///
/// # Example JSON response
///
/// ```json
/// {
///   "content": [...],
///   "totalElements": 42,
///   "totalPages": 9,
///   "number": 0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The entities on this page.
    pub content: Vec<T>,
    /// Total number of entities across all pages.
    pub total_elements: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// The zero-based index of this page.
    pub number: i64,
}

impl<T> Page<T> {
    /// Whether a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    /// Whether this page carries no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
