//! Page arithmetic and the pagination summary.
//!
//! # Invariants
//! - `total_pages >= 1`, even for zero rows
//! - a clamped page index is always `< total_pages`
//! - clamping is idempotent

use std::fmt;
use std::ops::Range;

/// Page size with the invalid value (zero) mapped to "pagination disabled".
///
/// Returns `None` when pagination is off.
pub fn effective_page_size(page_size: Option<usize>) -> Option<usize> {
    page_size.filter(|&size| size > 0)
}

/// Number of pages needed for `row_count` rows.
///
/// Without a page size everything fits on one page. Never returns zero.
pub fn total_pages(row_count: usize, page_size: Option<usize>) -> usize {
    match effective_page_size(page_size) {
        Some(size) => row_count.div_ceil(size).max(1),
        None => 1,
    }
}

/// Clamp a page index into `[0, total_pages - 1]`.
pub fn clamp_page_index(page_index: usize, total_pages: usize) -> usize {
    page_index.min(total_pages.saturating_sub(1))
}

/// Row range shown on `page_index`, bounded by `row_count`.
///
/// Without a page size the range covers every row.
pub fn page_range(page_index: usize, page_size: Option<usize>, row_count: usize) -> Range<usize> {
    match effective_page_size(page_size) {
        Some(size) => {
            let start = page_index.saturating_mul(size).min(row_count);
            let end = start.saturating_add(size).min(row_count);
            start..end
        }
        None => 0..row_count,
    }
}

/// Values handed to the pagination control.
///
/// Describes one page of a paginated collection and derives the human-readable
/// summary (`Showing 21-25 of 25`, `Page 3 of 3`) and the previous/next
/// targets. Targets are clamped here, before they are reported to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    /// Zero-based page currently shown.
    pub page_index: usize,
    /// Rows per page. Always positive.
    pub page_size: usize,
    /// Rows across all pages.
    pub total_count: usize,
}

impl PaginationSummary {
    /// Create a summary. Returns `None` when `page_size` is zero.
    pub fn new(page_index: usize, page_size: usize, total_count: usize) -> Option<Self> {
        (page_size > 0).then_some(Self {
            page_index,
            page_size,
            total_count,
        })
    }

    /// Total number of pages (at least 1).
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, Some(self.page_size))
    }

    /// One-based position of the first row shown, or 0 when there are no rows.
    pub fn start(&self) -> usize {
        if self.total_count == 0 {
            0
        } else {
            self.page_index * self.page_size + 1
        }
    }

    /// One-based position of the last row shown.
    pub fn end(&self) -> usize {
        self.total_count
            .min((self.page_index + 1).saturating_mul(self.page_size))
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages() - 1
    }

    /// Target of the "previous" affordance.
    pub fn previous_index(&self) -> usize {
        self.page_index.saturating_sub(1)
    }

    /// Target of the "next" affordance.
    pub fn next_index(&self) -> usize {
        (self.page_index + 1).min(self.total_pages() - 1)
    }

    /// Target of the "last page" affordance.
    pub fn last_index(&self) -> usize {
        self.total_pages() - 1
    }

    /// `Showing {start}-{end} of {total}`.
    pub fn showing(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.start(),
            self.end(),
            self.total_count
        )
    }

    /// `Page {n} of {total}`, one-based.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.total_pages())
    }
}

impl fmt::Display for PaginationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} · {}", self.showing(), self.page_label())
    }
}
