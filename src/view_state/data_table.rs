//! Data-table view-state engine.
//!
//! [`DataTableState`] retains the engine-owned sort and page index between
//! evaluations. Each call to [`DataTableState::evaluate`] takes the full
//! configuration ([`DataTableProps`]) and derives a [`DataTableView`]:
//!
//! ```text
//! rows ──sort──▶ sorted ──clamp page──▶ paged slice ──▶ view
//! ```
//!
//! Sorting always happens before pagination. The page index is clamped on
//! every evaluation; when the page is engine-owned, the retained index is
//! snapped to the clamped value without notifying anyone.
//!
//! Sort and page are independently controlled (caller passes the value in
//! `DataTableProps` and installs a change handler in [`DataTableOptions`]) or
//! uncontrolled (the engine keeps them, seeded from the defaults).

use super::pagination::{
    clamp_page_index, effective_page_size, page_range, total_pages, PaginationSummary,
};
use super::sort::{next_sort, sort_rows};
use crate::model::{Column, DataTableSort, Record, SortDirection};
use crate::state::controllable::{ChangeHandler, Controllable, Routed};
use std::fmt;
use tracing::debug;

/// Placeholder shown when the current page has no rows.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

// ===== Construction-time options =====

/// Defaults and change handlers fixed when the engine is created.
pub struct DataTableOptions<K> {
    /// Seed for the retained sort. Read once, never re-seeded.
    pub default_sort: Option<DataTableSort<K>>,
    /// Seed for the retained page index. Read once, never re-seeded.
    pub default_page_index: usize,
    /// Receives requested sort changes. Installing it makes the sort controlled.
    pub on_sort_change: Option<ChangeHandler<Option<DataTableSort<K>>>>,
    /// Receives requested page changes. Installing it makes the page controlled.
    pub on_page_change: Option<ChangeHandler<usize>>,
}

impl<K> Default for DataTableOptions<K> {
    fn default() -> Self {
        Self {
            default_sort: None,
            default_page_index: 0,
            on_sort_change: None,
            on_page_change: None,
        }
    }
}

impl<K> DataTableOptions<K> {
    /// Seed the retained sort.
    pub fn default_sort(mut self, sort: DataTableSort<K>) -> Self {
        self.default_sort = Some(sort);
        self
    }

    /// Seed the retained page index.
    pub fn default_page_index(mut self, page_index: usize) -> Self {
        self.default_page_index = page_index;
        self
    }

    /// Report sort changes to `handler` instead of retaining them.
    pub fn on_sort_change(
        mut self,
        handler: impl FnMut(Option<DataTableSort<K>>) + 'static,
    ) -> Self {
        self.on_sort_change = Some(Box::new(handler));
        self
    }

    /// Report page changes to `handler` instead of retaining them.
    pub fn on_page_change(mut self, handler: impl FnMut(usize) + 'static) -> Self {
        self.on_page_change = Some(Box::new(handler));
        self
    }
}

// ===== Per-evaluation configuration =====

/// Configuration supplied fresh on every evaluation.
pub struct DataTableProps<'a, T: Record> {
    /// Full row collection, in source order.
    pub data: &'a [T],
    /// Column descriptors.
    pub columns: &'a [Column<T>],
    /// Caller-controlled sort. `None` falls back to the retained sort.
    pub sort: Option<DataTableSort<T::Key>>,
    /// Rows per page. `None` or `Some(0)` disables pagination.
    pub page_size: Option<usize>,
    /// Caller-controlled page index. `None` falls back to the retained index.
    pub page_index: Option<usize>,
    /// Placeholder for an empty page.
    pub empty_message: &'a str,
    /// Whether the pagination control is shown when paginating.
    pub show_pagination: bool,
}

impl<'a, T: Record> DataTableProps<'a, T> {
    /// Rows and columns with everything else defaulted.
    pub fn new(data: &'a [T], columns: &'a [Column<T>]) -> Self {
        Self {
            data,
            columns,
            sort: None,
            page_size: None,
            page_index: None,
            empty_message: DEFAULT_EMPTY_MESSAGE,
            show_pagination: true,
        }
    }

    /// Supply a controlled sort (or `None` to read the retained one).
    pub fn sort(mut self, sort: Option<DataTableSort<T::Key>>) -> Self {
        self.sort = sort;
        self
    }

    /// Enable pagination.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Supply a controlled page index.
    pub fn page_index(mut self, page_index: usize) -> Self {
        self.page_index = Some(page_index);
        self
    }

    /// Replace the empty-state placeholder.
    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    /// Show or hide the pagination control.
    pub fn show_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }
}

// ===== Derived view =====

/// Sort marker for one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderSort {
    /// Not sorted by this column.
    #[default]
    None,
    /// Sorted ascending by this column.
    Ascending,
    /// Sorted descending by this column.
    Descending,
}

impl HeaderSort {
    /// Arrow shown next to the header label.
    pub fn indicator(self) -> &'static str {
        match self {
            HeaderSort::None => "",
            HeaderSort::Ascending => "↑",
            HeaderSort::Descending => "↓",
        }
    }

    /// Accessibility-style token (`none` / `ascending` / `descending`).
    pub fn token(self) -> &'static str {
        match self {
            HeaderSort::None => "none",
            HeaderSort::Ascending => "ascending",
            HeaderSort::Descending => "descending",
        }
    }
}

impl From<SortDirection> for HeaderSort {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => HeaderSort::Ascending,
            SortDirection::Descending => HeaderSort::Descending,
        }
    }
}

/// Header cell as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView<'a> {
    /// Header label.
    pub label: &'a str,
    /// Whether activating the header changes the sort.
    pub sortable: bool,
    /// Current sort marker.
    pub sort: HeaderSort,
    /// Extra header class.
    pub class_name: Option<&'a str>,
}

/// Everything needed to render one frame of a data table.
pub struct DataTableView<'a, T: Record> {
    /// Effective sort.
    pub sort: Option<DataTableSort<T::Key>>,
    /// Header cells, one per column.
    pub headers: Vec<HeaderView<'a>>,
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a T>,
    /// Column descriptors the rows are rendered with.
    pub columns: &'a [Column<T>],
    /// Rows across all pages.
    pub total_count: usize,
    /// Pages across the collection (1 when not paginating).
    pub total_pages: usize,
    /// Clamped page index actually shown.
    pub page_index: usize,
    /// Pagination control values; `None` when not paginating or hidden.
    pub pagination: Option<PaginationSummary>,
    /// Empty-state placeholder.
    pub empty_message: &'a str,
}

impl<'a, T: Record> DataTableView<'a, T> {
    /// Whether the empty-state placeholder should be shown.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns; the empty placeholder spans all of them.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Rendered cell text for every visible row.
    pub fn body(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.render_cell(row))
                    .collect()
            })
            .collect()
    }
}

impl<T: Record> fmt::Debug for DataTableView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTableView")
            .field("sort", &self.sort)
            .field("headers", &self.headers)
            .field("rows", &self.rows.len())
            .field("total_count", &self.total_count)
            .field("total_pages", &self.total_pages)
            .field("page_index", &self.page_index)
            .field("pagination", &self.pagination)
            .finish()
    }
}

// ===== Engine =====

/// Retained state of one data table.
pub struct DataTableState<K> {
    sort: Controllable<Option<DataTableSort<K>>>,
    page: Controllable<usize>,
}

impl<K: Clone + PartialEq + fmt::Debug> Default for DataTableState<K> {
    fn default() -> Self {
        Self::new(DataTableOptions::default())
    }
}

impl<K: Clone + PartialEq + fmt::Debug> DataTableState<K> {
    /// Create the engine, seeding retained state from the defaults.
    pub fn new(options: DataTableOptions<K>) -> Self {
        Self {
            sort: Controllable::new(options.default_sort, options.on_sort_change),
            page: Controllable::new(options.default_page_index, options.on_page_change),
        }
    }

    /// Sort held by the engine (ignores any controlled value).
    pub fn retained_sort(&self) -> Option<&DataTableSort<K>> {
        self.sort.retained().as_ref()
    }

    /// Page index held by the engine (ignores any controlled value).
    pub fn retained_page_index(&self) -> usize {
        *self.page.retained()
    }

    /// Effective sort: the controlled value if supplied, else the retained one.
    pub fn effective_sort(&self, controlled: Option<&DataTableSort<K>>) -> Option<DataTableSort<K>> {
        let external = controlled.map(|sort| Some(sort.clone()));
        self.sort.resolve(external.as_ref())
    }

    /// Derive the view for the given configuration.
    ///
    /// Takes `&mut self` because an engine-owned page index is snapped into
    /// range here. A controlled page index is clamped for slicing only.
    pub fn evaluate<'a, T>(&mut self, props: &DataTableProps<'a, T>) -> DataTableView<'a, T>
    where
        T: Record<Key = K>,
    {
        let sort = self.effective_sort(props.sort.as_ref());
        let sorted = sort_rows(props.data, props.columns, sort.as_ref());
        let total_count = sorted.len();

        let page_size = effective_page_size(props.page_size);
        if props.page_size.is_some() && page_size.is_none() {
            debug!("Page size of zero disables pagination");
        }
        let total_pages = total_pages(total_count, page_size);
        let requested = self.page.resolve(props.page_index.as_ref());
        let page_index = clamp_page_index(requested, total_pages);

        if self.page.reconcile(props.page_index.is_some(), page_index) {
            debug!(
                requested,
                page_index, total_pages, "Snapped retained page index into range"
            );
        }

        let range = page_range(page_index, page_size, total_count);
        let rows = sorted[range].to_vec();

        let pagination = page_size
            .filter(|_| props.show_pagination)
            .and_then(|size| PaginationSummary::new(page_index, size, total_count));

        let headers = props
            .columns
            .iter()
            .map(|column| header_view(column, sort.as_ref()))
            .collect();

        DataTableView {
            sort,
            headers,
            rows,
            columns: props.columns,
            total_count,
            total_pages,
            page_index,
            pagination,
            empty_message: props.empty_message,
        }
    }

    /// Activate the header of `column_index`, advancing its sort cycle.
    ///
    /// Returns `None` (and changes nothing) when the column does not exist or
    /// is not sortable.
    pub fn activate_header<T>(
        &mut self,
        props: &DataTableProps<'_, T>,
        column_index: usize,
    ) -> Option<Routed>
    where
        T: Record<Key = K>,
    {
        let column = props.columns.get(column_index)?;
        if !column.is_sortable() {
            return None;
        }
        let key = column.resolved_sort_key()?;

        let current = self.effective_sort(props.sort.as_ref());
        let next = next_sort(current.as_ref(), key);
        debug!(column = %column.header, from = ?current, to = ?next, "Header activated");

        Some(self.sort.set(next))
    }

    /// Request a different page.
    ///
    /// The index should already be clamped by the pagination control (see
    /// [`PaginationSummary::next_index`]).
    pub fn request_page(&mut self, page_index: usize) -> Routed {
        debug!(page_index, "Page requested");
        self.page.set(page_index)
    }

    /// Request a sort directly, bypassing the header cycle.
    pub fn request_sort(&mut self, sort: Option<DataTableSort<K>>) -> Routed {
        self.sort.set(sort)
    }
}

impl<K: fmt::Debug> fmt::Debug for DataTableState<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTableState")
            .field("sort", &self.sort)
            .field("page", &self.page)
            .finish()
    }
}

fn header_view<'a, T: Record>(
    column: &'a Column<T>,
    sort: Option<&DataTableSort<T::Key>>,
) -> HeaderView<'a> {
    let sortable = column.is_sortable();
    let marker = match (sortable, sort) {
        (true, Some(sort)) if column.resolved_sort_key() == Some(&sort.key) => {
            HeaderSort::from(sort.direction)
        }
        _ => HeaderSort::None,
    };

    HeaderView {
        label: &column.header,
        sortable,
        sort: marker,
        class_name: column.header_class_name.as_deref(),
    }
}

#[cfg(test)]
#[path = "data_table_tests.rs"]
mod tests;
