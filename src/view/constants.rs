//! Layout dimensions and class names for TUI rendering.
//!
//! Centralized location for layout values and the `rost-*` class names that
//! [`ClassStyles`](super::ClassStyles) resolves to styles.

/// Height of the toolbar in lines (title + description).
pub const TOOLBAR_HEIGHT: u16 = 2;

/// Height of the filter bar in lines.
///
/// Includes border and text input area.
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the pagination footer in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the key hint line at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum width of a table column, in cells.
pub const MIN_COLUMN_WIDTH: u16 = 3;

/// Class names attached to rendered elements.
pub mod class {
    /// Header row.
    pub const TABLE_HEADER: &str = "rost-table__header";
    /// Header cell.
    pub const TABLE_HEAD: &str = "rost-table__head";
    /// Body section.
    pub const TABLE_BODY: &str = "rost-table__body";
    /// Body row.
    pub const TABLE_ROW: &str = "rost-table__row";
    /// Body cell.
    pub const TABLE_CELL: &str = "rost-table__cell";
    /// Sortable header label.
    pub const TABLE_SORT: &str = "rost-table__sort";
    /// Sortable header label of the sorted column.
    pub const TABLE_SORT_ACTIVE: &str = "rost-table__sort--active";
    /// Sort arrow.
    pub const TABLE_SORT_INDICATOR: &str = "rost-table__sort-indicator";
    /// Header cell with keyboard focus.
    pub const TABLE_HEAD_FOCUSED: &str = "rost-table__head--focused";

    /// Empty-state placeholder cell.
    pub const DATA_TABLE_EMPTY: &str = "rost-data-table__empty";
    /// "Showing X-Y of N".
    pub const PAGINATION_INFO: &str = "rost-data-table__pagination-info";
    /// "Page P of Q".
    pub const PAGINATION_PAGE: &str = "rost-data-table__pagination-page";
    /// Previous / Next affordance.
    pub const PAGINATION_BUTTON: &str = "rost-data-table__pagination-button";
    /// Previous / Next affordance that cannot be used.
    pub const PAGINATION_BUTTON_DISABLED: &str = "rost-data-table__pagination-button--disabled";
    /// Toolbar title.
    pub const TOOLBAR_TITLE: &str = "rost-data-table__toolbar-title";
    /// Toolbar description.
    pub const TOOLBAR_DESCRIPTION: &str = "rost-data-table__toolbar-description";
    /// Filter list area.
    pub const FILTERS: &str = "rost-data-table__filters";
    /// Filter clear affordance.
    pub const FILTERS_CLEAR: &str = "rost-data-table__filters-clear";
}
