//! Column descriptors.
//!
//! A [`Column`] says what to show in a header, how to read a cell, and whether
//! (and by what) the column can be sorted. Columns are built with a small
//! builder API:
//!
//! ```
//! use rost_table::model::Column;
//! use serde_json::Value;
//!
//! let column: Column<Value> = Column::new("Name")
//!     .accessor("name".to_string())
//!     .sortable();
//! assert!(column.is_sortable());
//! ```

use super::record::{FieldValue, Record};
use std::fmt;

type SortValueFn<T> = Box<dyn Fn(&T) -> FieldValue>;
type CellFn<T> = Box<dyn Fn(&T) -> String>;

/// Declarative description of one table column.
pub struct Column<T: Record> {
    /// Header label.
    pub header: String,
    /// Field read for the default cell content.
    pub accessor: Option<T::Key>,
    /// Field used for sorting. Falls back to `accessor` when absent.
    pub sort_key: Option<T::Key>,
    /// Whether the header can be activated to sort.
    ///
    /// Ignored unless a sort key resolves; see [`Column::is_sortable`].
    pub sortable: bool,
    /// Class applied to body cells.
    pub class_name: Option<String>,
    /// Class applied to the header cell.
    pub header_class_name: Option<String>,
    sort_value: Option<SortValueFn<T>>,
    cell: Option<CellFn<T>>,
}

impl<T: Record> Column<T> {
    /// Create a column with a header and nothing else.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: None,
            sort_key: None,
            sortable: false,
            class_name: None,
            header_class_name: None,
            sort_value: None,
            cell: None,
        }
    }

    /// Read cell content from `key`.
    pub fn accessor(mut self, key: T::Key) -> Self {
        self.accessor = Some(key);
        self
    }

    /// Sort by `key` instead of the accessor.
    pub fn sort_key(mut self, key: T::Key) -> Self {
        self.sort_key = Some(key);
        self
    }

    /// Mark the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Extract the sort value with a custom function instead of reading the sort key.
    pub fn sort_value(mut self, f: impl Fn(&T) -> FieldValue + 'static) -> Self {
        self.sort_value = Some(Box::new(f));
        self
    }

    /// Render cell content with a custom function instead of the accessor.
    pub fn cell(mut self, f: impl Fn(&T) -> String + 'static) -> Self {
        self.cell = Some(Box::new(f));
        self
    }

    /// Class applied to body cells.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Class applied to the header cell.
    pub fn header_class_name(mut self, class: impl Into<String>) -> Self {
        self.header_class_name = Some(class.into());
        self
    }

    /// Key this column sorts by: `sort_key`, else `accessor`.
    pub fn resolved_sort_key(&self) -> Option<&T::Key> {
        self.sort_key.as_ref().or(self.accessor.as_ref())
    }

    /// A column is sortable only when flagged AND a sort key resolves.
    pub fn is_sortable(&self) -> bool {
        self.sortable && self.resolved_sort_key().is_some()
    }

    /// Whether a sort on `key` targets this column.
    ///
    /// Both the sort key and the accessor are accepted, so a sort expressed in
    /// terms of the displayed field still finds a column that sorts by a
    /// different key.
    pub fn matches_sort_key(&self, key: &T::Key) -> bool {
        self.sort_key.as_ref() == Some(key) || self.accessor.as_ref() == Some(key)
    }

    /// Value used to order `row` when this column drives a sort on `key`.
    pub fn sort_value_of(&self, row: &T, key: &T::Key) -> FieldValue {
        match &self.sort_value {
            Some(f) => f(row),
            None => row.field(key),
        }
    }

    /// Text shown in this column's cell for `row`.
    ///
    /// Custom cell function first, then the accessor's textual value, then blank.
    pub fn render_cell(&self, row: &T) -> String {
        if let Some(cell) = &self.cell {
            return cell(row);
        }
        self.accessor
            .as_ref()
            .map(|key| row.field(key).to_text())
            .unwrap_or_default()
    }
}

impl<T: Record> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("sort_key", &self.sort_key)
            .field("sortable", &self.sortable)
            .field("class_name", &self.class_name)
            .field("header_class_name", &self.header_class_name)
            .field("sort_value", &self.sort_value.is_some())
            .field("cell", &self.cell.is_some())
            .finish()
    }
}
