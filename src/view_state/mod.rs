//! View-state layer - sorting, pagination, and the data-table engine
//!
//! Everything here is a pure computation over in-memory rows; the only
//! mutable state is the retained sort/page inside [`DataTableState`].
//!
//! # Module Structure
//!
//! - `sort`: sort resolution, value comparison, header sort cycle
//! - `filter`: case-insensitive row filter applied before the engine
//! - `pagination`: page arithmetic and the pagination summary
//! - `data_table`: DataTableState - the view-state engine

pub mod data_table;
pub mod filter;
pub mod pagination;
pub mod sort;

pub use data_table::{
    DataTableOptions, DataTableProps, DataTableState, DataTableView, HeaderSort, HeaderView,
    DEFAULT_EMPTY_MESSAGE,
};
pub use filter::{FilterQuery, FilteredRows};
pub use pagination::PaginationSummary;
