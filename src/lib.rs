//! rost-table
//!
//! A sortable, paginated data table for the terminal, plus a registry
//! splitter that writes one JSON file per registry item.
//!
//! The core is pure: [`view_state::DataTableState`] turns rows, columns and
//! sort/page configuration into a [`view_state::DataTableView`]. The
//! [`view`] module renders that view with ratatui and drives the
//! interactive `rost view` command.

pub mod config;
pub mod logging;
pub mod model;
pub mod registry;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
