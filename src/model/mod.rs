//! Domain model types (pure).
//!
//! All types in this module are plain data; none of them touch the terminal.

pub mod column;
pub mod error;
pub mod key_action;
pub mod record;
pub mod sort;

// Re-export for convenience
pub use column::Column;
pub use error::{AppError, RegistryError, SourceError};
pub use key_action::KeyAction;
pub use record::{FieldValue, Record};
pub use sort::{DataTableSort, SortDirection};
