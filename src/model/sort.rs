//! Sort descriptor types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Direction of a single-column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Natural order.
    #[serde(rename = "asc")]
    Ascending,
    /// Reversed natural order.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Orient a natural-order comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Short token (`asc` / `desc`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort applied to a table: one key and one direction.
///
/// "No sort" is expressed as `Option::<DataTableSort<K>>::None` everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataTableSort<K> {
    /// Key of the column being sorted.
    pub key: K,
    /// Sort direction.
    pub direction: SortDirection,
}

impl<K> DataTableSort<K> {
    /// Create a sort descriptor.
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Ascending sort on `key`.
    pub fn ascending(key: K) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Descending sort on `key`.
    pub fn descending(key: K) -> Self {
        Self::new(key, SortDirection::Descending)
    }
}
