//! Sort resolution and comparison.
//!
//! Pure functions: given rows, columns, and an effective sort, produce the
//! sorted row order. Also owns the header activation cycle
//! (`unsorted → asc → desc → unsorted`).

use crate::model::{Column, DataTableSort, FieldValue, Record, SortDirection};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Find the column a sort applies to.
///
/// Returns `None` when no column matches the sort key; callers treat that as
/// "leave rows in their original order".
pub fn find_sort_column<'c, T: Record>(
    columns: &'c [Column<T>],
    sort: &DataTableSort<T::Key>,
) -> Option<&'c Column<T>> {
    columns.iter().find(|column| column.matches_sort_key(&sort.key))
}

/// Sort rows by the effective sort.
///
/// Returns references in display order. Without a sort, or when the sort key
/// matches no column, the original order is kept. Ties keep their original
/// relative order (the underlying sort is stable).
pub fn sort_rows<'a, T: Record>(
    rows: &'a [T],
    columns: &[Column<T>],
    sort: Option<&DataTableSort<T::Key>>,
) -> Vec<&'a T> {
    let mut ordered: Vec<&T> = rows.iter().collect();

    let Some(sort) = sort else {
        return ordered;
    };
    let Some(column) = find_sort_column(columns, sort) else {
        tracing::debug!(key = ?sort.key, "Sort key matches no column; keeping original order");
        return ordered;
    };

    // Extract each sort value once rather than on every comparison.
    let mut keyed: Vec<(FieldValue, &T)> = ordered
        .drain(..)
        .map(|row| (column.sort_value_of(row, &sort.key), row))
        .collect();

    let mode = CompareMode::for_values(keyed.iter().map(|(value, _)| value));
    if mode == CompareMode::Text {
        for (value, _) in &mut keyed {
            if !matches!(value, FieldValue::Text(_)) {
                *value = FieldValue::Text(value.to_text());
            }
        }
    }
    keyed.sort_by(|(left, _), (right, _)| compare_values(left, right, mode, sort.direction));

    keyed.into_iter().map(|(_, row)| row).collect()
}

/// How the values of one sorted column are compared.
///
/// The mode is picked once per column so that every pair in a sort is
/// compared the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    /// Every value is a number.
    Numeric,
    /// At least one value is not a number; everything compares as text.
    Text,
}

impl CompareMode {
    /// Numeric when every value is a number (including an empty column).
    pub fn for_values<'v>(values: impl IntoIterator<Item = &'v FieldValue>) -> Self {
        if values.into_iter().all(|value| value.as_number().is_some()) {
            CompareMode::Numeric
        } else {
            CompareMode::Text
        }
    }
}

/// Compare two sort values in the given direction.
///
/// In [`CompareMode::Numeric`] numbers use [`f64::total_cmp`], so NaN sorts
/// after every other number; a stray non-number sorts after all numbers.
/// In [`CompareMode::Text`] the textual representations are compared with
/// [`locale_compare`]. Both modes are total orders.
pub fn compare_values(
    left: &FieldValue,
    right: &FieldValue,
    mode: CompareMode,
    direction: SortDirection,
) -> Ordering {
    let natural = match mode {
        CompareMode::Numeric => match (left.as_number(), right.as_number()) {
            (Some(l), Some(r)) => l.total_cmp(&r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => locale_compare(&text_of(left), &text_of(right)),
        },
        CompareMode::Text => locale_compare(&text_of(left), &text_of(right)),
    };
    direction.apply(natural)
}

fn text_of(value: &FieldValue) -> Cow<'_, str> {
    match value {
        FieldValue::Text(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_text()),
    }
}

/// Human-oriented string ordering.
///
/// Letters compare case-insensitively first, so `"apple" < "Banana" < "cherry"`.
/// Strings that fold to the same text order lowercase before uppercase at the
/// first position where the case differs (`"a" < "A"`), and a final byte
/// comparison keeps the order total.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    let uppercase_at = |s: &str| s.chars().map(|c| !c.is_lowercase()).collect::<Vec<_>>();

    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
        .then_with(|| uppercase_at(left).cmp(&uppercase_at(right)))
        .then_with(|| left.cmp(right))
}

/// Next sort after activating the header that sorts by `key`.
///
/// Cycles `unsorted → asc → desc → unsorted` on the same key. Activating a
/// different key always starts over at ascending.
pub fn next_sort<K: Clone + PartialEq>(
    current: Option<&DataTableSort<K>>,
    key: &K,
) -> Option<DataTableSort<K>> {
    match current {
        Some(sort) if &sort.key == key => match sort.direction {
            SortDirection::Ascending => Some(DataTableSort::descending(key.clone())),
            SortDirection::Descending => None,
        },
        _ => Some(DataTableSort::ascending(key.clone())),
    }
}
