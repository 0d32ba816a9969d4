//! Row filtering ahead of the data-table engine.
//!
//! A row matches when any column's rendered text contains the query,
//! ignoring case. The engine only ever sees the surviving rows.

use crate::model::{Column, Record};

/// Normalized filter query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    raw: String,
    folded: String,
}

impl FilterQuery {
    /// Build a query; surrounding whitespace is ignored for matching.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.trim().to_lowercase();
        Self { raw, folded }
    }

    /// Text as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the query matches everything.
    pub fn is_blank(&self) -> bool {
        self.folded.is_empty()
    }

    /// Append a typed character.
    pub fn push(&mut self, ch: char) {
        self.raw.push(ch);
        self.folded = self.raw.trim().to_lowercase();
    }

    /// Remove the last character.
    pub fn pop(&mut self) {
        self.raw.pop();
        self.folded = self.raw.trim().to_lowercase();
    }

    /// Reset to the blank query.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `row` has a column whose text contains the query.
    pub fn matches<T: Record>(&self, row: &T, columns: &[Column<T>]) -> bool {
        self.is_blank()
            || columns
                .iter()
                .any(|column| column.render_cell(row).to_lowercase().contains(&self.folded))
    }
}

/// Rows owned once and partitioned by a filter.
///
/// Matching rows sit at the front in their original order, followed by the
/// rows the filter hides. [`FilteredRows::matched`] hands the engine the
/// matching prefix without copying any row.
#[derive(Debug, Clone)]
pub struct FilteredRows<T> {
    rows: Vec<T>,
    positions: Vec<usize>,
    matched: usize,
}

impl<T: Record> FilteredRows<T> {
    /// All rows, unfiltered.
    pub fn new(rows: Vec<T>) -> Self {
        let matched = rows.len();
        Self {
            positions: (0..rows.len()).collect(),
            rows,
            matched,
        }
    }

    /// Re-partition the rows for `query`.
    pub fn apply(&mut self, columns: &[Column<T>], query: &FilterQuery) {
        let rows = std::mem::take(&mut self.rows);
        let positions = std::mem::take(&mut self.positions);

        let mut slots: Vec<(bool, usize, T)> = positions
            .into_iter()
            .zip(rows)
            .map(|(position, row)| (!query.matches(&row, columns), position, row))
            .collect();
        slots.sort_unstable_by_key(|(hidden, position, _)| (*hidden, *position));

        self.matched = slots.iter().take_while(|(hidden, ..)| !hidden).count();
        let (positions, rows): (Vec<usize>, Vec<T>) = slots
            .into_iter()
            .map(|(_, position, row)| (position, row))
            .unzip();
        self.positions = positions;
        self.rows = rows;
    }

    /// Matching rows, in their original order.
    pub fn matched(&self) -> &[T] {
        &self.rows[..self.matched]
    }

    /// Number of rows regardless of the filter.
    pub fn total(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::new("Name").accessor("name".to_string()),
            Column::new("City").accessor("city".to_string()),
        ]
    }

    fn rows() -> Vec<Value> {
        vec![
            json!({"name": "Ada", "city": "London", "secret": "zebra"}),
            json!({"name": "Grace", "city": "Arlington"}),
            json!({"name": "Linus", "city": "Helsinki"}),
        ]
    }

    fn names(rows: &[Value]) -> Vec<&str> {
        rows.iter()
            .map(|row| row["name"].as_str().unwrap_or_default())
            .collect()
    }

    fn filtered(query: &str) -> FilteredRows<Value> {
        let mut rows = FilteredRows::new(rows());
        rows.apply(&columns(), &FilterQuery::new(query));
        rows
    }

    #[test]
    fn blank_query_keeps_everything() {
        let query = FilterQuery::new("   ");
        assert!(query.is_blank());
        assert_eq!(names(filtered("   ").matched()), vec!["Ada", "Grace", "Linus"]);
    }

    #[test]
    fn match_is_case_insensitive_across_columns() {
        let rows = filtered("LON");
        assert_eq!(names(rows.matched()), vec!["Ada", "Grace"]);
        assert_eq!(rows.total(), 3);
    }

    #[test]
    fn fields_without_a_column_are_not_searched() {
        assert!(filtered("zebra").matched().is_empty());
    }

    #[test]
    fn clearing_the_filter_restores_original_order() {
        let mut rows = FilteredRows::new(rows());
        rows.apply(&columns(), &FilterQuery::new("helsinki"));
        assert_eq!(names(rows.matched()), vec!["Linus"]);

        rows.apply(&columns(), &FilterQuery::default());
        assert_eq!(names(rows.matched()), vec!["Ada", "Grace", "Linus"]);
    }

    #[test]
    fn narrowing_and_widening_keep_matches_in_order() {
        let mut rows = FilteredRows::new(rows());
        rows.apply(&columns(), &FilterQuery::new("n"));
        assert_eq!(names(rows.matched()), vec!["Ada", "Grace", "Linus"]);

        rows.apply(&columns(), &FilterQuery::new("in"));
        assert_eq!(names(rows.matched()), vec!["Grace", "Linus"]);

        rows.apply(&columns(), &FilterQuery::new("a"));
        assert_eq!(names(rows.matched()), vec!["Ada", "Grace"]);
    }

    #[test]
    fn push_and_pop_edit_the_query() {
        let mut query = FilterQuery::default();
        query.push('H');
        query.push('e');
        assert_eq!(query.as_str(), "He");
        let mut rows = FilteredRows::new(rows());
        rows.apply(&columns(), &query);
        assert_eq!(rows.matched().len(), 1);

        query.pop();
        assert_eq!(query.as_str(), "H");
        query.clear();
        assert!(query.is_blank());
    }
}
