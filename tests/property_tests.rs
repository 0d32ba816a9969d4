//! Property-based tests for the data-table engine.
//!
//! Tests validate:
//! 1. Descending order is the reverse of ascending order for distinct values
//! 2. Sorting is stable for equal values
//! 3. Pages partition the collection and the page count is ceil(n / size)
//! 4. Page clamping is idempotent and never notifies
//! 5. Three header activations return to unsorted
//! 6. Columns mixing numbers, text, nulls and NaN sort into a total order

use proptest::prelude::*;
use rost_table::model::{Column, DataTableSort, FieldValue, SortDirection};
use rost_table::view_state::sort::{compare_values, sort_rows, CompareMode};
use rost_table::view_state::{DataTableOptions, DataTableProps, DataTableState, PaginationSummary};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

fn value_columns() -> Vec<Column<Value>> {
    vec![
        Column::new("Value").accessor("value".to_string()).sortable(),
        Column::new("Position").accessor("position".to_string()),
    ]
}

fn rows_from(values: &[i64]) -> Vec<Value> {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| json!({"value": value, "position": position}))
        .collect()
}

fn field(rows: &[&Value], name: &str) -> Vec<i64> {
    rows.iter()
        .map(|row| row[name].as_i64().unwrap_or(i64::MIN))
        .collect()
}

fn distinct_shuffled() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(-1000i64..1000, 0..40)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

// ===== Property 1: Reverse Round-Trip =====

proptest! {
    #[test]
    fn descending_is_reverse_of_ascending(values in distinct_shuffled()) {
        let rows = rows_from(&values);
        let columns = value_columns();

        let asc = DataTableProps::new(&rows, &columns)
            .sort(Some(DataTableSort::new("value".to_string(), SortDirection::Ascending)));
        let desc = DataTableProps::new(&rows, &columns)
            .sort(Some(DataTableSort::new("value".to_string(), SortDirection::Descending)));

        let mut state = DataTableState::default();
        let ascending = field(&state.evaluate(&asc).rows, "value");
        let mut descending = field(&state.evaluate(&desc).rows, "value");
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }
}

// ===== Property 2: Stability =====

proptest! {
    #[test]
    fn equal_values_keep_original_order(values in prop::collection::vec(0i64..4, 0..50)) {
        let rows = rows_from(&values);
        let columns = value_columns();
        let props = DataTableProps::new(&rows, &columns)
            .sort(Some(DataTableSort::ascending("value".to_string())));

        let view = DataTableState::default().evaluate(&props);
        let sorted_values = field(&view.rows, "value");
        let positions = field(&view.rows, "position");

        for pair in sorted_values.windows(2).zip(positions.windows(2)) {
            let (v, p) = pair;
            prop_assert!(v[0] <= v[1]);
            if v[0] == v[1] {
                prop_assert!(p[0] < p[1], "tie broke original order: {:?}", positions);
            }
        }
    }
}

// ===== Property 3: Page Coverage =====

proptest! {
    #[test]
    fn pages_partition_rows(count in 0usize..120, size in 1usize..25) {
        let values: Vec<i64> = (0..count as i64).collect();
        let rows = rows_from(&values);
        let columns = value_columns();

        let expected_pages = count.div_ceil(size).max(1);
        let mut seen = Vec::new();

        for page in 0..expected_pages {
            let props = DataTableProps::new(&rows, &columns).page_size(size).page_index(page);
            let view = DataTableState::default().evaluate(&props);
            prop_assert_eq!(view.total_pages, expected_pages);
            prop_assert!(view.rows.len() <= size);
            seen.extend(field(&view.rows, "position"));
        }

        prop_assert_eq!(seen, values);
    }

    #[test]
    fn summary_bounds_match_slice(count in 0usize..120, size in 1usize..25, page in 0usize..10) {
        let Some(summary) = PaginationSummary::new(page, size, count) else {
            return Err(TestCaseError::fail("size is non-zero"));
        };
        prop_assert_eq!(summary.total_pages(), count.div_ceil(size).max(1));
        prop_assert!(summary.next_index() <= summary.last_index());
        prop_assert!(summary.previous_index() <= page);
        if count == 0 {
            prop_assert_eq!(summary.start(), 0);
        }
    }
}

// ===== Property 4: Clamp Idempotence =====

proptest! {
    #[test]
    fn uncontrolled_clamp_is_idempotent(count in 0usize..60, size in 1usize..10, start in 0usize..20) {
        let values: Vec<i64> = (0..count as i64).collect();
        let rows = rows_from(&values);
        let columns = value_columns();
        let props = DataTableProps::new(&rows, &columns).page_size(size);

        let mut state = DataTableState::<String>::new(DataTableOptions::default().default_page_index(start));
        let first = state.evaluate(&props).page_index;
        let retained = state.retained_page_index();
        let second = state.evaluate(&props).page_index;

        prop_assert_eq!(first, second);
        prop_assert_eq!(retained, first);
        prop_assert_eq!(state.retained_page_index(), retained);
        prop_assert!(first < count.div_ceil(size).max(1));
    }

    #[test]
    fn controlled_clamp_never_notifies(count in 0usize..60, size in 1usize..10, page in 0usize..20) {
        let values: Vec<i64> = (0..count as i64).collect();
        let rows = rows_from(&values);
        let columns = value_columns();
        let props = DataTableProps::new(&rows, &columns).page_size(size).page_index(page);

        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        let options = DataTableOptions::default().on_page_change(move |_| *sink.borrow_mut() += 1);
        let mut state = DataTableState::<String>::new(options);

        let shown = state.evaluate(&props).page_index;
        state.evaluate(&props);

        prop_assert_eq!(*calls.borrow(), 0);
        prop_assert_eq!(state.retained_page_index(), 0);
        prop_assert_eq!(shown, page.min(count.div_ceil(size).max(1) - 1));
    }
}

// ===== Property 5: Sort Cycle =====

proptest! {
    #[test]
    fn three_activations_clear_sort(values in prop::collection::vec(-50i64..50, 0..20)) {
        let rows = rows_from(&values);
        let columns = value_columns();
        let props = DataTableProps::new(&rows, &columns);
        let mut state = DataTableState::default();

        state.activate_header(&props, 0);
        prop_assert_eq!(state.retained_sort().map(|s| s.direction), Some(SortDirection::Ascending));
        state.activate_header(&props, 0);
        prop_assert_eq!(state.retained_sort().map(|s| s.direction), Some(SortDirection::Descending));
        state.activate_header(&props, 0);
        prop_assert_eq!(state.retained_sort(), None);

        let view = state.evaluate(&props);
        prop_assert_eq!(field(&view.rows, "value"), values);
    }
}

// ===== Property 6: Mixed Columns =====

fn mixed_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1000i64..1000).prop_map(|n| json!(n)),
        (-1000.0f64..1000.0).prop_map(|n| json!(n)),
        (-1000i64..1000).prop_map(|n| json!(n.to_string())),
        "[a-zA-Z0-9 ]{0,6}".prop_map(Value::String),
        Just(Value::Null),
    ]
}

fn mixed_rows(values: &[Value]) -> Vec<Value> {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| json!({"value": value, "position": position}))
        .collect()
}

fn positions_of(rows: &[&Value]) -> Vec<u64> {
    rows.iter()
        .map(|row| row["position"].as_u64().unwrap_or(u64::MAX))
        .collect()
}

proptest! {
    #[test]
    fn mixed_column_sort_is_an_ordered_permutation(
        values in prop::collection::vec(mixed_value(), 0..200),
        descending in any::<bool>(),
    ) {
        let rows = mixed_rows(&values);
        let columns = value_columns();
        let direction = if descending { SortDirection::Descending } else { SortDirection::Ascending };
        let sort = DataTableSort::new("value".to_string(), direction);

        let sorted = sort_rows(&rows, &columns, Some(&sort));

        let mut positions = positions_of(&sorted);
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..rows.len() as u64).collect::<Vec<_>>());

        let keys: Vec<FieldValue> = sorted.iter().map(|row| FieldValue::from(&row["value"])).collect();
        let mode = CompareMode::for_values(&keys);
        for pair in keys.windows(2) {
            prop_assert_ne!(
                compare_values(&pair[0], &pair[1], mode, direction),
                std::cmp::Ordering::Greater
            );
        }
    }

    #[test]
    fn nan_sort_values_sort_into_a_permutation(
        values in prop::collection::vec(prop::option::of(-100.0f64..100.0), 0..200),
    ) {
        let rows: Vec<Value> = values
            .iter()
            .enumerate()
            .map(|(position, value)| json!({"value": value, "position": position}))
            .collect();
        let columns: Vec<Column<Value>> = vec![Column::new("Value")
            .accessor("value".to_string())
            .sortable()
            .sort_value(|row: &Value| FieldValue::Number(row["value"].as_f64().unwrap_or(f64::NAN)))];
        let sort = DataTableSort::ascending("value".to_string());

        let sorted = sort_rows(&rows, &columns, Some(&sort));

        let mut positions = positions_of(&sorted);
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..rows.len() as u64).collect::<Vec<_>>());

        // Nulls became NaN and sort after every number.
        let first_null = sorted.iter().position(|row| row["value"].is_null()).unwrap_or(sorted.len());
        prop_assert!(sorted[first_null..].iter().all(|row| row["value"].is_null()));
    }
}
