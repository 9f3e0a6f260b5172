//! Tests for the grid model, aggregates, validation and form round-trips
//!
//! Tests are organized by topic:
//! - `aggregate` - Quarter and YTD formulas, including the +1 bias
//! - `validate` - Gap and mismatch detection
//! - `grid` - Shape growth, value preservation, year labels
//! - `form` - Posted-value parsing and submission
//! - `builder` - Rendered form tree

mod aggregate;
mod builder;

use crate::model::{FieldKey, Grid, GridShape};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Grid of `shape` with the given flattened slots (oldest row first) set to 1.
fn grid_with_slots(shape: GridShape, slots_per_table: &[&[usize]]) -> Grid {
    let mut grid = Grid::with_shape(shape);
    for (t, slots) in slots_per_table.iter().enumerate() {
        let table = grid.table_mut(t).unwrap();
        for &slot in *slots {
            let row = table.row_of_slot(slot).unwrap();
            let key = crate::model::Table::month_of_slot(slot);
            assert!(table.row_mut(row).unwrap().set_month(key, 1.0));
        }
    }
    grid
}

fn set(grid: &mut Grid, table: usize, row: usize, key: FieldKey, value: f64) {
    assert!(grid.row_mut(table, row).unwrap().set_month(key, value));
}
