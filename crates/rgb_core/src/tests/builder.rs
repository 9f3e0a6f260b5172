use super::set;
use crate::builder::{CELL_STEP, FORM_ID, FormAction, WRAPPER_ID, build_form};
use crate::form::submit_grid;
use crate::model::{FieldKey, Grid, GridShape};

#[test]
fn test_form_tree_layout() {
    let grid = Grid::with_shape(GridShape::new().add_table().add_row());

    let tree = build_form(&grid, 2026);

    assert_eq!(tree.form_id, FORM_ID);
    assert_eq!(tree.wrapper_id, WRAPPER_ID);
    let labels: Vec<_> = tree.buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Add table", "Add year", "Submit"]);
    assert_eq!(tree.buttons[1].action, FormAction::AddRow);

    assert_eq!(tree.headlines.len(), 18);
    assert_eq!(tree.headlines[0].label, "Year");
    assert_eq!(tree.headlines[4].key, FieldKey::Q1);
    assert_eq!(tree.headlines[17].label, "YTD");

    assert_eq!(tree.tables.len(), 2);
    let rows = &tree.tables[1].rows;
    assert_eq!(rows.len(), 2);
    // Oldest year rendered first
    assert_eq!((rows[0].index, rows[0].year), (1, 2024));
    assert_eq!((rows[1].index, rows[1].year), (0, 2025));
}

#[test]
fn test_calculated_cells_are_disabled_and_rounded() {
    let mut grid = Grid::default();
    set(&mut grid, 0, 0, FieldKey::Jan, 10.0);
    set(&mut grid, 0, 0, FieldKey::Feb, 20.0);
    set(&mut grid, 0, 0, FieldKey::Mar, 30.0);
    let outcome = submit_grid(grid, 2026);

    let tree = build_form(&outcome.grid, 2026).with_outcome(&outcome);
    let cells = &tree.tables[0].rows[0].cells;

    for cell in cells {
        assert_eq!(cell.disabled, cell.key.is_calculated(), "{:?}", cell.key);
        assert_eq!(cell.step, CELL_STEP);
    }
    let q1 = cells.iter().find(|c| c.key == FieldKey::Q1).unwrap();
    assert_eq!(q1.value, 20.33);
    let year = cells.iter().find(|c| c.key == FieldKey::Year).unwrap();
    assert_eq!(year.value, 2025.0);
    assert_eq!(tree.messages, ["Form is valid!"]);
    assert!(tree.errors.is_empty());
}

#[test]
fn test_unsubmitted_calculated_cells_read_zero() {
    let tree = build_form(&Grid::default(), 2026);
    let ytd = tree.tables[0].rows[0]
        .cells
        .iter()
        .find(|c| c.key == FieldKey::Ytd)
        .unwrap();
    assert_eq!(ytd.value, 0.0);
}
