//! Conversion between the nested `values[table][row][key]` mapping a form
//! posts and the grid model, and the submission pass over it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::round2;
use crate::error::{InputError, Result};
use crate::model::{FieldKey, Grid, GridShape, HEADLINES, year_label};
use crate::validate::{ValidationError, validate};

/// Status shown after an accepted submission.
pub const VALID_MESSAGE: &str = "Form is valid!";

/// A posted cell: number widgets may send either form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Numeric value; an empty or blank string counts as 0.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) if s.trim().is_empty() => Some(0.0),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

pub type RowValues = BTreeMap<String, CellValue>;
pub type TableValues = BTreeMap<usize, RowValues>;
pub type FormValues = BTreeMap<usize, TableValues>;

/// Build a grid of `shape` from posted values.
///
/// Missing cells are 0. Calculated keys (`year`, quarters, `ytd`) are ignored:
/// they are never taken from input.
pub fn grid_from_values(shape: GridShape, values: &FormValues) -> Result<Grid> {
    let mut grid = Grid::with_shape(shape);

    for (&table, rows) in values {
        if table >= shape.table_count {
            return Err(InputError::TableOutOfRange {
                table,
                table_count: shape.table_count,
            });
        }
        for (&row, cells) in rows {
            let Some(target) = grid.row_mut(table, row) else {
                return Err(InputError::RowOutOfRange {
                    table,
                    row,
                    row_count: shape.row_count,
                });
            };
            for (name, cell) in cells {
                let key: FieldKey = name
                    .parse()
                    .map_err(|source| InputError::UnknownField { table, row, source })?;
                if key.is_calculated() {
                    continue;
                }
                let value = cell.as_f64().ok_or_else(|| InputError::InvalidNumber {
                    table,
                    row,
                    key,
                    value: match cell {
                        CellValue::Text(s) => s.clone(),
                        CellValue::Number(n) => n.to_string(),
                    },
                })?;
                target.set_month(key, value);
            }
        }
    }

    Ok(grid)
}

/// Every cell of the grid as a posted-values mapping. Calculated cells are
/// rounded; aggregates not yet computed read as 0.
pub fn grid_to_values(grid: &Grid, current_year: i32) -> FormValues {
    grid.tables()
        .iter()
        .enumerate()
        .map(|(t, table)| {
            let rows = table
                .rows()
                .iter()
                .enumerate()
                .map(|(r, row)| {
                    let cells = HEADLINES
                        .iter()
                        .map(|&key| {
                            let value = match key {
                                FieldKey::Year => f64::from(year_label(current_year, r)),
                                k if k.is_calculated() => round2(row.value(k).unwrap_or(0.0)),
                                k => row.value(k).unwrap_or(0.0),
                            };
                            (key.as_str().to_string(), CellValue::Number(value))
                        })
                        .collect();
                    (r, cells)
                })
                .collect();
            (t, rows)
        })
        .collect()
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub grid: Grid,
    pub values: FormValues,
    pub errors: Vec<ValidationError>,
    /// Set only when the submission was accepted.
    pub status: Option<String>,
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a grid and, if it passes, recompute every row's aggregates.
/// A rejected grid is returned untouched alongside its errors.
pub fn submit_grid(mut grid: Grid, current_year: i32) -> SubmitOutcome {
    let errors = validate(&grid);
    let status = if errors.is_empty() {
        grid.recompute();
        Some(VALID_MESSAGE.to_string())
    } else {
        None
    };
    let values = grid_to_values(&grid, current_year);
    SubmitOutcome {
        grid,
        values,
        errors,
        status,
    }
}

/// Parse posted values for `shape` and submit them.
pub fn submit(shape: GridShape, values: &FormValues, current_year: i32) -> Result<SubmitOutcome> {
    let grid = grid_from_values(shape, values)?;
    Ok(submit_grid(grid, current_year))
}
