//! Structural checks run on every submission.
//!
//! A table's filled cells (non-zero months) must form one contiguous run in
//! the flattened oldest-first grid, and all tables must fill the same slots.
//! Problems are collected, never raised: the form stays editable.

use serde::{Deserialize, Serialize};

use crate::model::{Grid, Table};

pub const GAP_MESSAGE: &str = "Gap";
pub const MISMATCH_MESSAGE: &str = "Tables are not the same!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Two consecutive filled slots are not adjacent.
    Gap,
    /// Two consecutive tables fill different slots.
    Mismatch,
}

/// One problem found in a submitted grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub table_index: usize,
    /// Row holding the first slot of the gap. Always `None` for mismatches.
    pub row_index: Option<usize>,
    /// For a gap, the position `k` in the filled list where
    /// `filled[k + 1] - filled[k] > 1`; for a mismatch, the table index.
    pub index: usize,
    pub message: String,
}

impl ValidationError {
    fn gap(table_index: usize, row_index: Option<usize>, index: usize) -> Self {
        Self {
            kind: ErrorKind::Gap,
            table_index,
            row_index,
            index,
            message: GAP_MESSAGE.to_string(),
        }
    }

    fn mismatch(table_index: usize) -> Self {
        Self {
            kind: ErrorKind::Mismatch,
            table_index,
            row_index: None,
            index: table_index,
            message: MISMATCH_MESSAGE.to_string(),
        }
    }
}

/// Ascending flattened slots holding a non-zero value.
pub fn filled_positions(values: &[f64]) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0.0)
        .map(|(i, _)| i)
        .collect()
}

/// Indices `k` where `positions[k + 1]` does not directly follow `positions[k]`.
pub fn gap_indices(positions: &[usize]) -> Vec<usize> {
    positions
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1] - pair[0] != 1)
        .map(|(k, _)| k)
        .collect()
}

fn table_gaps(table_index: usize, table: &Table, positions: &[usize]) -> Vec<ValidationError> {
    gap_indices(positions)
        .into_iter()
        .map(|k| ValidationError::gap(table_index, table.row_of_slot(positions[k]), k))
        .collect()
}

/// Check every table for gaps, then consecutive tables for equal patterns.
pub fn validate(grid: &Grid) -> Vec<ValidationError> {
    let patterns: Vec<Vec<usize>> = grid
        .tables()
        .iter()
        .map(|table| filled_positions(&table.flatten()))
        .collect();

    let mut errors: Vec<ValidationError> = grid
        .tables()
        .iter()
        .zip(&patterns)
        .enumerate()
        .flat_map(|(i, (table, positions))| table_gaps(i, table, positions))
        .collect();

    errors.extend(
        patterns
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] != pair[1])
            .map(|(i, _)| ValidationError::mismatch(i)),
    );

    errors
}
