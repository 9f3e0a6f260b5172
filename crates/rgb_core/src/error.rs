use std::fmt;

use crate::model::{FieldKey, UnknownFieldKey};

/// Errors converting posted form values into a grid
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A month cell holds text that is not a number
    InvalidNumber {
        table: usize,
        row: usize,
        key: FieldKey,
        value: String,
    },
    TableOutOfRange {
        table: usize,
        table_count: usize,
    },
    RowOutOfRange {
        table: usize,
        row: usize,
        row_count: usize,
    },
    UnknownField {
        table: usize,
        row: usize,
        source: UnknownFieldKey,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidNumber {
                table,
                row,
                key,
                value,
            } => write!(f, "table {table}, row {row}: {key} is not a number ({value:?})"),
            InputError::TableOutOfRange { table, table_count } => {
                write!(f, "table {table} out of range (form has {table_count})")
            }
            InputError::RowOutOfRange {
                table,
                row,
                row_count,
            } => write!(
                f,
                "table {table}: row {row} out of range (form has {row_count})"
            ),
            InputError::UnknownField { table, row, source } => {
                write!(f, "table {table}, row {row}: {source}")
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::UnknownField { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InputError>;
