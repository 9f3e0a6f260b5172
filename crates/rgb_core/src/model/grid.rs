use serde::{Deserialize, Serialize};

use super::field::{FieldKey, MONTHS};
use crate::aggregate;

/// Number of month slots per year-row.
pub const MONTHS_PER_ROW: usize = 12;

/// Table and row counts of a form.
///
/// A form starts at one table with one row and only ever grows, one table or
/// one row at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub table_count: usize,
    pub row_count: usize,
}

impl Default for GridShape {
    fn default() -> Self {
        Self::new()
    }
}

impl GridShape {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table_count: 1,
            row_count: 1,
        }
    }

    /// Shape after pressing "Add table".
    #[must_use]
    pub fn add_table(self) -> Self {
        Self {
            table_count: self.table_count + 1,
            ..self
        }
    }

    /// Shape after pressing "Add year".
    #[must_use]
    pub fn add_row(self) -> Self {
        Self {
            row_count: self.row_count + 1,
            ..self
        }
    }

    /// Month slots in one flattened table.
    pub fn slot_count(&self) -> usize {
        self.row_count * MONTHS_PER_ROW
    }
}

/// Quarterly and year-to-date aggregates of one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Derived {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
    pub ytd: f64,
}

impl Derived {
    /// Value of a calculated column; `None` for months and `Year`.
    pub fn get(&self, key: FieldKey) -> Option<f64> {
        match key {
            FieldKey::Q1 => Some(self.q1),
            FieldKey::Q2 => Some(self.q2),
            FieldKey::Q3 => Some(self.q3),
            FieldKey::Q4 => Some(self.q4),
            FieldKey::Ytd => Some(self.ytd),
            _ => None,
        }
    }

    /// Copy with every value rounded for display.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            q1: aggregate::round2(self.q1),
            q2: aggregate::round2(self.q2),
            q3: aggregate::round2(self.q3),
            q4: aggregate::round2(self.q4),
            ytd: aggregate::round2(self.ytd),
        }
    }
}

/// One year of month values.
///
/// `derived` is either absent or the aggregate of the current months: any
/// month change clears it, and only [`Row::recompute`] fills it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    months: [f64; MONTHS_PER_ROW],
    #[serde(default)]
    derived: Option<Derived>,
}

impl Row {
    pub fn new(months: [f64; MONTHS_PER_ROW]) -> Self {
        Self {
            months,
            derived: None,
        }
    }

    pub fn months(&self) -> &[f64; MONTHS_PER_ROW] {
        &self.months
    }

    pub fn month(&self, key: FieldKey) -> Option<f64> {
        key.month_index().map(|i| self.months[i])
    }

    /// Set one month slot. Returns false if `key` is not a month.
    pub fn set_month(&mut self, key: FieldKey, value: f64) -> bool {
        let Some(i) = key.month_index() else {
            return false;
        };
        if self.months[i] != value {
            self.months[i] = value;
            self.derived = None;
        }
        true
    }

    /// Replace all months, keeping the aggregates if nothing changed.
    pub fn set_months(&mut self, months: [f64; MONTHS_PER_ROW]) {
        if self.months != months {
            self.months = months;
            self.derived = None;
        }
    }

    pub fn derived(&self) -> Option<&Derived> {
        self.derived.as_ref()
    }

    pub fn recompute(&mut self) -> Derived {
        let derived = aggregate::derive(&self.months);
        self.derived = Some(derived);
        derived
    }

    /// Value of any column, with calculated cells as last computed.
    /// `Year` is not stored on the row; see [`year_label`].
    pub fn value(&self, key: FieldKey) -> Option<f64> {
        match key.month_index() {
            Some(i) => Some(self.months[i]),
            None => self.derived.and_then(|d| d.get(key)),
        }
    }
}

/// Year shown for the row at `row_index`. Row 0 is last year; each appended
/// row is one year older. Saturates at `i32::MIN`.
pub fn year_label(current_year: i32, row_index: usize) -> i32 {
    let offset = i32::try_from(row_index).unwrap_or(i32::MAX);
    current_year.saturating_sub(offset).saturating_sub(1)
}

/// Rows of one table, newest year first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn with_rows(row_count: usize) -> Self {
        Self {
            rows: vec![Row::default(); row_count],
        }
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Month values oldest row first, January to December within a row.
    pub fn flatten(&self) -> Vec<f64> {
        self.rows
            .iter()
            .rev()
            .flat_map(|row| row.months().iter().copied())
            .collect()
    }

    /// Row index holding the given flattened slot.
    pub fn row_of_slot(&self, slot: usize) -> Option<usize> {
        let chronological = slot / MONTHS_PER_ROW;
        (chronological < self.rows.len()).then(|| self.rows.len() - 1 - chronological)
    }

    /// Month key of a flattened slot.
    pub fn month_of_slot(slot: usize) -> FieldKey {
        MONTHS[slot % MONTHS_PER_ROW]
    }

    fn grow_to(&mut self, row_count: usize) {
        if self.rows.len() < row_count {
            self.rows.resize(row_count, Row::default());
        }
    }
}

/// Every table of one form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    shape: GridShape,
    tables: Vec<Table>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::with_shape(GridShape::new())
    }
}

impl Grid {
    /// Blank grid of the given shape.
    pub fn with_shape(shape: GridShape) -> Self {
        Self {
            shape,
            tables: vec![Table::with_rows(shape.row_count); shape.table_count],
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    pub fn table_mut(&mut self, index: usize) -> Option<&mut Table> {
        self.tables.get_mut(index)
    }

    pub fn row_mut(&mut self, table: usize, row: usize) -> Option<&mut Row> {
        self.tables.get_mut(table).and_then(|t| t.row_mut(row))
    }

    /// Grow to `shape`, keeping every entered value. A smaller shape is
    /// ignored on that axis: tables and rows are never removed.
    pub fn resize(&mut self, shape: GridShape) {
        let shape = GridShape {
            table_count: shape.table_count.max(self.shape.table_count),
            row_count: shape.row_count.max(self.shape.row_count),
        };
        for table in &mut self.tables {
            table.grow_to(shape.row_count);
        }
        self.tables
            .resize(shape.table_count, Table::with_rows(shape.row_count));
        self.shape = shape;
    }

    /// Copy the month values of `input` over this grid. Rows whose months did
    /// not change keep their aggregates.
    pub fn apply_months(&mut self, input: &Grid) {
        self.resize(input.shape);
        for (table, source) in self.tables.iter_mut().zip(&input.tables) {
            for (row, source_row) in table.rows.iter_mut().zip(&source.rows) {
                row.set_months(*source_row.months());
            }
        }
    }

    /// Recompute aggregates of every row.
    pub fn recompute(&mut self) {
        for row in self.tables.iter_mut().flat_map(|t| t.rows.iter_mut()) {
            row.recompute();
        }
    }
}
