//! Renderable form tree: what a UI layer needs to draw the tables.

use serde::{Deserialize, Serialize};

use crate::aggregate::round2;
use crate::form::SubmitOutcome;
use crate::model::{FieldKey, Grid, HEADLINES, Row, year_label};
use crate::validate::ValidationError;

pub const FORM_ID: &str = "rgbTable";
/// Element id a partial re-render replaces.
pub const WRAPPER_ID: &str = "rgb-table";
/// Input step of every number cell.
pub const CELL_STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormAction {
    AddTable,
    AddRow,
    Submit,
}

impl FormAction {
    pub fn label(self) -> &'static str {
        match self {
            FormAction::AddTable => "Add table",
            FormAction::AddRow => "Add year",
            FormAction::Submit => "Submit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub action: FormAction,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub key: FieldKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub key: FieldKey,
    pub value: f64,
    pub disabled: bool,
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowTree {
    /// Index into the posted-values mapping.
    pub index: usize,
    pub year: i32,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableTree {
    pub index: usize,
    /// Oldest year first, as rendered.
    pub rows: Vec<RowTree>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormTree {
    pub form_id: String,
    pub wrapper_id: String,
    pub buttons: Vec<Button>,
    pub headlines: Vec<Headline>,
    pub tables: Vec<TableTree>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl FormTree {
    /// Attach the status message and errors of a submission.
    #[must_use]
    pub fn with_outcome(mut self, outcome: &SubmitOutcome) -> Self {
        self.messages.extend(outcome.status.iter().cloned());
        self.errors.extend(outcome.errors.iter().cloned());
        self
    }
}

fn build_row(grid_row: &Row, index: usize, current_year: i32) -> RowTree {
    let year = year_label(current_year, index);
    let cells = HEADLINES
        .iter()
        .map(|&key| {
            let value = match key {
                FieldKey::Year => f64::from(year),
                k if k.is_calculated() => round2(grid_row.value(k).unwrap_or(0.0)),
                k => grid_row.value(k).unwrap_or(0.0),
            };
            Cell {
                key,
                value,
                disabled: key.is_calculated(),
                step: CELL_STEP,
            }
        })
        .collect();
    RowTree { index, year, cells }
}

/// Form tree for `grid`, with year labels relative to `current_year`.
pub fn build_form(grid: &Grid, current_year: i32) -> FormTree {
    let buttons = [FormAction::AddTable, FormAction::AddRow, FormAction::Submit]
        .into_iter()
        .map(|action| Button {
            action,
            label: action.label().to_string(),
        })
        .collect();

    let headlines = HEADLINES
        .iter()
        .map(|&key| Headline {
            key,
            label: key.label().to_string(),
        })
        .collect();

    let tables = grid
        .tables()
        .iter()
        .enumerate()
        .map(|(index, table)| TableTree {
            index,
            rows: table
                .rows()
                .iter()
                .enumerate()
                .rev()
                .map(|(r, row)| build_row(row, r, current_year))
                .collect(),
        })
        .collect();

    FormTree {
        form_id: FORM_ID.to_string(),
        wrapper_id: WRAPPER_ID.to_string(),
        buttons,
        headlines,
        tables,
        messages: Vec::new(),
        errors: Vec::new(),
    }
}
