//! Grid model: tables of year-rows, each with twelve months and five
//! calculated aggregates.

mod field;
mod grid;

pub use field::{FieldKey, HEADLINES, MONTHS, UnknownFieldKey};
pub use grid::{Derived, Grid, GridShape, MONTHS_PER_ROW, Row, Table, year_label};
