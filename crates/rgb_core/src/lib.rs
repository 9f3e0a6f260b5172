//! Year-by-month input grids with quarterly aggregates.
//!
//! A form is a set of tables; each table holds one row per year with twelve
//! month values and five calculated cells (Q1-Q4 and YTD). Users grow the form
//! a table or a year at a time, and every submission is checked for:
//! - contiguous filled months within each table
//! - identical filled months across all tables
//!
//! ```ignore
//! use rgb_core::{GridShape, FormValues, submit};
//!
//! let shape = GridShape::new().add_table();
//! let outcome = submit(shape, &posted, rgb_core::current_year())?;
//! if outcome.is_valid() {
//!     // outcome.values holds the recomputed quarters
//! }
//! ```

#![warn(clippy::all)]

pub mod aggregate;
pub mod builder;
pub mod error;
pub mod form;
pub mod model;
pub mod validate;

#[cfg(test)]
mod tests;

pub use builder::{FormTree, build_form};
pub use error::InputError;
pub use form::{
    CellValue, FormValues, SubmitOutcome, grid_from_values, grid_to_values, submit, submit_grid,
};
pub use model::{FieldKey, Grid, GridShape, Row, Table};
pub use validate::{ErrorKind, ValidationError, validate};

/// Calendar year in the system time zone.
pub fn current_year() -> i32 {
    i32::from(jiff::Zoned::now().year())
}
