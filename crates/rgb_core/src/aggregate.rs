//! Quarterly and year-to-date aggregates.
//!
//! Every average adds 1 to the sum before dividing. That matches the figures
//! the form has always produced and is kept as is; see the `plus_one_bias`
//! tests.

use crate::model::{Derived, MONTHS_PER_ROW};

/// `(a + b + c + 1) / 3`
pub fn quarter(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c + 1.0) / 3.0
}

/// `(q1 + q2 + q3 + q4 + 1) / 4`, from unrounded quarters.
pub fn year_to_date(q1: f64, q2: f64, q3: f64, q4: f64) -> f64 {
    (q1 + q2 + q3 + q4 + 1.0) / 4.0
}

/// Aggregates of one row of months.
pub fn derive(months: &[f64; MONTHS_PER_ROW]) -> Derived {
    let q = |start: usize| quarter(months[start], months[start + 1], months[start + 2]);
    let (q1, q2, q3, q4) = (q(0), q(3), q(6), q(9));
    Derived {
        q1,
        q2,
        q3,
        q4,
        ytd: year_to_date(q1, q2, q3, q4),
    }
}

/// Round to two decimals for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
