use super::assert_close;
use crate::aggregate::{derive, quarter, round2, year_to_date};

#[test]
fn test_quarter_formula() {
    assert_close(quarter(10.0, 20.0, 30.0), 61.0 / 3.0);
    assert_close(quarter(1.0, 1.0, 1.0), 4.0 / 3.0);
}

/// Current behaviour, probably a defect: every average adds 1 before dividing,
/// so an empty row reports non-zero quarters. Kept until the figures are
/// signed off as wrong.
#[test]
fn test_plus_one_bias_on_empty_row() {
    let derived = derive(&[0.0; 12]);

    assert_close(derived.q1, 1.0 / 3.0);
    assert_close(derived.q2, 1.0 / 3.0);
    assert_close(derived.q3, 1.0 / 3.0);
    assert_close(derived.q4, 1.0 / 3.0);
    assert_close(derived.ytd, (4.0 / 3.0 + 1.0) / 4.0);

    let shown = derived.rounded();
    assert_eq!(shown.q1, 0.33);
    assert_eq!(shown.ytd, 0.58);
}

/// Same bias: a plain average of 10, 20, 30 would be 20, not 20.33.
#[test]
fn test_plus_one_bias_first_quarter_example() {
    let mut months = [0.0; 12];
    months[0] = 10.0;
    months[1] = 20.0;
    months[2] = 30.0;

    let shown = derive(&months).rounded();

    assert_eq!(shown.q1, 20.33);
    assert_eq!(shown.q2, 0.33);
    assert_eq!(shown.q3, 0.33);
    assert_eq!(shown.q4, 0.33);
    assert_eq!(shown.ytd, 5.58);
}

#[test]
fn test_ytd_uses_unrounded_quarters() {
    let q = 1.0 / 3.0;
    assert_close(year_to_date(q, q, q, q), (4.0 * q + 1.0) / 4.0);

    let mut months = [0.0; 12];
    months[0] = 10.0;
    months[1] = 20.0;
    months[2] = 30.0;
    let derived = derive(&months);
    assert_close(derived.ytd, (61.0 / 3.0 + 3.0 / 3.0 + 1.0) / 4.0);
}

#[test]
fn test_each_quarter_reads_its_own_months() {
    let months = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
    let derived = derive(&months);

    assert_close(derived.q1, 7.0 / 3.0);
    assert_close(derived.q2, 16.0 / 3.0);
    assert_close(derived.q3, 25.0 / 3.0);
    assert_close(derived.q4, 34.0 / 3.0);
}

#[test]
fn test_round2() {
    assert_eq!(round2(20.333_333), 20.33);
    assert_eq!(round2(5.583_333), 5.58);
    assert_eq!(round2(0.125_1), 0.13);
    assert_eq!(round2(-1.004), -1.0);
}
