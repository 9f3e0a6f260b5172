use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A column of a year-row.
///
/// Month keys hold raw input; `Year` and the quarter/YTD keys are calculated
/// and rendered read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Year,
    Jan,
    Feb,
    Mar,
    Q1,
    Apr,
    May,
    Jun,
    Q2,
    Jul,
    Aug,
    Sep,
    Q3,
    Oct,
    Nov,
    Dec,
    Q4,
    Ytd,
}

/// Month columns in calendar order. Index in this array is the month slot.
pub const MONTHS: [FieldKey; 12] = [
    FieldKey::Jan,
    FieldKey::Feb,
    FieldKey::Mar,
    FieldKey::Apr,
    FieldKey::May,
    FieldKey::Jun,
    FieldKey::Jul,
    FieldKey::Aug,
    FieldKey::Sep,
    FieldKey::Oct,
    FieldKey::Nov,
    FieldKey::Dec,
];

/// Columns in the order they are rendered in a table header.
pub const HEADLINES: [FieldKey; 18] = [
    FieldKey::Year,
    FieldKey::Jan,
    FieldKey::Feb,
    FieldKey::Mar,
    FieldKey::Q1,
    FieldKey::Apr,
    FieldKey::May,
    FieldKey::Jun,
    FieldKey::Q2,
    FieldKey::Jul,
    FieldKey::Aug,
    FieldKey::Sep,
    FieldKey::Q3,
    FieldKey::Oct,
    FieldKey::Nov,
    FieldKey::Dec,
    FieldKey::Q4,
    FieldKey::Ytd,
];

impl FieldKey {
    /// Key used in the nested form-values mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Year => "year",
            FieldKey::Jan => "jan",
            FieldKey::Feb => "feb",
            FieldKey::Mar => "mar",
            FieldKey::Q1 => "q1",
            FieldKey::Apr => "apr",
            FieldKey::May => "may",
            FieldKey::Jun => "jun",
            FieldKey::Q2 => "q2",
            FieldKey::Jul => "jul",
            FieldKey::Aug => "aug",
            FieldKey::Sep => "sep",
            FieldKey::Q3 => "q3",
            FieldKey::Oct => "oct",
            FieldKey::Nov => "nov",
            FieldKey::Dec => "dec",
            FieldKey::Q4 => "q4",
            FieldKey::Ytd => "ytd",
        }
    }

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Year => "Year",
            FieldKey::Jan => "Jan",
            FieldKey::Feb => "Feb",
            FieldKey::Mar => "Mar",
            FieldKey::Q1 => "Q1",
            FieldKey::Apr => "Apr",
            FieldKey::May => "May",
            FieldKey::Jun => "Jun",
            FieldKey::Q2 => "Q2",
            FieldKey::Jul => "Jul",
            FieldKey::Aug => "Aug",
            FieldKey::Sep => "Sep",
            FieldKey::Q3 => "Q3",
            FieldKey::Oct => "Oct",
            FieldKey::Nov => "Nov",
            FieldKey::Dec => "Dec",
            FieldKey::Q4 => "Q4",
            FieldKey::Ytd => "YTD",
        }
    }

    /// Month slot (0 = January) for month keys, `None` otherwise.
    pub fn month_index(self) -> Option<usize> {
        MONTHS.iter().position(|&m| m == self)
    }

    /// Calculated cells are never taken from user input.
    pub fn is_calculated(self) -> bool {
        self.month_index().is_none()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = UnknownFieldKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HEADLINES
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFieldKey(s.to_string()))
    }
}

/// A form-values key that names no column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldKey(pub String);

impl fmt::Display for UnknownFieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field key {:?}", self.0)
    }
}

impl std::error::Error for UnknownFieldKey {}
