//! Errors for solar/lunar calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from lunisolar calendar conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The requested year falls outside the table's supported range.
    YearOutOfRange(i32),
    /// The requested lunar month does not exist in that lunar year (not
    /// the leap month, and greater than 12, or a leap-month request for
    /// a year with no leap month).
    InvalidLunarMonth { year: i32, month: u32 },
    /// The requested lunar day exceeds that month's day count.
    InvalidLunarDay { year: i32, month: u32, day: u32 },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => {
                write!(f, "lunar year {y} is outside the supported table range")
            }
            Self::InvalidLunarMonth { year, month } => {
                write!(f, "lunar month {month} does not exist in year {year}")
            }
            Self::InvalidLunarDay { year, month, day } => {
                write!(f, "lunar day {day} does not exist in year {year} month {month}")
            }
        }
    }
}

impl Error for CalendarError {}
