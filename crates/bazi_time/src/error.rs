//! Error types for time and civil-instant conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Julian Day / civil-instant conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Civil year outside the supported [1900, 2100] range.
    YearOutOfRange(i32),
    /// A calendar field (month, day, hour, minute, second) is out of its valid range.
    InvalidField(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => write!(f, "year {y} is outside the supported [1900, 2100] range"),
            Self::InvalidField(field) => write!(f, "invalid {field}"),
        }
    }
}

impl Error for TimeError {}
