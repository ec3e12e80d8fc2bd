//! The Chinese lunisolar calendar: an encoded year table covering
//! 1900-2100 and solar/lunar conversion built on it.

pub mod error;
pub mod lunar_date;
pub mod year_table;

pub use error::CalendarError;
pub use lunar_date::{lunar_to_solar, solar_to_lunar, LunarDate};
pub use year_table::{leap_month, leap_month_days, month_days, year_days, FIRST_YEAR, LAST_YEAR};
