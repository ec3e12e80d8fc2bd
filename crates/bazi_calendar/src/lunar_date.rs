//! Solar (Gregorian civil) <-> Chinese lunisolar date conversion.

use std::sync::OnceLock;

use bazi_time::{calendar_to_jd, jd_to_calendar};

use crate::error::CalendarError;
use crate::year_table::{self, FIRST_YEAR, LAST_YEAR};

/// Julian Date of lunar New Year's Day, 1900 (the table's epoch).
fn epoch_jd() -> f64 {
    calendar_to_jd(1900, 1, 31.0)
}

/// A Chinese lunisolar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

/// Table of lunar-new-year civil (solar) Julian Dates, one per table
/// year, derived once from [`year_table::LUNAR_YEAR_INFO`] rather than
/// hand-maintained as an independent second table.
fn spring_festival_table() -> &'static [f64] {
    static TABLE: OnceLock<Vec<f64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut out = Vec::with_capacity((LAST_YEAR - FIRST_YEAR + 1) as usize);
        let mut jd = epoch_jd();
        for year in FIRST_YEAR..=LAST_YEAR {
            out.push(jd);
            jd += year_table::year_days(year) as f64;
        }
        out
    })
}

fn spring_festival_jd(year: i32) -> Option<f64> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return None;
    }
    spring_festival_table()
        .get((year - FIRST_YEAR) as usize)
        .copied()
}

/// Convert a Gregorian civil date to its lunisolar equivalent.
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError> {
    let jd = calendar_to_jd(year, month, day as f64).floor();

    // Find the lunar year whose New Year's Day is the latest one on or
    // before `jd`: Gregorian year `year` or the one just before it, since
    // lunar New Year always falls within Gregorian Jan-Feb.
    let lunar_year = [year, year - 1]
        .into_iter()
        .find(|&y| spring_festival_jd(y).is_some_and(|new_year_jd| new_year_jd <= jd))
        .ok_or(CalendarError::YearOutOfRange(year))?;

    let new_year_jd = spring_festival_jd(lunar_year).ok_or(CalendarError::YearOutOfRange(lunar_year))?;
    let mut remaining = (jd - new_year_jd) as i64;

    let leap = year_table::leap_month(lunar_year);
    let mut month_num = 1u32;
    let mut is_leap_month = false;

    loop {
        let days_in_month = if is_leap_month {
            year_table::leap_month_days(lunar_year) as i64
        } else {
            year_table::month_days(lunar_year, month_num) as i64
        };

        if remaining < days_in_month {
            break;
        }
        remaining -= days_in_month;

        if !is_leap_month && leap == month_num {
            is_leap_month = true;
        } else {
            if is_leap_month {
                is_leap_month = false;
            }
            month_num += 1;
        }
    }

    Ok(LunarDate {
        year: lunar_year,
        month: month_num,
        day: (remaining + 1) as u32,
        is_leap_month,
    })
}

/// Convert a lunisolar date back to its Gregorian civil equivalent.
pub fn lunar_to_solar(date: LunarDate) -> Result<(i32, u32, u32), CalendarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&date.year) {
        return Err(CalendarError::YearOutOfRange(date.year));
    }
    if date.month == 0 || date.month > 12 {
        return Err(CalendarError::InvalidLunarMonth {
            year: date.year,
            month: date.month,
        });
    }
    if date.is_leap_month && year_table::leap_month(date.year) != date.month {
        return Err(CalendarError::InvalidLunarMonth {
            year: date.year,
            month: date.month,
        });
    }

    let max_day = if date.is_leap_month {
        year_table::leap_month_days(date.year)
    } else {
        year_table::month_days(date.year, date.month)
    };
    if date.day == 0 || date.day > max_day {
        return Err(CalendarError::InvalidLunarDay {
            year: date.year,
            month: date.month,
            day: date.day,
        });
    }

    let new_year_jd =
        spring_festival_jd(date.year).ok_or(CalendarError::YearOutOfRange(date.year))?;
    let leap = year_table::leap_month(date.year);

    let mut offset = 0i64;
    for m in 1..date.month {
        offset += year_table::month_days(date.year, m) as i64;
        if leap == m {
            offset += year_table::leap_month_days(date.year) as i64;
        }
    }
    if date.is_leap_month {
        offset += year_table::month_days(date.year, date.month) as i64;
    }
    offset += (date.day - 1) as i64;

    let jd = new_year_jd + offset as f64;
    let (y, m, d) = jd_to_calendar(jd);
    Ok((y, m, d.round() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_festival_1900_is_jan_31() {
        let jd = spring_festival_jd(1900).unwrap();
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m, d.round() as u32), (1900, 1, 31));
    }

    #[test]
    fn roundtrip_ordinary_dates() {
        let cases = [(2024, 6, 15), (2000, 1, 1), (1999, 12, 31), (2050, 3, 3)];
        for (y, m, d) in cases {
            let lunar = solar_to_lunar(y, m, d).unwrap();
            let (y2, m2, d2) = lunar_to_solar(lunar).unwrap();
            assert_eq!((y, m, d), (y2, m2, d2), "roundtrip failed for {y}-{m}-{d}");
        }
    }

    #[test]
    fn lunar_new_year_day_is_month_1_day_1() {
        let new_year_jd = spring_festival_jd(2024).unwrap();
        let (y, m, d) = jd_to_calendar(new_year_jd);
        let lunar = solar_to_lunar(y, m, d.round() as u32).unwrap();
        assert_eq!(lunar.month, 1);
        assert_eq!(lunar.day, 1);
        assert!(!lunar.is_leap_month);
    }

    #[test]
    fn out_of_range_year_reports_error() {
        let err = solar_to_lunar(1899, 1, 1).unwrap_err();
        assert!(matches!(err, CalendarError::YearOutOfRange(_)));
    }

}
