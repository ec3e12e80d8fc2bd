//! Start-age computation: the signed civil duration from the birth
//! instant to the adjacent jie term the luck direction points at,
//! converted to a (years, months, days) age via the traditional
//! three-days-one-year convention.

use crate::direction::LuckDirection;

/// A luck-cycle start age, expressed in the traditional
/// three-days-one-year convention rather than calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Compute the start age from the birth instant's Julian Date (UT), the
/// luck direction, and the surrounding jie boundaries (as resolved by
/// `bazi_pillars::BirthResolution::month_jie` / `next_jie`): the
/// duration runs to the next jie if forward, the prior (month-opening)
/// jie if backward.
pub fn start_age(
    birth_jd_ut: f64,
    direction: LuckDirection,
    month_jie_jd: f64,
    next_jie_jd: f64,
) -> StartAge {
    let target_jd = match direction {
        LuckDirection::Forward => next_jie_jd,
        LuckDirection::Backward => month_jie_jd,
    };
    let total_days = (target_jd - birth_jd_ut).abs();

    let years_f = (total_days / 3.0).floor();
    let months_f = ((total_days / 3.0 - years_f) * 12.0).floor();
    let days_f = ((total_days / 3.0 - years_f) * 12.0 - months_f) * 30.0;

    StartAge {
        years: years_f as u32,
        months: months_f as u32,
        days: days_f.round() as u32,
    }
}

/// Convenience wrapper over [`start_age`] that locates the surrounding
/// jie boundaries itself via `bazi_astro::prior_and_next_jie`, for
/// callers that only have the birth instant on hand.
pub fn start_age_for_birth(birth_jd_ut: f64, direction: LuckDirection) -> StartAge {
    let (prior_jie, next_jie) = bazi_astro::prior_and_next_jie(birth_jd_ut);
    start_age(birth_jd_ut, direction, prior_jie.1, next_jie.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_days_is_one_year() {
        let age = start_age(0.0, LuckDirection::Forward, 0.0, 3.0);
        assert_eq!(age, StartAge { years: 1, months: 0, days: 0 });
    }

    #[test]
    fn backward_direction_uses_prior_jie() {
        // |10 - 4| = 6 days -> 2 years exactly.
        let age = start_age(10.0, LuckDirection::Backward, 4.0, 20.0);
        assert_eq!(age, StartAge { years: 2, months: 0, days: 0 });
    }

    #[test]
    fn fractional_day_apportions_months() {
        // 1.5 days -> 0.5 years -> 6 months, 0 days.
        let age = start_age(0.0, LuckDirection::Forward, 0.0, 1.5);
        assert_eq!(age, StartAge { years: 0, months: 6, days: 0 });
    }

    #[test]
    fn start_age_for_birth_brackets_a_jie() {
        let jd = bazi_time::calendar_to_jd(2024, 6, 1.0);
        let forward = start_age_for_birth(jd, LuckDirection::Forward);
        let backward = start_age_for_birth(jd, LuckDirection::Backward);
        assert!(forward.years < 20);
        assert!(backward.years < 20);
    }
}
