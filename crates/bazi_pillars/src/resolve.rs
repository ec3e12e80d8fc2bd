//! Ties the astronomy (L0) and true-solar-time (L1) layers to pillar
//! derivation: resolving a civil birth instant to the BaZi year/month
//! boundaries that the solar terms actually define.

use bazi_astro::{prior_and_next_jie, solar_term_instant, SolarTerm};
use bazi_civil::TrueSolarReduction;
use bazi_time::{calendar_to_jd, CivilInstant};

use crate::derive::{day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::error::PillarError;
use crate::four_pillars::FourPillars;
use crate::types::Branch;

/// Resolve a civil birth instant (already converted to true solar time
/// by the caller, or passed through unchanged if that correction is not
/// wanted) into the branch of the BaZi month it falls in, per the
/// `prior_and_next_jie` jie-term boundary.
pub fn month_branch_for_instant(jd_ut: f64) -> Branch {
    let (prior_jie, _next_jie) = prior_and_next_jie(jd_ut);
    let branch_index = prior_jie.0.opens_month_branch().expect("prior_and_next_jie always returns jie terms");
    Branch::from_index(branch_index)
}

/// Resolve the BaZi year (shifted so a new year begins at LiChun, not
/// Jan 1) for a civil birth instant.
pub fn bazi_year_for_instant(jd_ut: f64) -> i32 {
    let (calendar_year, _, _) = bazi_time::jd_to_calendar(jd_ut);
    let lichun_jd = solar_term_instant(SolarTerm::LiChun, calendar_year);
    if jd_ut >= lichun_jd {
        calendar_year
    } else {
        calendar_year - 1
    }
}

/// Everything the four-pillar derivation produces along the way: the
/// chart itself, plus the astronomical intermediates that justify it.
/// `bazi_core`'s result record is assembled directly from this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthResolution {
    pub four_pillars: FourPillars,
    /// The true-solar-reduced instant (UT Julian Date) pillars were
    /// actually derived from.
    pub true_solar_jd_ut: f64,
    pub reduction: TrueSolarReduction,
    /// `true` if the DST correction of spec.md §4.2 was applied (i.e.
    /// the caller asked for it and the instant fell in a window).
    pub dst_applied: bool,
    /// BaZi year: the civil year, shifted back one at LiChun.
    pub bazi_year: i32,
    /// The jie term (and its UT instant) that opened the current BaZi
    /// month.
    pub month_jie: (SolarTerm, f64),
    /// The next jie term (and its UT instant) after the birth instant.
    pub next_jie: (SolarTerm, f64),
}

/// Derive the complete four-pillar chart from an instant that is
/// already true solar time (no further longitude/equation-of-time
/// reduction applied), given the offset it's labeled under and whether
/// the 23:00-23:59 hour belongs to the next day's pillar
/// (early-rat-split). Used both by [`four_pillars_for_birth`] after it
/// performs the reduction, and directly by callers whose input clock is
/// already true solar time.
pub fn four_pillars_for_true_solar_instant(
    true_solar_jd_ut: f64,
    offset_minutes: i32,
    early_rat_split: bool,
) -> Result<BirthResolution, PillarError> {
    let (_, _, _, true_solar_hour, ..) = local_civil_fields_at(true_solar_jd_ut, offset_minutes);

    let bazi_year = bazi_year_for_instant(true_solar_jd_ut);
    let year = year_pillar(bazi_year);

    let (month_jie, next_jie) = prior_and_next_jie(true_solar_jd_ut);
    let month_branch =
        Branch::from_index(month_jie.0.opens_month_branch().expect("prior jie is always a jie term"));
    let month = month_pillar(year.stem, month_branch);

    let day = day_pillar(true_solar_jd_ut, true_solar_hour, early_rat_split)?;
    let hour_pillar = hour_pillar(day.stem, true_solar_hour)?;

    Ok(BirthResolution {
        four_pillars: FourPillars::new(year, month, day, hour_pillar),
        true_solar_jd_ut,
        reduction: TrueSolarReduction::compute(true_solar_jd_ut, 0.0, 0.0),
        dst_applied: false,
        bazi_year,
        month_jie,
        next_jie,
    })
}

/// Derive the complete four-pillar chart for a civil birth instant,
/// given the observer's longitude and zone meridian (for the true-solar
/// reduction), whether to apply the historical DST correction, and
/// whether the 23:00-23:59 hour belongs to the next day's pillar
/// (early-rat-split).
pub fn four_pillars_for_birth(
    instant: CivilInstant,
    longitude_deg: f64,
    zone_meridian_deg: f64,
    apply_dst: bool,
    early_rat_split: bool,
) -> Result<BirthResolution, PillarError> {
    let jd_ut = instant.jd_ut();
    let reduction = TrueSolarReduction::compute(jd_ut, longitude_deg, zone_meridian_deg);
    let mut total_minutes = reduction.total_minutes();
    let dst_applied = apply_dst && bazi_civil::is_dst_active(jd_ut);
    if apply_dst {
        total_minutes = bazi_civil::apply_dst_correction(jd_ut, true, total_minutes);
    }
    let true_solar_jd = jd_ut + total_minutes / 1_440.0;

    let mut resolution =
        four_pillars_for_true_solar_instant(true_solar_jd, instant.offset().as_minutes(), early_rat_split)?;
    resolution.reduction = reduction;
    resolution.dst_applied = dst_applied;
    Ok(resolution)
}

fn local_civil_fields_at(jd_ut: f64, offset_minutes: i32) -> (i32, u32, u32, u32, u32, f64) {
    let offset = bazi_time::UtcOffset::from_hm(0, offset_minutes);
    CivilInstant::from_jd_ut(jd_ut, offset).civil_fields()
}

/// The Julian Date (UT) at civil midnight of `year`-`month`-`day`, used
/// by callers that only have calendar fields and an offset (rather than
/// an already-built [`CivilInstant`]).
pub fn jd_ut_at_civil_midnight(year: i32, month: u32, day: f64) -> f64 {
    calendar_to_jd(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_time::UtcOffset;

    #[test]
    fn month_branch_matches_lichun_opening() {
        let lichun_jd = solar_term_instant(SolarTerm::LiChun, 2024);
        let branch = month_branch_for_instant(lichun_jd + 1.0);
        assert_eq!(branch, Branch::Yin);
    }

    #[test]
    fn bazi_year_shifts_before_lichun() {
        let lichun_jd = solar_term_instant(SolarTerm::LiChun, 2024);
        let before = bazi_year_for_instant(lichun_jd - 1.0);
        let after = bazi_year_for_instant(lichun_jd + 1.0);
        assert_eq!(before, 2023);
        assert_eq!(after, 2024);
    }

    #[test]
    fn four_pillars_for_birth_produces_a_chart() {
        let instant =
            CivilInstant::from_civil(1990, 6, 15, 10, 30, 0.0, UtcOffset::from_hm(8, 0)).unwrap();
        let resolution = four_pillars_for_birth(instant, 116.4, 120.0, false, true).unwrap();
        let chart = resolution.four_pillars;
        assert_eq!(chart.year.stem.index() % 2, chart.year.branch.index() % 2);
        assert_eq!(chart.month.stem.index() % 2, chart.month.branch.index() % 2);
        assert!(!resolution.dst_applied);
    }

    #[test]
    fn dst_applied_flag_reflects_window_membership() {
        let in_window =
            CivilInstant::from_civil(1986, 7, 1, 15, 30, 0.0, UtcOffset::from_hm(8, 0)).unwrap();
        let resolution = four_pillars_for_birth(in_window, 120.0, 120.0, true, true).unwrap();
        assert!(resolution.dst_applied);

        let outside_window =
            CivilInstant::from_civil(1995, 7, 1, 15, 30, 0.0, UtcOffset::from_hm(8, 0)).unwrap();
        let resolution = four_pillars_for_birth(outside_window, 120.0, 120.0, true, true).unwrap();
        assert!(!resolution.dst_applied);
    }

    #[test]
    fn true_solar_entry_point_matches_birth_reduction_at_zero_offset() {
        // At longitude == zone meridian and an equation-of-time-free instant
        // far enough from the discontinuity to ignore rounding, the two
        // entry points should derive the same chart for the same jd.
        let instant =
            CivilInstant::from_civil(1990, 6, 15, 10, 30, 0.0, UtcOffset::from_hm(8, 0)).unwrap();
        let via_birth = four_pillars_for_birth(instant, 120.0, 120.0, false, true).unwrap();
        let direct =
            four_pillars_for_true_solar_instant(via_birth.true_solar_jd_ut, 480, true).unwrap();
        assert_eq!(direct.four_pillars, via_birth.four_pillars);
        assert!(!direct.dst_applied);
    }
}
