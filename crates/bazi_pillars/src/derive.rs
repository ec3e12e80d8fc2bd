//! Year/month/day/hour pillar derivation rules.

use crate::error::PillarError;
use crate::types::{Branch, Pillar, Stem};

/// 1984 is a Jia-Zi (cycle 0) sexagenary year — the fixed reference point
/// for the year-pillar cycle.
const REFERENCE_YEAR: i32 = 1984;

/// Derive the year pillar from the already solar-term-adjusted BaZi year
/// (the civil year shifted so a new year begins at LiChun, not Jan 1 —
/// that shift happens one layer up, in the orchestrating crate).
pub fn year_pillar(bazi_year: i32) -> Pillar {
    let cycle = (bazi_year - REFERENCE_YEAR).rem_euclid(60) as u32;
    Pillar::from_cycle_index(cycle)
}

/// The month-branch sequence position for a jie-delimited BaZi month,
/// `0` for Yin (寅, the first month) through `11` for Chou (丑, the
/// twelfth), used by [`month_pillar`].
pub fn month_index_from_branch(branch: Branch) -> u32 {
    (branch.index() + 12 - Branch::Yin.index()) % 12
}

/// Derive the month pillar (Five-Tiger rule / 五虎遁) from the year
/// pillar's stem and the month's branch (as opened by its governing jie
/// term; see `bazi_astro::SolarTerm::opens_month_branch`).
pub fn month_pillar(year_stem: Stem, month_branch: Branch) -> Pillar {
    let month_offset = month_index_from_branch(month_branch);
    let stem_index = (year_stem.index() * 2 + month_offset + 2) % 10;
    Pillar::new(Stem::from_index(stem_index), month_branch)
}

/// Julian Day Number of the lunar-table epoch, 1900-01-31 (a Jia-Chen /
/// 甲辰 day, cycle index 40), used as the day-pillar cycle anchor.
fn epoch_jdn() -> i64 {
    let epoch_jd = bazi_time::calendar_to_jd(1900, 1, 31.0);
    (epoch_jd + 0.5).floor() as i64
}

const EPOCH_CYCLE_INDEX: i64 = 40; // Jia-Chen

/// Derive the day pillar from a UT Julian Date and the local civil hour
/// (0..24) that the natal chart uses.
///
/// `early_rat_split`, when true, applies the convention that an hour of
/// exactly 23 belongs to the next calendar day's pillar (the "late Zi"
/// reading, inclusive at `hour == 23` per spec's adopted interpretation
/// of its own open question); when false, the day pillar always follows
/// the civil calendar date regardless of hour.
pub fn day_pillar(jd_ut: f64, hour: u32, early_rat_split: bool) -> Result<Pillar, PillarError> {
    if hour > 23 {
        return Err(PillarError::InvalidField("hour"));
    }

    let jdn = (jd_ut + 0.5).floor() as i64;
    let effective_jdn = if early_rat_split && hour == 23 { jdn + 1 } else { jdn };

    let cycle = (effective_jdn - epoch_jdn() + EPOCH_CYCLE_INDEX).rem_euclid(60) as u32;
    Ok(Pillar::from_cycle_index(cycle))
}

/// The two-hour branch slot containing `hour` (0..24): `23:00-00:59` is
/// Zi (branch 0), `01:00-02:59` is Chou, and so on.
pub fn hour_branch(hour: u32) -> Result<Branch, PillarError> {
    if hour > 23 {
        return Err(PillarError::InvalidField("hour"));
    }
    let index = ((hour + 1) / 2) % 12;
    Ok(Branch::from_index(index))
}

/// Derive the hour pillar (Five-Rat-Dun rule / 五鼠遁) from the day
/// pillar's stem and the civil hour.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Result<Pillar, PillarError> {
    let branch = hour_branch(hour)?;
    let stem_index = (day_stem.index() * 2 + branch.index()) % 10;
    Ok(Pillar::new(Stem::from_index(stem_index), branch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_1984_is_jiazi() {
        let p = year_pillar(1984);
        assert_eq!(p.stem, Stem::Jia);
        assert_eq!(p.branch, Branch::Zi);
    }

    #[test]
    fn year_1985_is_yichou() {
        let p = year_pillar(1985);
        assert_eq!(p.stem, Stem::Yi);
        assert_eq!(p.branch, Branch::Chou);
    }

    #[test]
    fn jia_or_ji_year_opens_yin_month_with_bing() {
        let p = month_pillar(Stem::Jia, Branch::Yin);
        assert_eq!(p.stem, Stem::Bing);
        let p2 = month_pillar(Stem::Ji, Branch::Yin);
        assert_eq!(p2.stem, Stem::Bing);
    }

    #[test]
    fn wu_or_gui_year_opens_yin_month_with_jia() {
        let p = month_pillar(Stem::Wu, Branch::Yin);
        assert_eq!(p.stem, Stem::Jia);
    }

    #[test]
    fn epoch_day_is_jiachen() {
        let epoch_jd = bazi_time::calendar_to_jd(1900, 1, 31.0);
        let p = day_pillar(epoch_jd, 12, true).unwrap();
        assert_eq!(p.stem, Stem::Jia);
        assert_eq!(p.branch, Branch::Chen);
    }

    #[test]
    fn late_zi_hour_rolls_day_forward_when_split_enabled() {
        let epoch_jd = bazi_time::calendar_to_jd(1900, 1, 31.0);
        let normal = day_pillar(epoch_jd, 12, true).unwrap();
        let late_zi = day_pillar(epoch_jd, 23, true).unwrap();
        let next_day = day_pillar(epoch_jd + 1.0, 12, true).unwrap();
        assert_eq!(late_zi, next_day);
        assert_ne!(late_zi, normal);
    }

    #[test]
    fn late_zi_hour_stays_same_day_when_split_disabled() {
        let epoch_jd = bazi_time::calendar_to_jd(1900, 1, 31.0);
        let normal = day_pillar(epoch_jd, 12, false).unwrap();
        let no_split = day_pillar(epoch_jd, 23, false).unwrap();
        assert_eq!(normal, no_split);
    }

    #[test]
    fn hour_branch_boundaries() {
        assert_eq!(hour_branch(23).unwrap(), Branch::Zi);
        assert_eq!(hour_branch(0).unwrap(), Branch::Zi);
        assert_eq!(hour_branch(1).unwrap(), Branch::Chou);
        assert_eq!(hour_branch(13).unwrap(), Branch::Wei);
    }

    #[test]
    fn jia_or_ji_day_opens_zi_hour_with_jia() {
        let p = hour_pillar(Stem::Jia, 0).unwrap();
        assert_eq!(p.stem, Stem::Jia);
        let p2 = hour_pillar(Stem::Ji, 0).unwrap();
        assert_eq!(p2.stem, Stem::Jia);
    }

    #[test]
    fn ding_or_ren_day_opens_zi_hour_with_geng() {
        let p = hour_pillar(Stem::Ding, 0).unwrap();
        assert_eq!(p.stem, Stem::Geng);
    }

    #[test]
    fn invalid_hour_reports_error() {
        assert!(matches!(hour_branch(24), Err(PillarError::InvalidField("hour"))));
    }
}
