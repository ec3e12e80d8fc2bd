//! Orchestration entry point: `compute` wires the L0-L6 crates into one
//! deterministic, side-effect-free call taking a civil or lunar birth
//! moment and returning the complete annotated chart.

pub mod error;
pub mod input;
pub mod result;

use bazi_calendar::LunarDate;
use bazi_config::BaziConfig;
use bazi_luck::{
    annual_sequence, luck_direction, ming_gong_branch, shen_gong_branch, start_age, tai_yuan,
    ten_year_sequence,
};
use bazi_pillars::{four_pillars_for_birth, four_pillars_for_true_solar_instant, BirthResolution};
use bazi_time::{CivilInstant, UtcOffset};

pub use error::CoreError;
pub use input::{DateType, Gender, Input, TimeType};
pub use result::BaziResult;

/// China Standard Time's reference meridian (+08:00); spec.md §4.2 fixes
/// the true-solar longitude offset to this meridian rather than any
/// caller-selected time zone.
const ZONE_MERIDIAN_DEG: f64 = 120.0;

/// The number of ten-year luck-cycle steps to emit (covers 90 years from
/// the computed start age; spec.md §4.6 leaves the exact count open, see
/// DESIGN.md).
const LUCK_STEPS: u32 = 9;

/// The number of annual pillars to emit, starting at the BaZi year of
/// birth (see DESIGN.md for this count's rationale).
const ANNUAL_STEPS: u32 = 10;

fn civil_fields(input: &Input) -> Result<(i32, u32, u32), CoreError> {
    match input.date_type {
        DateType::Solar => Ok((input.year, input.month, input.day)),
        DateType::Lunar => {
            let lunar = LunarDate {
                year: input.year,
                month: input.month,
                day: input.day,
                is_leap_month: input.is_leap_month.unwrap_or(false),
            };
            Ok(bazi_calendar::lunar_to_solar(lunar)?)
        }
    }
}

/// Run the full pipeline with the default [`BaziConfig`].
pub fn compute(input: Input) -> Result<BaziResult, CoreError> {
    compute_with_config(input, BaziConfig::default())
}

/// Run the full pipeline, resolving hidden-stem display weights,
/// five-element weights, and strength thresholds from `config` rather
/// than the built-in defaults. `compute` itself performs no file or
/// environment reads; callers that want a config file load and parse it
/// through `bazi_config` themselves before calling this.
pub fn compute_with_config(input: Input, config: BaziConfig) -> Result<BaziResult, CoreError> {
    if !(-180.0..=180.0).contains(&input.longitude) {
        return Err(CoreError::OutOfRange(format!(
            "longitude {} is outside [-180, 180]",
            input.longitude
        )));
    }

    let (civil_year, civil_month, civil_day) = civil_fields(&input)?;
    let offset = UtcOffset::from_hm(8, 0);
    let instant = CivilInstant::from_civil(
        civil_year,
        civil_month,
        civil_day,
        input.hour,
        input.minute,
        0.0,
        offset,
    )?;

    // Also validates the civil year falls within the supported
    // 1900-2100 lunisolar table (bazi_calendar::CalendarError::YearOutOfRange).
    let lunar_date = bazi_calendar::solar_to_lunar(civil_year, civil_month, civil_day)?;

    let apply_dst = input.dst_confirmed.unwrap_or(false);

    let (resolution, reduction_minutes, dst_applied): (BirthResolution, (f64, f64, f64), bool) =
        match input.time_type {
            TimeType::Standard => {
                let resolution = four_pillars_for_birth(
                    instant,
                    input.longitude,
                    ZONE_MERIDIAN_DEG,
                    apply_dst,
                    input.early_rat_split,
                )?;
                let reduction = resolution.reduction;
                let minutes = (
                    reduction.longitude_minutes,
                    reduction.equation_of_time_minutes,
                    reduction.total_minutes(),
                );
                let dst_applied = resolution.dst_applied;
                (resolution, minutes, dst_applied)
            }
            TimeType::TrueSolar => {
                // The caller's clock is already true solar time; no
                // further longitude/equation-of-time reduction applies.
                let resolution = four_pillars_for_true_solar_instant(
                    instant.jd_ut(),
                    instant.offset().as_minutes(),
                    input.early_rat_split,
                )?;
                (resolution, (0.0, 0.0, 0.0), false)
            }
        };

    let chart = resolution.four_pillars;
    let direction = luck_direction(chart.year.stem, input.gender.into());
    let age = start_age(
        resolution.true_solar_jd_ut,
        direction,
        resolution.month_jie.1,
        resolution.next_jie.1,
    );
    let sequence = ten_year_sequence(chart.month, direction, age, LUCK_STEPS);
    let annual = annual_sequence(resolution.bazi_year, ANNUAL_STEPS);

    let palace_tai_yuan = tai_yuan(chart.month);
    let palace_ming_gong = ming_gong_branch(chart.month.branch, chart.hour.branch);
    let palace_shen_gong = shen_gong_branch(chart.month.branch, chart.hour.branch);

    let tally = bazi_elements::element_tally(chart, config.element_weights);
    let strength =
        bazi_elements::day_master_strength(chart, config.element_weights, config.strength_thresholds);

    Ok(result::assemble(
        result::CivilDateView {
            year: civil_year,
            month: civil_month,
            day: civil_day,
            hour: input.hour,
            minute: input.minute,
        },
        lunar_date,
        reduction_minutes,
        dst_applied,
        offset,
        resolution.month_jie,
        resolution.next_jie,
        chart,
        config.hidden_stem_weights,
        tally,
        strength,
        direction,
        age,
        sequence,
        annual,
        palace_tai_yuan,
        palace_ming_gong,
        palace_shen_gong,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> Input {
        Input {
            date_type: DateType::Solar,
            year: 1984,
            month: 2,
            day: 4,
            is_leap_month: None,
            hour: 23,
            minute: 19,
            time_type: TimeType::Standard,
            gender: Gender::Male,
            longitude: 120.0,
            dst_confirmed: None,
            early_rat_split: true,
        }
    }

    #[test]
    fn jiazi_anchor_case_s1() {
        let result = compute(base_input()).unwrap();
        let f = &result.four_pillars;
        assert_eq!((f.year.stem.as_str(), f.year.branch.as_str()), ("Jia", "Zi"));
        assert_eq!((f.month.stem.as_str(), f.month.branch.as_str()), ("Bing", "Yin"));
        assert_eq!((f.day.stem.as_str(), f.day.branch.as_str()), ("Jia", "Zi"));
        assert_eq!((f.hour.stem.as_str(), f.hour.branch.as_str()), ("Jia", "Zi"));
    }

    #[test]
    fn one_minute_earlier_rolls_the_year_back_s2() {
        let mut input = base_input();
        input.minute = 18;
        let result = compute(input).unwrap();
        let f = &result.four_pillars;
        assert_eq!((f.year.stem.as_str(), f.year.branch.as_str()), ("Gui", "Hai"));
        assert_eq!((f.month.stem.as_str(), f.month.branch.as_str()), ("Yi", "Chou"));
        assert_eq!((f.day.stem.as_str(), f.day.branch.as_str()), ("Gui", "Hai"));
        assert_eq!((f.hour.stem.as_str(), f.hour.branch.as_str()), ("Ren", "Zi"));
    }

    #[test]
    fn jing_zhe_crossing_keeps_year_pillar_in_2024_s3() {
        let input = Input {
            year: 2024,
            month: 3,
            day: 5,
            hour: 10,
            minute: 24,
            longitude: 116.4,
            ..base_input()
        };
        let result = compute(input).unwrap();
        let f = &result.four_pillars;
        assert_eq!((f.year.stem.as_str(), f.year.branch.as_str()), ("Jia", "Chen"));
        assert_eq!((f.month.stem.as_str(), f.month.branch.as_str()), ("Ding", "Mao"));
    }

    #[test]
    fn year_before_lichun_keeps_prior_year_pillar_s4() {
        let input = Input {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            ..base_input()
        };
        let result = compute(input).unwrap();
        assert_eq!(
            (result.four_pillars.year.stem.as_str(), result.four_pillars.year.branch.as_str()),
            ("Ji", "Mao")
        );
    }

    #[test]
    fn dst_confirmed_shifts_the_true_solar_reduction_s5() {
        let input = Input {
            year: 1986,
            month: 7,
            day: 1,
            hour: 15,
            minute: 30,
            dst_confirmed: Some(true),
            ..base_input()
        };
        let result = compute(input).unwrap();
        assert!(result.true_solar_reduction.dst_applied);
        assert!(result.true_solar_reduction.total_minutes < 0.0);
    }

    #[test]
    fn lunar_leap_month_input_resolves_through_civil_pipeline_s6() {
        let input = Input {
            date_type: DateType::Lunar,
            year: 2023,
            month: 2,
            day: 1,
            is_leap_month: Some(true),
            hour: 12,
            minute: 0,
            ..base_input()
        };
        let result = compute(input).unwrap();
        assert_eq!(result.civil_date.year, 2023);
        assert_eq!(result.civil_date.month, 3);
        assert_eq!(result.civil_date.day, 21);
    }

    #[test]
    fn out_of_range_longitude_is_rejected() {
        let input = Input { longitude: 200.0, ..base_input() };
        let err = compute(input).unwrap_err();
        assert!(matches!(err, CoreError::OutOfRange(_)));
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        let input = Input { year: 1800, ..base_input() };
        let err = compute(input).unwrap_err();
        assert!(matches!(err, CoreError::OutOfRange(_)));
    }

    #[test]
    fn ten_year_sequence_has_nine_steps_with_contiguous_ages() {
        let result = compute(base_input()).unwrap();
        assert_eq!(result.luck.ten_year_sequence.len(), 9);
        for pair in result.luck.ten_year_sequence.windows(2) {
            assert_eq!(pair[0].age_end, pair[1].age_start);
        }
    }

    #[test]
    fn annual_sequence_starts_at_bazi_year() {
        let result = compute(base_input()).unwrap();
        assert_eq!(result.luck.annual_sequence.len(), 10);
        assert_eq!(result.luck.annual_sequence[0].0, 1984);
    }

    #[test]
    fn five_elements_counts_sum_to_chart_contributions() {
        // S1's branches are Zi, Yin, Zi, Zi: 1 + 3 + 1 + 1 = 6 hidden
        // stems, plus the 4 visible stems themselves.
        let result = compute(base_input()).unwrap();
        let total: u32 = result.five_elements.counts.iter().map(|(_, c)| *c).sum();
        assert_eq!(total, 10);
    }
}
