//! The ten-year luck-cycle sequence and the annual pillar sequence.

use bazi_pillars::Pillar;

use crate::direction::LuckDirection;
use crate::start_age::StartAge;

/// One step of the ten-year luck cycle: the pillar governing it and the
/// half-open age range `[age_start, age_end)` (in whole years) it
/// covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckStep {
    pub pillar: Pillar,
    pub age_start: u32,
    pub age_end: u32,
}

/// The `count` consecutive ten-year pillars following `month_pillar`,
/// advancing +1 through the sexagenary cycle if `direction` is
/// [`LuckDirection::Forward`], -1 if backward. `count` is conventionally
/// 8 or 9 (covering 80-90 years from `start_age`).
pub fn ten_year_sequence(
    month_pillar: Pillar,
    direction: LuckDirection,
    start_age: StartAge,
    count: u32,
) -> Vec<LuckStep> {
    let step: i64 = match direction {
        LuckDirection::Forward => 1,
        LuckDirection::Backward => -1,
    };
    let base = month_pillar.cycle_index() as i64;

    (1..=count)
        .map(|i| {
            let cycle = (base + step * i as i64).rem_euclid(60) as u32;
            LuckStep {
                pillar: Pillar::from_cycle_index(cycle),
                age_start: start_age.years + 10 * (i - 1),
                age_end: start_age.years + 10 * i,
            }
        })
        .collect()
}

/// One year's annual pillar: calendar year `Y` maps to sexagenary cycle
/// index `(Y - 4) mod 60`, identical to `bazi_pillars::year_pillar`.
pub fn annual_pillar(calendar_year: i32) -> Pillar {
    bazi_pillars::year_pillar(calendar_year)
}

/// `count` consecutive annual pillars starting at `first_year`.
pub fn annual_sequence(first_year: i32, count: u32) -> Vec<(i32, Pillar)> {
    (0..count as i32)
        .map(|i| {
            let year = first_year + i;
            (year, annual_pillar(year))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_pillars::{Branch, Stem};

    #[test]
    fn forward_sequence_advances_by_one() {
        let month = Pillar::new(Stem::Bing, Branch::Yin);
        let steps = ten_year_sequence(
            month,
            LuckDirection::Forward,
            StartAge { years: 3, months: 0, days: 0 },
            3,
        );
        assert_eq!(steps[0].pillar.cycle_index(), (month.cycle_index() + 1) % 60);
        assert_eq!(steps[1].pillar.cycle_index(), (month.cycle_index() + 2) % 60);
        assert_eq!(steps[0].age_start, 3);
        assert_eq!(steps[0].age_end, 13);
        assert_eq!(steps[2].age_start, 23);
    }

    #[test]
    fn backward_sequence_retreats() {
        let month = Pillar::new(Stem::Bing, Branch::Yin);
        let steps = ten_year_sequence(
            month,
            LuckDirection::Backward,
            StartAge { years: 1, months: 0, days: 0 },
            2,
        );
        assert_eq!(steps[0].pillar.cycle_index(), (month.cycle_index() + 59) % 60);
    }

    #[test]
    fn annual_sequence_matches_year_pillar() {
        let seq = annual_sequence(1984, 2);
        assert_eq!(seq[0], (1984, bazi_pillars::year_pillar(1984)));
        assert_eq!(seq[1].0, 1985);
    }
}
