//! Luck-cycle direction (顺/逆): whether the ten-year dayun sequence
//! advances or retreats through the sexagenary cycle.

use bazi_pillars::{Polarity, Stem};

/// The subject's sex, the second input (besides the year stem's
/// polarity) the direction rule depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// Which way the luck-cycle sequence advances through the sexagenary
/// cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    pub const fn name(self) -> &'static str {
        match self {
            LuckDirection::Forward => "Forward",
            LuckDirection::Backward => "Backward",
        }
    }
}

/// Forward if (year stem is yang and subject is male) or (year stem is
/// yin and subject is female); backward otherwise.
pub fn luck_direction(year_stem: Stem, sex: Sex) -> LuckDirection {
    let forward = matches!(
        (year_stem.polarity(), sex),
        (Polarity::Yang, Sex::Male) | (Polarity::Yin, Sex::Female)
    );
    if forward {
        LuckDirection::Forward
    } else {
        LuckDirection::Backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yang_stem_male_is_forward() {
        assert_eq!(luck_direction(Stem::Jia, Sex::Male), LuckDirection::Forward);
    }

    #[test]
    fn yang_stem_female_is_backward() {
        assert_eq!(luck_direction(Stem::Jia, Sex::Female), LuckDirection::Backward);
    }

    #[test]
    fn yin_stem_female_is_forward() {
        assert_eq!(luck_direction(Stem::Yi, Sex::Female), LuckDirection::Forward);
    }

    #[test]
    fn yin_stem_male_is_backward() {
        assert_eq!(luck_direction(Stem::Yi, Sex::Male), LuckDirection::Backward);
    }
}
