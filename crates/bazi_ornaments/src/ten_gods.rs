//! The ten gods (十神): the day master's relation to another stem.

use bazi_pillars::Stem;

/// One of the ten gods, named by the day master's relation to the stem
/// being classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 比肩 — same element, same polarity.
    Companion,
    /// 劫财 — same element, opposite polarity.
    RobWealth,
    /// 食神 — day master generates it, same polarity.
    EatingGod,
    /// 伤官 — day master generates it, opposite polarity.
    HurtingOfficer,
    /// 偏财 — day master controls it, same polarity.
    IndirectWealth,
    /// 正财 — day master controls it, opposite polarity.
    DirectWealth,
    /// 七殺/偏官 — it controls the day master, same polarity.
    SevenKillings,
    /// 正官 — it controls the day master, opposite polarity.
    DirectOfficer,
    /// 偏印 — it generates the day master, same polarity.
    IndirectResource,
    /// 正印 — it generates the day master, opposite polarity.
    DirectResource,
}

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            TenGod::Companion => "Companion",
            TenGod::RobWealth => "Rob Wealth",
            TenGod::EatingGod => "Eating God",
            TenGod::HurtingOfficer => "Hurting Officer",
            TenGod::IndirectWealth => "Indirect Wealth",
            TenGod::DirectWealth => "Direct Wealth",
            TenGod::SevenKillings => "Seven Killings",
            TenGod::DirectOfficer => "Direct Officer",
            TenGod::IndirectResource => "Indirect Resource",
            TenGod::DirectResource => "Direct Resource",
        }
    }
}

/// Classify `other` relative to `day_master`, the ten-gods matrix.
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let dm_elem = day_master.element();
    let other_elem = other.element();
    let same_polarity = day_master.polarity() == other.polarity();

    if other_elem == dm_elem {
        return if same_polarity {
            TenGod::Companion
        } else {
            TenGod::RobWealth
        };
    }
    if dm_elem.generates() == other_elem {
        return if same_polarity {
            TenGod::EatingGod
        } else {
            TenGod::HurtingOfficer
        };
    }
    if dm_elem.controls() == other_elem {
        return if same_polarity {
            TenGod::IndirectWealth
        } else {
            TenGod::DirectWealth
        };
    }
    if other_elem.controls() == dm_elem {
        return if same_polarity {
            TenGod::SevenKillings
        } else {
            TenGod::DirectOfficer
        };
    }
    debug_assert_eq!(other_elem.generates(), dm_elem);
    if same_polarity {
        TenGod::IndirectResource
    } else {
        TenGod::DirectResource
    }
}

/// A branch's ten-god relation to the day master, taken from the
/// branch's primary (highest-weight) hidden stem.
pub fn ten_god_branch(day_master: Stem, branch: bazi_pillars::Branch) -> TenGod {
    let primary = branch.hidden_stems()[0].stem;
    ten_god(day_master, primary)
}
