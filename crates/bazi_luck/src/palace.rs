//! The three palaces: 胎元 (tai yuan), 命宫 (ming gong), 身宫 (shen gong).

use bazi_pillars::{Branch, Pillar, Stem};

/// 胎元: stem is the next stem after the month pillar's stem; branch is
/// the month branch advanced by three.
pub fn tai_yuan(month_pillar: Pillar) -> Pillar {
    let stem = Stem::from_index(month_pillar.stem.index() + 1);
    let branch = Branch::from_index(month_pillar.branch.index() + 3);
    Pillar::new(stem, branch)
}

/// 命宫: the traditional fixed formula from the month and hour branches.
pub fn ming_gong_branch(month_branch: Branch, hour_branch: Branch) -> Branch {
    let index = (11i32 - month_branch.index() as i32 - hour_branch.index() as i32).rem_euclid(12);
    Branch::from_index(index as u32)
}

/// 身宫: the companion formula to [`ming_gong_branch`].
pub fn shen_gong_branch(month_branch: Branch, hour_branch: Branch) -> Branch {
    let index = (month_branch.index() as i32 + hour_branch.index() as i32 - 1).rem_euclid(12);
    Branch::from_index(index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tai_yuan_advances_stem_and_branch() {
        let month = Pillar::new(Stem::Bing, Branch::Yin);
        let pillar = tai_yuan(month);
        assert_eq!(pillar.stem, Stem::Ding);
        assert_eq!(pillar.branch, Branch::Si);
    }

    #[test]
    fn palaces_are_deterministic_for_fixed_branches() {
        let ming = ming_gong_branch(Branch::Yin, Branch::Zi);
        let shen = shen_gong_branch(Branch::Yin, Branch::Zi);
        // 11 - 2 - 0 = 9 -> You
        assert_eq!(ming, Branch::You);
        // 2 + 0 - 1 = 1 -> Chou
        assert_eq!(shen, Branch::Chou);
    }
}
