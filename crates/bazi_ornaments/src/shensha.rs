//! Shensha (神煞): traditional "spirit/sha" ornaments, each a small rule
//! keyed off one anchor (day stem, year branch, or day branch) that
//! reports which chart positions bear it.
//!
//! Per the teacher's Design Note on dynamic dispatch ("data-driven
//! rules"), each rule is a `const` table walked by one of two shared
//! lookup functions (`stem_keyed` / `branch_group_keyed`) rather than
//! nine bespoke functions.

use bazi_pillars::{Branch, FourPillars, Position, Stem};

/// One of the nine shensha this engine detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShenShaKind {
    /// 天乙贵人 — Nobleman, keyed off the day stem.
    NobleMan,
    /// 桃花 — Peach Blossom, keyed off the year/day branch's triad group.
    PeachBlossom,
    /// 驿马 — Travel Horse, keyed off the year/day branch's triad group.
    TravelHorse,
    /// 华盖 — Canopy, keyed off the year/day branch's triad group.
    Canopy,
    /// 将星 — General Star, keyed off the year/day branch's triad group.
    GeneralStar,
    /// 羊刃 — Yang Blade, keyed off the (yang) day stem.
    YangBlade,
    /// 文昌贵人 — Academic Star, keyed off the day stem.
    AcademicStar,
    /// 孤辰 — Lonely Star, keyed off the year branch's seasonal group.
    LonelyStar,
    /// 寡宿 — Solitary Star, keyed off the year branch's seasonal group.
    SolitaryStar,
    /// 空亡 — Void, keyed off the day pillar's xun (60-cycle decade).
    Void,
}

impl ShenShaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NobleMan => "Nobleman",
            Self::PeachBlossom => "Peach Blossom",
            Self::TravelHorse => "Travel Horse",
            Self::Canopy => "Canopy",
            Self::GeneralStar => "General Star",
            Self::YangBlade => "Yang Blade",
            Self::AcademicStar => "Academic Star",
            Self::LonelyStar => "Lonely Star",
            Self::SolitaryStar => "Solitary Star",
            Self::Void => "Void",
        }
    }
}

/// One detected shensha: which kind, which chart position it was
/// anchored from, and which position(s) it was found sitting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShenShaHit {
    pub kind: ShenShaKind,
    /// The position whose stem/branch was the rule's anchor.
    pub anchor: Position,
    /// The position(s) bearing the matched branch.
    pub positions: Vec<Position>,
}

/// Day-stem-keyed tables: `(stem, [target branches])`.
const NOBLEMAN: [(Stem, [Branch; 2]); 5] = [
    (Stem::Jia, [Branch::Chou, Branch::Wei]),
    (Stem::Wu, [Branch::Chou, Branch::Wei]),
    (Stem::Geng, [Branch::Chou, Branch::Wei]),
    (Stem::Yi, [Branch::Zi, Branch::Shen]),
    (Stem::Ji, [Branch::Zi, Branch::Shen]),
];
const NOBLEMAN_REST: [(Stem, [Branch; 2]); 5] = [
    (Stem::Bing, [Branch::Hai, Branch::You]),
    (Stem::Ding, [Branch::Hai, Branch::You]),
    (Stem::Ren, [Branch::Mao, Branch::Si]),
    (Stem::Gui, [Branch::Mao, Branch::Si]),
    (Stem::Xin, [Branch::Yin, Branch::Wu]),
];

fn nobleman_targets(day_stem: Stem) -> [Branch; 2] {
    NOBLEMAN
        .iter()
        .chain(NOBLEMAN_REST.iter())
        .find(|&&(s, _)| s == day_stem)
        .map(|&(_, targets)| targets)
        .expect("every stem has a nobleman row")
}

const YANG_BLADE: [(Stem, Branch); 4] = [
    (Stem::Jia, Branch::Mao),
    (Stem::Bing, Branch::Wu),
    (Stem::Wu, Branch::Wu),
    (Stem::Geng, Branch::You),
];
const YANG_BLADE_REN: (Stem, Branch) = (Stem::Ren, Branch::Zi);

fn yang_blade_target(day_stem: Stem) -> Option<Branch> {
    YANG_BLADE
        .iter()
        .chain(std::iter::once(&YANG_BLADE_REN))
        .find(|&&(s, _)| s == day_stem)
        .map(|&(_, b)| b)
}

const ACADEMIC_STAR: [(Stem, Branch); 10] = [
    (Stem::Jia, Branch::Si),
    (Stem::Yi, Branch::Wu),
    (Stem::Bing, Branch::Shen),
    (Stem::Ding, Branch::You),
    (Stem::Wu, Branch::Shen),
    (Stem::Ji, Branch::You),
    (Stem::Geng, Branch::Hai),
    (Stem::Xin, Branch::Zi),
    (Stem::Ren, Branch::Yin),
    (Stem::Gui, Branch::Mao),
];

/// The four three-harmony branch groups, each paired with the target
/// branch for peach-blossom / travel-horse / canopy / general-star.
const TRIAD_GROUPS: [[Branch; 3]; 4] = [
    [Branch::Yin, Branch::Wu, Branch::Xu],
    [Branch::Shen, Branch::Zi, Branch::Chen],
    [Branch::Si, Branch::You, Branch::Chou],
    [Branch::Hai, Branch::Mao, Branch::Wei],
];
const PEACH_BLOSSOM_TARGETS: [Branch; 4] = [Branch::Mao, Branch::You, Branch::Wu, Branch::Zi];
const TRAVEL_HORSE_TARGETS: [Branch; 4] = [Branch::Shen, Branch::Yin, Branch::Hai, Branch::Si];
const CANOPY_TARGETS: [Branch; 4] = [Branch::Xu, Branch::Chen, Branch::Chou, Branch::Wei];
const GENERAL_STAR_TARGETS: [Branch; 4] = [Branch::Wu, Branch::Zi, Branch::You, Branch::Mao];

fn triad_group_index(branch: Branch) -> Option<usize> {
    TRIAD_GROUPS.iter().position(|group| group.contains(&branch))
}

/// The four seasonal clusters and their lonely-star / solitary-star
/// targets.
const SEASON_GROUPS: [[Branch; 3]; 4] = [
    [Branch::Hai, Branch::Zi, Branch::Chou],
    [Branch::Yin, Branch::Mao, Branch::Chen],
    [Branch::Si, Branch::Wu, Branch::Wei],
    [Branch::Shen, Branch::You, Branch::Xu],
];
const LONELY_STAR_TARGETS: [Branch; 4] = [Branch::Yin, Branch::Si, Branch::Shen, Branch::Hai];
const SOLITARY_STAR_TARGETS: [Branch; 4] = [Branch::Xu, Branch::Chou, Branch::Chen, Branch::Wei];

fn season_group_index(branch: Branch) -> Option<usize> {
    SEASON_GROUPS.iter().position(|group| group.contains(&branch))
}

/// The two branches missing from the day pillar's xun (the decade of the
/// 60-cycle it falls in): every xun's ten pillars cover ten consecutive
/// branches, leaving exactly two uncovered.
fn void_branches(day_pillar_cycle_index: u32) -> [Branch; 2] {
    let xun_start = (day_pillar_cycle_index / 10) * 10;
    let missing1 = (xun_start + 10) % 12;
    let missing2 = (xun_start + 11) % 12;
    [Branch::from_index(missing1), Branch::from_index(missing2)]
}

fn positions_with_branch(chart: FourPillars, targets: &[Branch]) -> Vec<Position> {
    chart
        .positioned()
        .into_iter()
        .filter(|(_, pillar)| targets.contains(&pillar.branch))
        .map(|(pos, _)| pos)
        .collect()
}

fn push_if_any(out: &mut Vec<ShenShaHit>, kind: ShenShaKind, anchor: Position, positions: Vec<Position>) {
    if !positions.is_empty() {
        out.push(ShenShaHit { kind, anchor, positions });
    }
}

/// Detect all nine shensha present in `chart`, anchored on the day stem,
/// the year branch, and the day branch as spec.md §4.5 describes.
pub fn shensha_for_chart(chart: FourPillars) -> Vec<ShenShaHit> {
    let mut out = Vec::new();
    let day_stem = chart.day.stem;
    let year_branch = chart.year.branch;
    let day_branch = chart.day.branch;

    push_if_any(
        &mut out,
        ShenShaKind::NobleMan,
        Position::Day,
        positions_with_branch(chart, &nobleman_targets(day_stem)),
    );

    if let Some(target) = yang_blade_target(day_stem) {
        push_if_any(&mut out, ShenShaKind::YangBlade, Position::Day, positions_with_branch(chart, &[target]));
    }

    if let Some(target) = ACADEMIC_STAR.iter().find(|&&(s, _)| s == day_stem).map(|&(_, b)| b) {
        push_if_any(&mut out, ShenShaKind::AcademicStar, Position::Day, positions_with_branch(chart, &[target]));
    }

    for (anchor, branch) in [(Position::Year, year_branch), (Position::Day, day_branch)] {
        if let Some(i) = triad_group_index(branch) {
            push_if_any(
                &mut out,
                ShenShaKind::PeachBlossom,
                anchor,
                positions_with_branch(chart, &[PEACH_BLOSSOM_TARGETS[i]]),
            );
            push_if_any(
                &mut out,
                ShenShaKind::TravelHorse,
                anchor,
                positions_with_branch(chart, &[TRAVEL_HORSE_TARGETS[i]]),
            );
            push_if_any(
                &mut out,
                ShenShaKind::Canopy,
                anchor,
                positions_with_branch(chart, &[CANOPY_TARGETS[i]]),
            );
            push_if_any(
                &mut out,
                ShenShaKind::GeneralStar,
                anchor,
                positions_with_branch(chart, &[GENERAL_STAR_TARGETS[i]]),
            );
        }
    }

    if let Some(i) = season_group_index(year_branch) {
        push_if_any(
            &mut out,
            ShenShaKind::LonelyStar,
            Position::Year,
            positions_with_branch(chart, &[LONELY_STAR_TARGETS[i]]),
        );
        push_if_any(
            &mut out,
            ShenShaKind::SolitaryStar,
            Position::Year,
            positions_with_branch(chart, &[SOLITARY_STAR_TARGETS[i]]),
        );
    }

    let void = void_branches(chart.day.cycle_index());
    push_if_any(&mut out, ShenShaKind::Void, Position::Day, positions_with_branch(chart, &void));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_pillars::Pillar;

    fn chart_with(year: Branch, month: Branch, day_stem: Stem, day: Branch, hour: Branch) -> FourPillars {
        // Stems are only meaningful where a rule keys off them (day
        // stem); branches carry the sexagenary parity constraint so we
        // pick stems that are valid for each branch's parity.
        let stem_for = |b: Branch| if b.index() % 2 == 0 { Stem::Jia } else { Stem::Yi };
        FourPillars::new(
            Pillar::new(stem_for(year), year),
            Pillar::new(stem_for(month), month),
            Pillar::new(day_stem, day),
            Pillar::new(stem_for(hour), hour),
        )
    }

    #[test]
    fn nobleman_hits_on_target_branch() {
        let chart = chart_with(Branch::Chou, Branch::Si, Stem::Jia, Branch::Wu, Branch::You);
        let hits = shensha_for_chart(chart);
        let noble = hits.iter().find(|h| h.kind == ShenShaKind::NobleMan).expect("Jia -> Chou/Wei");
        assert!(noble.positions.contains(&Position::Year));
    }

    #[test]
    fn peach_blossom_for_yinwuxu_group_is_mao() {
        let chart = chart_with(Branch::Yin, Branch::Si, Stem::Jia, Branch::Mao, Branch::You);
        let hits = shensha_for_chart(chart);
        assert!(hits
            .iter()
            .any(|h| h.kind == ShenShaKind::PeachBlossom && h.positions.contains(&Position::Day)));
    }

    #[test]
    fn void_branches_exclude_current_xun() {
        // Jia-Zi (cycle 0) opens a xun spanning branches Zi..You (0..9);
        // the two missing are Xu (10) and Hai (11).
        let void = void_branches(0);
        assert_eq!(void, [Branch::Xu, Branch::Hai]);
    }

    #[test]
    fn void_hit_detected_when_a_position_carries_a_missing_branch() {
        let chart = chart_with(Branch::Xu, Branch::Si, Stem::Jia, Branch::Zi, Branch::You);
        let hits = shensha_for_chart(chart);
        assert!(hits
            .iter()
            .any(|h| h.kind == ShenShaKind::Void && h.positions.contains(&Position::Year)));
    }

    #[test]
    fn lonely_and_solitary_star_for_winter_group() {
        let chart = chart_with(Branch::Zi, Branch::Si, Stem::Jia, Branch::Yin, Branch::Xu);
        let hits = shensha_for_chart(chart);
        assert!(hits
            .iter()
            .any(|h| h.kind == ShenShaKind::LonelyStar && h.positions.contains(&Position::Day)));
        assert!(hits
            .iter()
            .any(|h| h.kind == ShenShaKind::SolitaryStar && h.positions.contains(&Position::Hour)));
    }
}
