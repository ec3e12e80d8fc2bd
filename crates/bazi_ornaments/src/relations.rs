//! Branch and stem relations, detected via small tables of index
//! patterns walked by a shared interpreter rather than one function per
//! rule.

use bazi_pillars::{Branch, Element, Stem};

/// The seven kinds of branch relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchRelationKind {
    /// 六合 — six pairs that combine into a single element.
    SixCombine,
    /// 三合 — three-branch triads that combine into a single element.
    ThreeHarmony,
    /// 三会 — three-branch triads that assemble into a directional element.
    ThreeAssembly,
    /// 六冲 — six pairs in direct opposition.
    SixClash,
    /// 六害 — six pairs that harm each other.
    SixHarm,
    /// 三刑/自刑 — the four punishment patterns.
    Punish,
    /// 六破 — six pairs that break each other.
    SixDestroy,
}

impl BranchRelationKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SixCombine => "Six Combine",
            Self::ThreeHarmony => "Three Harmony",
            Self::ThreeAssembly => "Three Assembly",
            Self::SixClash => "Six Clash",
            Self::SixHarm => "Six Harm",
            Self::Punish => "Punish",
            Self::SixDestroy => "Six Destroy",
        }
    }
}

/// The specific punishment pattern for a [`BranchRelationKind::Punish`] match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunishKind {
    /// 无礼之刑 — Zi-Mao, the "punishment of rudeness".
    Uncivil,
    /// 无恩之刑 — Yin-Si-Shen, the "punishment of ingratitude".
    Ungrateful,
    /// 恃势之刑 — Chou-Xu-Wei, the "punishment of arrogance".
    Bully,
    /// 自刑 — a branch punishing itself (Chen, Wu, You, Hai).
    SelfPunish,
}

impl PunishKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uncivil => "Uncivil",
            Self::Ungrateful => "Ungrateful",
            Self::Bully => "Bully",
            Self::SelfPunish => "Self Punish",
        }
    }
}

const SIX_COMBINE: [(u32, u32); 6] = [(0, 1), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7)];
const SIX_CLASH: [(u32, u32); 6] = [(0, 6), (1, 7), (2, 8), (3, 9), (4, 10), (5, 11)];
const SIX_HARM: [(u32, u32); 6] = [(0, 7), (1, 6), (2, 5), (3, 4), (8, 11), (9, 10)];
const SIX_DESTROY: [(u32, u32); 6] = [(0, 9), (3, 6), (5, 8), (1, 4), (10, 7), (2, 11)];
const THREE_HARMONY: [(u32, u32, u32); 4] = [(8, 0, 4), (2, 6, 10), (5, 9, 1), (11, 3, 7)];
const THREE_ASSEMBLY: [(u32, u32, u32); 4] = [(2, 3, 4), (5, 6, 7), (8, 9, 10), (11, 0, 1)];
const UNCIVIL_PUNISH: (u32, u32) = (0, 3);
const UNGRATEFUL_PUNISH: (u32, u32, u32) = (2, 5, 8);
const BULLY_PUNISH: (u32, u32, u32) = (1, 10, 7);
const SELF_PUNISH: [u32; 4] = [4, 6, 9, 11];

fn has_pair(table: &[(u32, u32)], a: u32, b: u32) -> bool {
    table.iter().any(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a))
}

fn has_in_triple(triple: (u32, u32, u32), a: u32, b: u32) -> bool {
    let members = [triple.0, triple.1, triple.2];
    members.contains(&a) && members.contains(&b) && a != b
}

/// All branch-relation kinds (and, for punishments, the specific
/// pattern) that hold between `a` and `b`. A pair can match more than
/// one kind is never the case for the six-relation tables (they
/// partition the 66 unordered pairs), but `Punish` overlaps are
/// possible by design (e.g. self-punish only needs one branch, so it is
/// reported when `a == b`).
pub fn branch_relations(a: Branch, b: Branch) -> Vec<(BranchRelationKind, Option<PunishKind>)> {
    let (ai, bi) = (a.index(), b.index());
    let mut out = Vec::new();

    if ai == bi {
        if SELF_PUNISH.contains(&ai) {
            out.push((BranchRelationKind::Punish, Some(PunishKind::SelfPunish)));
        }
        return out;
    }

    if has_pair(&SIX_COMBINE, ai, bi) {
        out.push((BranchRelationKind::SixCombine, None));
    }
    if THREE_HARMONY.iter().any(|&t| has_in_triple(t, ai, bi)) {
        out.push((BranchRelationKind::ThreeHarmony, None));
    }
    if THREE_ASSEMBLY.iter().any(|&t| has_in_triple(t, ai, bi)) {
        out.push((BranchRelationKind::ThreeAssembly, None));
    }
    if has_pair(&SIX_CLASH, ai, bi) {
        out.push((BranchRelationKind::SixClash, None));
    }
    if has_pair(&SIX_HARM, ai, bi) {
        out.push((BranchRelationKind::SixHarm, None));
    }
    if has_pair(&SIX_DESTROY, ai, bi) {
        out.push((BranchRelationKind::SixDestroy, None));
    }
    if (ai, bi) == UNCIVIL_PUNISH || (bi, ai) == UNCIVIL_PUNISH {
        out.push((BranchRelationKind::Punish, Some(PunishKind::Uncivil)));
    }
    if has_in_triple(UNGRATEFUL_PUNISH, ai, bi) {
        out.push((BranchRelationKind::Punish, Some(PunishKind::Ungrateful)));
    }
    if has_in_triple(BULLY_PUNISH, ai, bi) {
        out.push((BranchRelationKind::Punish, Some(PunishKind::Bully)));
    }

    out
}

/// Detect all triad-level (three-harmony / three-assembly) matches among
/// a full set of chart branches, returning the matched kind and the
/// resulting element when all three members are present.
pub fn branch_triads_present(branches: &[Branch]) -> Vec<(BranchRelationKind, Element)> {
    let indices: Vec<u32> = branches.iter().map(|b| b.index()).collect();
    let contains_all = |triple: (u32, u32, u32)| {
        [triple.0, triple.1, triple.2].iter().all(|m| indices.contains(m))
    };

    let harmony_elements = [Element::Water, Element::Fire, Element::Metal, Element::Wood];
    let assembly_elements = [Element::Wood, Element::Fire, Element::Metal, Element::Water];

    let mut out = Vec::new();
    for (i, &triple) in THREE_HARMONY.iter().enumerate() {
        if contains_all(triple) {
            out.push((BranchRelationKind::ThreeHarmony, harmony_elements[i]));
        }
    }
    for (i, &triple) in THREE_ASSEMBLY.iter().enumerate() {
        if contains_all(triple) {
            out.push((BranchRelationKind::ThreeAssembly, assembly_elements[i]));
        }
    }
    out
}

/// The two kinds of stem relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemRelationKind {
    /// 五合 — five pairs that combine into a single element.
    FiveCombine,
    /// 相冲 — four pairs of stems in direct, element-opposed clash.
    Clash,
}

impl StemRelationKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::FiveCombine => "Five Combine",
            Self::Clash => "Clash",
        }
    }
}

const FIVE_COMBINE: [(u32, u32, Element); 5] = [
    (0, 5, Element::Earth),
    (1, 6, Element::Metal),
    (2, 7, Element::Water),
    (3, 8, Element::Wood),
    (4, 9, Element::Fire),
];
const STEM_CLASH: [(u32, u32); 4] = [(0, 6), (1, 7), (2, 8), (3, 9)];

/// The combination target element for `a`-`b` if they form a 五合 pair.
pub fn stem_five_combine(a: Stem, b: Stem) -> Option<Element> {
    let (ai, bi) = (a.index(), b.index());
    FIVE_COMBINE
        .iter()
        .find(|&&(x, y, _)| (x, y) == (ai, bi) || (x, y) == (bi, ai))
        .map(|&(_, _, e)| e)
}

/// `true` if `a` and `b` form a 相冲 clash pair.
pub fn stem_clash(a: Stem, b: Stem) -> bool {
    has_pair(&STEM_CLASH, a.index(), b.index())
}

/// One match of [`branch_relations`] or [`branch_triads_present`] against
/// a full chart, tagged with the positions that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRelationHit {
    pub kind: BranchRelationKind,
    pub punish_kind: Option<PunishKind>,
    pub positions: Vec<bazi_pillars::Position>,
}

/// Detect every branch relation across all `2`- and `3`-position subsets
/// of a chart's four branches, each hit tagged with its participant
/// positions (spec: "Each hit is recorded with its participant
/// positions").
pub fn chart_branch_relations(chart: bazi_pillars::FourPillars) -> Vec<BranchRelationHit> {
    let positioned = chart.positioned();
    let mut out = Vec::new();

    for i in 0..4 {
        for j in (i + 1)..4 {
            let (pos_a, pillar_a) = positioned[i];
            let (pos_b, pillar_b) = positioned[j];
            for (kind, punish_kind) in branch_relations(pillar_a.branch, pillar_b.branch) {
                out.push(BranchRelationHit {
                    kind,
                    punish_kind,
                    positions: vec![pos_a, pos_b],
                });
            }
        }
    }

    let branches: Vec<Branch> = positioned.iter().map(|(_, p)| p.branch).collect();
    for (kind, element) in branch_triads_present(&branches) {
        let indices = match kind {
            BranchRelationKind::ThreeHarmony => THREE_HARMONY
                .iter()
                .find(|&&t| [t.0, t.1, t.2].iter().all(|m| branches.iter().any(|b| b.index() == *m))),
            BranchRelationKind::ThreeAssembly => THREE_ASSEMBLY
                .iter()
                .find(|&&t| [t.0, t.1, t.2].iter().all(|m| branches.iter().any(|b| b.index() == *m))),
            _ => None,
        };
        let Some(&(a, b, c)) = indices else { continue };
        let positions: Vec<bazi_pillars::Position> = positioned
            .iter()
            .filter(|(_, p)| [a, b, c].contains(&p.branch.index()))
            .map(|(pos, _)| *pos)
            .collect();
        out.push(BranchRelationHit {
            kind,
            punish_kind: None,
            positions,
        });
        let _ = element; // element is reported via branch_triads_present for callers that want it directly
    }

    out
}

/// One stem-relation match against a full chart, tagged with positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemRelationHit {
    pub kind: StemRelationKind,
    pub positions: [bazi_pillars::Position; 2],
}

/// Detect every stem relation across all position pairs of a chart's
/// four stems.
pub fn chart_stem_relations(chart: bazi_pillars::FourPillars) -> Vec<StemRelationHit> {
    let positioned = chart.positioned();
    let mut out = Vec::new();

    for i in 0..4 {
        for j in (i + 1)..4 {
            let (pos_a, pillar_a) = positioned[i];
            let (pos_b, pillar_b) = positioned[j];
            if stem_five_combine(pillar_a.stem, pillar_b.stem).is_some() {
                out.push(StemRelationHit {
                    kind: StemRelationKind::FiveCombine,
                    positions: [pos_a, pos_b],
                });
            }
            if stem_clash(pillar_a.stem, pillar_b.stem) {
                out.push(StemRelationHit {
                    kind: StemRelationKind::Clash,
                    positions: [pos_a, pos_b],
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zi_chou_six_combine() {
        let rels = branch_relations(Branch::Zi, Branch::Chou);
        assert!(rels.iter().any(|(k, _)| *k == BranchRelationKind::SixCombine));
    }

    #[test]
    fn zi_wu_six_clash() {
        let rels = branch_relations(Branch::Zi, Branch::Wu);
        assert!(rels.iter().any(|(k, _)| *k == BranchRelationKind::SixClash));
    }

    #[test]
    fn zi_wei_six_harm() {
        let rels = branch_relations(Branch::Zi, Branch::Wei);
        assert!(rels.iter().any(|(k, _)| *k == BranchRelationKind::SixHarm));
    }

    #[test]
    fn zi_you_six_destroy() {
        let rels = branch_relations(Branch::Zi, Branch::You);
        assert!(rels.iter().any(|(k, _)| *k == BranchRelationKind::SixDestroy));
    }

    #[test]
    fn zi_mao_uncivil_punish() {
        let rels = branch_relations(Branch::Zi, Branch::Mao);
        assert!(rels
            .iter()
            .any(|(k, p)| *k == BranchRelationKind::Punish && *p == Some(PunishKind::Uncivil)));
    }

    #[test]
    fn chen_self_punish() {
        let rels = branch_relations(Branch::Chen, Branch::Chen);
        assert_eq!(rels, vec![(BranchRelationKind::Punish, Some(PunishKind::SelfPunish))]);
    }

    #[test]
    fn shen_zi_chen_three_harmony_present() {
        let branches = [Branch::Shen, Branch::Zi, Branch::Chen];
        let triads = branch_triads_present(&branches);
        assert!(triads.iter().any(|(k, e)| *k == BranchRelationKind::ThreeHarmony && *e == Element::Water));
    }

    #[test]
    fn jia_ji_five_combine_earth() {
        assert_eq!(stem_five_combine(Stem::Jia, Stem::Ji), Some(Element::Earth));
    }

    #[test]
    fn jia_geng_clash() {
        assert!(stem_clash(Stem::Jia, Stem::Geng));
        assert!(!stem_clash(Stem::Jia, Stem::Yi));
    }

    fn sample_chart() -> bazi_pillars::FourPillars {
        use bazi_pillars::{Pillar, Stem as S};
        bazi_pillars::FourPillars::new(
            Pillar::new(S::Jia, Branch::Zi),
            Pillar::new(S::Yi, Branch::Chou),
            Pillar::new(S::Bing, Branch::Wu),
            Pillar::new(S::Ding, Branch::Mao),
        )
    }

    #[test]
    fn chart_branch_relations_tags_positions() {
        use bazi_pillars::Position;
        let hits = chart_branch_relations(sample_chart());
        let six_combine = hits
            .iter()
            .find(|h| h.kind == BranchRelationKind::SixCombine)
            .expect("Zi-Chou six-combine should be detected");
        assert!(six_combine.positions.contains(&Position::Year));
        assert!(six_combine.positions.contains(&Position::Month));

        let clash = hits
            .iter()
            .find(|h| h.kind == BranchRelationKind::SixClash)
            .expect("Zi-Wu six-clash should be detected");
        assert!(clash.positions.contains(&Position::Year));
        assert!(clash.positions.contains(&Position::Day));
    }

    #[test]
    fn chart_stem_relations_tags_positions() {
        use bazi_pillars::{Pillar, Position, Stem as S};
        let chart = bazi_pillars::FourPillars::new(
            Pillar::new(S::Jia, Branch::Zi),
            Pillar::new(S::Ji, Branch::Chou),
            Pillar::new(S::Bing, Branch::Wu),
            Pillar::new(S::Ding, Branch::Mao),
        );
        let hits = chart_stem_relations(chart);
        let combine = hits
            .iter()
            .find(|h| h.kind == StemRelationKind::FiveCombine)
            .expect("Jia-Ji five-combine should be detected");
        assert!(combine.positions.contains(&Position::Year));
        assert!(combine.positions.contains(&Position::Month));
    }
}
