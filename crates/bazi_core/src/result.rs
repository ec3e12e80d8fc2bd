//! The self-describing result record `compute` returns (spec.md §3):
//! the civil and lunar dates, the true-solar reduction, the relevant
//! solar terms, the four pillars, and every derived ornament, bundled
//! as plain, serde-friendly view data rather than the algorithmic enum
//! types the lower crates use internally.

use serde::{Deserialize, Serialize};

use bazi_calendar::LunarDate;
use bazi_elements::{ElementTally, StrengthAnalysis};
use bazi_luck::{LuckDirection, LuckStep, StartAge};
use bazi_ornaments::{BranchRelationHit, NaYin, PunishKind, ShenShaHit, StemRelationHit, TenGod};
use bazi_pillars::{Branch, Element, FourPillars, HiddenStem, Pillar, Position};
use bazi_time::{CivilInstant, UtcOffset};

fn civil_iso(jd_ut: f64, offset: UtcOffset) -> String {
    let (y, m, d, h, min, s) = CivilInstant::from_jd_ut(jd_ut, offset).civil_fields();
    format!("{y:04}-{m:02}-{d:02} {h:02}:{min:02}:{s:02.0}")
}

/// A civil (Gregorian) calendar date and wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivilDateView {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// A lunisolar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDateView {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

impl From<LunarDate> for LunarDateView {
    fn from(d: LunarDate) -> Self {
        Self {
            year: d.year,
            month: d.month,
            day: d.day,
            is_leap_month: d.is_leap_month,
        }
    }
}

/// The true-solar-time reduction applied to the civil input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrueSolarReductionView {
    pub longitude_offset_minutes: f64,
    pub equation_of_time_minutes: f64,
    pub total_minutes: f64,
    pub dst_applied: bool,
}

/// One of the 24 solar terms, with its civil-clock instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTermView {
    pub name: String,
    pub index: u32,
    pub instant: String,
}

/// One stem/branch pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarView {
    pub stem: String,
    pub stem_element: String,
    pub stem_polarity: String,
    pub branch: String,
    pub branch_element: String,
    pub branch_polarity: String,
}

impl From<Pillar> for PillarView {
    fn from(p: Pillar) -> Self {
        Self {
            stem: p.stem.name().to_string(),
            stem_element: p.stem.element().name().to_string(),
            stem_polarity: p.stem.polarity().name().to_string(),
            branch: p.branch.name().to_string(),
            branch_element: p.branch.element().name().to_string(),
            branch_polarity: p.branch.polarity().name().to_string(),
        }
    }
}

/// The four pillars, tagged by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FourPillarsView {
    pub year: PillarView,
    pub month: PillarView,
    pub day: PillarView,
    pub hour: PillarView,
}

impl From<FourPillars> for FourPillarsView {
    fn from(chart: FourPillars) -> Self {
        Self {
            year: chart.year.into(),
            month: chart.month.into(),
            day: chart.day.into(),
            hour: chart.hour.into(),
        }
    }
}

/// One hidden stem (藏干) carried within a branch, with its role and
/// its configured display weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenStemView {
    pub stem: String,
    pub role: String,
    pub weight: f64,
}

fn hidden_stem_views(branch: Branch, weights: bazi_config::HiddenStemWeights) -> Vec<HiddenStemView> {
    branch
        .hidden_stems()
        .iter()
        .map(|hs: &HiddenStem| HiddenStemView {
            stem: hs.stem.name().to_string(),
            role: hs.role.name().to_string(),
            weight: weights.for_role(hs.role),
        })
        .collect()
}

/// A chart position's hidden stems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedHiddenStems {
    pub position: String,
    pub hidden_stems: Vec<HiddenStemView>,
}

/// One non-self stem or branch's ten-god relation to the day master.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenGodEntry {
    pub position: String,
    pub label: String,
    pub ten_god: String,
}

fn ten_god_name(g: TenGod) -> String {
    g.name().to_string()
}

/// A pillar's nayin (納音): elemental "sound" label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NayinEntry {
    pub position: String,
    pub name: String,
    pub element: String,
}

fn nayin_view(position: Position, nayin: NaYin) -> NayinEntry {
    NayinEntry {
        position: position.name().to_string(),
        name: nayin.name.to_string(),
        element: nayin.element.name().to_string(),
    }
}

/// One detected shensha (神煞) ornament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShenShaView {
    pub kind: String,
    pub anchor: String,
    pub positions: Vec<String>,
}

impl From<ShenShaHit> for ShenShaView {
    fn from(hit: ShenShaHit) -> Self {
        Self {
            kind: hit.kind.name().to_string(),
            anchor: hit.anchor.name().to_string(),
            positions: hit.positions.iter().map(|p| p.name().to_string()).collect(),
        }
    }
}

/// One detected branch relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRelationView {
    pub kind: String,
    pub punish_kind: Option<String>,
    pub positions: Vec<String>,
}

impl From<BranchRelationHit> for BranchRelationView {
    fn from(hit: BranchRelationHit) -> Self {
        Self {
            kind: hit.kind.name().to_string(),
            punish_kind: hit.punish_kind.map(|k: PunishKind| k.name().to_string()),
            positions: hit.positions.iter().map(|p| p.name().to_string()).collect(),
        }
    }
}

/// One detected stem relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StemRelationView {
    pub kind: String,
    pub positions: [String; 2],
}

impl From<StemRelationHit> for StemRelationView {
    fn from(hit: StemRelationHit) -> Self {
        Self {
            kind: hit.kind.name().to_string(),
            positions: hit.positions.map(|p| p.name().to_string()),
        }
    }
}

/// The traditional three-days-one-year luck-cycle start age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartAgeView {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl From<StartAge> for StartAgeView {
    fn from(a: StartAge) -> Self {
        Self { years: a.years, months: a.months, days: a.days }
    }
}

/// One ten-year luck-cycle step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckStepView {
    pub pillar: PillarView,
    pub age_start: u32,
    pub age_end: u32,
}

impl From<LuckStep> for LuckStepView {
    fn from(s: LuckStep) -> Self {
        Self { pillar: s.pillar.into(), age_start: s.age_start, age_end: s.age_end }
    }
}

/// Luck direction, start age, and the ten-year/annual pillar sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckView {
    pub direction: String,
    pub start_age: StartAgeView,
    pub ten_year_sequence: Vec<LuckStepView>,
    pub annual_sequence: Vec<(i32, PillarView)>,
}

fn luck_direction_name(d: LuckDirection) -> String {
    d.name().to_string()
}

/// The three palaces: 胎元 (tai yuan), 命宫 (ming gong), 身宫 (shen gong).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalacesView {
    pub tai_yuan: PillarView,
    pub ming_gong: String,
    pub shen_gong: String,
}

/// The weighted five-element count/score and day-master strength
/// classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiveElementsView {
    pub counts: Vec<(String, u32)>,
    pub scores: Vec<(String, f64)>,
    pub strength: String,
    pub strength_score: f64,
    pub strength_analysis: String,
}

fn five_elements_view(tally: ElementTally, strength: StrengthAnalysis) -> FiveElementsView {
    let counts = Element::ALL.iter().map(|&e| (e.name().to_string(), tally.count(e))).collect();
    let scores = Element::ALL.iter().map(|&e| (e.name().to_string(), tally.score(e))).collect();
    FiveElementsView {
        counts,
        scores,
        strength: strength.status.name().to_string(),
        strength_score: strength.score,
        strength_analysis: strength.analysis,
    }
}

/// The complete result of `compute`: every intermediate and derived
/// annotation of the birth moment, bundled in one self-describing
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaziResult {
    pub civil_date: CivilDateView,
    pub lunar_date: LunarDateView,
    pub true_solar_reduction: TrueSolarReductionView,
    pub month_jie: SolarTermView,
    pub next_jie: SolarTermView,
    pub four_pillars: FourPillarsView,
    pub hidden_stems: Vec<PositionedHiddenStems>,
    pub ten_gods: Vec<TenGodEntry>,
    pub nayin: Vec<NayinEntry>,
    pub shensha: Vec<ShenShaView>,
    pub branch_relations: Vec<BranchRelationView>,
    pub stem_relations: Vec<StemRelationView>,
    pub luck: LuckView,
    pub palaces: PalacesView,
    pub five_elements: FiveElementsView,
}

/// Gathers the pieces of `compute`'s pipeline into the final
/// [`BaziResult`]; kept in `result.rs` (rather than `lib.rs`) since it's
/// pure assembly with no further derivation logic of its own.
#[allow(clippy::too_many_arguments)]
pub(crate) fn assemble(
    civil_date: CivilDateView,
    lunar_date: LunarDate,
    reduction_minutes: (f64, f64, f64),
    dst_applied: bool,
    offset: UtcOffset,
    month_jie: (bazi_astro::SolarTerm, f64),
    next_jie: (bazi_astro::SolarTerm, f64),
    chart: FourPillars,
    hidden_stem_weights: bazi_config::HiddenStemWeights,
    tally: ElementTally,
    strength: StrengthAnalysis,
    direction: LuckDirection,
    start_age: StartAge,
    ten_year_sequence: Vec<LuckStep>,
    annual_sequence: Vec<(i32, Pillar)>,
    tai_yuan: Pillar,
    ming_gong: Branch,
    shen_gong: Branch,
) -> BaziResult {
    let hidden_stems = chart
        .positioned()
        .into_iter()
        .map(|(pos, pillar)| PositionedHiddenStems {
            position: pos.name().to_string(),
            hidden_stems: hidden_stem_views(pillar.branch, hidden_stem_weights),
        })
        .collect();

    let day_stem = chart.day.stem;
    let mut ten_gods = Vec::new();
    for (pos, pillar) in chart.positioned() {
        if pos == Position::Day {
            continue;
        }
        ten_gods.push(TenGodEntry {
            position: pos.name().to_string(),
            label: pillar.stem.name().to_string(),
            ten_god: ten_god_name(bazi_ornaments::ten_god(day_stem, pillar.stem)),
        });
    }
    for (pos, pillar) in chart.positioned() {
        ten_gods.push(TenGodEntry {
            position: pos.name().to_string(),
            label: pillar.branch.name().to_string(),
            ten_god: ten_god_name(bazi_ornaments::ten_god_branch(day_stem, pillar.branch)),
        });
    }

    let nayin = chart
        .positioned()
        .into_iter()
        .map(|(pos, pillar)| nayin_view(pos, bazi_ornaments::nayin_for_pillar(pillar)))
        .collect();

    let shensha = bazi_ornaments::shensha_for_chart(chart).into_iter().map(ShenShaView::from).collect();
    let branch_relations =
        bazi_ornaments::chart_branch_relations(chart).into_iter().map(BranchRelationView::from).collect();
    let stem_relations =
        bazi_ornaments::chart_stem_relations(chart).into_iter().map(StemRelationView::from).collect();

    let (longitude_offset_minutes, equation_of_time_minutes, total_minutes) = reduction_minutes;

    BaziResult {
        civil_date,
        lunar_date: lunar_date.into(),
        true_solar_reduction: TrueSolarReductionView {
            longitude_offset_minutes,
            equation_of_time_minutes,
            total_minutes,
            dst_applied,
        },
        month_jie: SolarTermView {
            name: month_jie.0.name().to_string(),
            index: month_jie.0.index(),
            instant: civil_iso(month_jie.1, offset),
        },
        next_jie: SolarTermView {
            name: next_jie.0.name().to_string(),
            index: next_jie.0.index(),
            instant: civil_iso(next_jie.1, offset),
        },
        four_pillars: chart.into(),
        hidden_stems,
        ten_gods,
        nayin,
        shensha,
        branch_relations,
        stem_relations,
        luck: LuckView {
            direction: luck_direction_name(direction),
            start_age: start_age.into(),
            ten_year_sequence: ten_year_sequence.into_iter().map(LuckStepView::from).collect(),
            annual_sequence: annual_sequence.into_iter().map(|(y, p)| (y, p.into())).collect(),
        },
        palaces: PalacesView {
            tai_yuan: tai_yuan.into(),
            ming_gong: ming_gong.name().to_string(),
            shen_gong: shen_gong.name().to_string(),
        },
        five_elements: five_elements_view(tally, strength),
    }
}
