//! Derived chart ornaments: hidden stems (carried on `bazi_pillars::Branch`
//! itself), the ten gods, nayin, shensha, and branch/stem relation
//! detection.

pub mod nayin;
pub mod relations;
pub mod shensha;
pub mod ten_gods;

pub use nayin::{nayin_for_pillar, NaYin, NAYIN_TABLE};
pub use relations::{
    branch_relations, branch_triads_present, chart_branch_relations, chart_stem_relations,
    stem_clash, stem_five_combine, BranchRelationKind, PunishKind, StemRelationKind,
};
pub use shensha::{shensha_for_chart, ShenShaHit, ShenShaKind};
pub use ten_gods::{ten_god, ten_god_branch, TenGod};
