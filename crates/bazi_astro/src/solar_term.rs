//! The 24 solar terms (solar-longitude partitions of the tropical year)
//! and a Newton-iteration solver locating the instant each one occurs.

use crate::solar::apparent_solar_longitude;
use bazi_time::{calendar_to_jd, decimal_year, delta_t_seconds, jd_to_calendar, J2000_JD};

/// One of the 24 solar terms, ordered by increasing apparent solar
/// longitude starting at the Spring Equinox (0 deg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
}

/// All 24 terms, in their fixed longitude order starting at the Spring
/// Equinox.
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
];

impl SolarTerm {
    /// Index into [`ALL_TERMS`], also this term's longitude in units of
    /// 15 degrees.
    pub const fn index(self) -> u32 {
        match self {
            Self::ChunFen => 0,
            Self::QingMing => 1,
            Self::GuYu => 2,
            Self::LiXia => 3,
            Self::XiaoMan => 4,
            Self::MangZhong => 5,
            Self::XiaZhi => 6,
            Self::XiaoShu => 7,
            Self::DaShu => 8,
            Self::LiQiu => 9,
            Self::ChuShu => 10,
            Self::BaiLu => 11,
            Self::QiuFen => 12,
            Self::HanLu => 13,
            Self::ShuangJiang => 14,
            Self::LiDong => 15,
            Self::XiaoXue => 16,
            Self::DaXue => 17,
            Self::DongZhi => 18,
            Self::XiaoHan => 19,
            Self::DaHan => 20,
            Self::LiChun => 21,
            Self::YuShui => 22,
            Self::JingZhe => 23,
        }
    }

    /// Target apparent solar longitude, degrees in `[0, 360)`.
    pub fn angle_deg(self) -> f64 {
        self.index() as f64 * 15.0
    }

    /// Target apparent solar longitude, radians.
    pub fn angle_rad(self) -> f64 {
        self.angle_deg().to_radians()
    }

    /// `true` for the twelve "jie" (month-boundary) terms, `false` for
    /// the twelve "qi" (mid-month) terms.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 1
    }

    /// Sexagenary-adjacent month branch this jie term opens, `0..12`
    /// (0 = Zi). Only meaningful for jie terms; LiChun (index 21) opens
    /// the Yin (寅) month, branch index 2.
    pub const fn opens_month_branch(self) -> Option<u32> {
        if !self.is_jie() {
            return None;
        }
        // LiChun (idx 21) -> Yin (branch 2); each subsequent jie (step 2
        // in index) advances one branch.
        let steps = ((self.index() + 24 - 21) / 2) % 12;
        Some((2 + steps) % 12)
    }

    /// The traditional name of this solar term, romanized.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ChunFen => "Chun Fen",
            Self::QingMing => "Qing Ming",
            Self::GuYu => "Gu Yu",
            Self::LiXia => "Li Xia",
            Self::XiaoMan => "Xiao Man",
            Self::MangZhong => "Mang Zhong",
            Self::XiaZhi => "Xia Zhi",
            Self::XiaoShu => "Xiao Shu",
            Self::DaShu => "Da Shu",
            Self::LiQiu => "Li Qiu",
            Self::ChuShu => "Chu Shu",
            Self::BaiLu => "Bai Lu",
            Self::QiuFen => "Qiu Fen",
            Self::HanLu => "Han Lu",
            Self::ShuangJiang => "Shuang Jiang",
            Self::LiDong => "Li Dong",
            Self::XiaoXue => "Xiao Xue",
            Self::DaXue => "Da Xue",
            Self::DongZhi => "Dong Zhi",
            Self::XiaoHan => "Xiao Han",
            Self::DaHan => "Da Han",
            Self::LiChun => "Li Chun",
            Self::YuShui => "Yu Shui",
            Self::JingZhe => "Jing Zhe",
        }
    }
}

const TAU: f64 = std::f64::consts::TAU;

fn signed_angle_diff(a: f64, b: f64) -> f64 {
    let mut d = (a - b) % TAU;
    if d > std::f64::consts::PI {
        d -= TAU;
    }
    if d < -std::f64::consts::PI {
        d += TAU;
    }
    d
}

/// Mean daily motion of the Sun in longitude, radians/day, used only as
/// the Newton-iteration derivative estimate (not for the final answer).
const MEAN_MOTION_RAD_PER_DAY: f64 = TAU / 365.242_19;

/// Julian Date (TDB) at which the Sun's apparent geocentric longitude
/// equals `term`'s target angle, nearest the given initial guess.
fn solve_from_guess(term: SolarTerm, jd_guess: f64) -> f64 {
    let target = term.angle_rad();
    let mut jd = jd_guess;

    for _ in 0..20 {
        let lambda = apparent_solar_longitude(jd);
        let diff = signed_angle_diff(lambda, target);
        if diff.abs() < 1e-10 {
            break;
        }
        jd -= diff / MEAN_MOTION_RAD_PER_DAY;
    }

    jd
}

/// Julian Date (UT) of `term`'s occurrence in the tropical year
/// beginning near `year` (the year the term's approximate Gregorian date
/// falls in).
///
/// The Newton solve itself runs in dynamical time (TDB), since that is
/// the timescale [`apparent_solar_longitude`] is evaluated in; the seed
/// and the final answer are converted to and from UT via the ΔT model
/// (spec: "Convert the resulting dynamical-time JDE to UT by subtracting
/// ΔT/86400").
pub fn solar_term_instant(term: SolarTerm, year: i32) -> f64 {
    // Coarse calendar-date seed: term index 0 (Chun Fen) falls near
    // March 20 of its own calendar year; each subsequent term falls
    // roughly 15.2 days later. Chained forward from index 0, terms past
    // Dong Zhi (index 18) land in January/February/early March, which is
    // `year + 1` relative to a March-20-of-`year` anchor. Seed those from
    // `year - 1`'s Chun Fen instead, so every term resolves within its
    // own Gregorian `year`.
    let anchor_year = if term.index() >= 19 { year - 1 } else { year };
    let days_from_chunfen = term.index() as f64 * 15.218_5;
    let seed_jd_ut = calendar_to_jd(anchor_year, 3, 20.0) + days_from_chunfen;

    let seed_dt_days = delta_t_seconds(decimal_year(anchor_year, 3)) / 86_400.0;
    let jde = solve_from_guess(term, seed_jd_ut + seed_dt_days);

    let (y, m, _) = jd_to_calendar(jde);
    let dt_days = delta_t_seconds(decimal_year(y, m)) / 86_400.0;
    jde - dt_days
}

/// All 24 solar terms for `year`, paired with their Julian Date (UT), in
/// chronological (longitude) order.
///
/// `Xiao Han` through `Jing Zhe` (indices 19-23) fall in January-March of
/// `year` itself, earlier in the timeline than `Chun Fen` (index 0,
/// March of `year`) through `Dong Zhi` (index 18, December of `year`);
/// the result is sorted by instant rather than by [`ALL_TERMS`] index
/// order so callers always see a strictly increasing sequence.
pub fn all_solar_terms(year: i32) -> [(SolarTerm, f64); 24] {
    let mut out: [(SolarTerm, f64); 24] = ALL_TERMS.map(|term| (term, solar_term_instant(term, year)));
    out.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
    out
}

/// The jie term immediately before and immediately after `jd` (UT),
/// each with its Julian Date (UT).
pub fn prior_and_next_jie(jd: f64) -> ((SolarTerm, f64), (SolarTerm, f64)) {
    let approx_year = {
        let (y, _, _) = bazi_time::jd_to_calendar(jd);
        y
    };

    let mut jie_instants: Vec<(SolarTerm, f64)> = [approx_year - 1, approx_year, approx_year + 1]
        .iter()
        .flat_map(|&y| {
            ALL_TERMS
                .iter()
                .filter(|t| t.is_jie())
                .map(move |t| (*t, solar_term_instant(*t, y)))
        })
        .collect();
    jie_instants.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

    let prior = jie_instants
        .iter()
        .rev()
        .find(|(_, t)| *t <= jd)
        .copied()
        .unwrap_or(jie_instants[0]);
    let next = jie_instants
        .iter()
        .find(|(_, t)| *t > jd)
        .copied()
        .unwrap_or(jie_instants[jie_instants.len() - 1]);

    (prior, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_terms_are_distinct_and_strictly_increasing() {
        for year in [1950, 1984, 2000, 2024, 2100] {
            let terms = all_solar_terms(year);
            for pair in terms.windows(2) {
                assert!(pair[0].1 < pair[1].1, "year {year}: {:?} >= {:?}", pair[0], pair[1]);
            }
            let mut names: Vec<&str> = terms.iter().map(|(t, _)| t.name()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), 24);
        }
    }

    #[test]
    fn lichun_falls_within_its_own_named_year() {
        for year in [1984, 2000, 2024] {
            let jd = solar_term_instant(SolarTerm::LiChun, year);
            let (y, m, _) = bazi_time::jd_to_calendar(jd);
            assert_eq!(y, year, "Li Chun {year} resolved to year {y}");
            assert_eq!(m, 2);
        }
    }

    #[test]
    fn lichun_near_early_february() {
        let jd = solar_term_instant(SolarTerm::LiChun, 2024);
        let (y, m, d) = bazi_time::jd_to_calendar(jd);
        assert_eq!(y, 2024);
        assert_eq!(m, 2);
        assert!((3.0..6.0).contains(&d), "day = {d}");
    }

    #[test]
    fn dongzhi_near_late_december() {
        let jd = solar_term_instant(SolarTerm::DongZhi, 2024);
        let (_, m, d) = bazi_time::jd_to_calendar(jd);
        assert_eq!(m, 12);
        assert!((20.0..23.0).contains(&d), "day = {d}");
    }

    #[test]
    fn solved_longitude_matches_target() {
        let jd_ut = solar_term_instant(SolarTerm::LiXia, 2024);
        let (y, m, _) = jd_to_calendar(jd_ut);
        let jde = jd_ut + delta_t_seconds(decimal_year(y, m)) / 86_400.0;
        let lambda = apparent_solar_longitude(jde).to_degrees();
        let mut diff = (lambda - SolarTerm::LiXia.angle_deg()).abs();
        if diff > 180.0 {
            diff = 360.0 - diff;
        }
        assert!(diff < 1e-4, "diff = {diff} deg");
    }

    #[test]
    fn ut_jd_lags_tdb_jd_by_delta_t() {
        let jd_ut = solar_term_instant(SolarTerm::LiChun, 2024);
        let (y, m, _) = jd_to_calendar(jd_ut);
        let dt_days = delta_t_seconds(decimal_year(y, m)) / 86_400.0;
        let jde = jd_ut + dt_days;
        let lambda_at_jde = apparent_solar_longitude(jde).to_degrees();
        let mut diff = (lambda_at_jde - SolarTerm::LiChun.angle_deg()).abs();
        if diff > 180.0 {
            diff = 360.0 - diff;
        }
        assert!(diff < 1e-4, "diff = {diff} deg");
        assert!(dt_days.abs() > 0.0);
    }

    #[test]
    fn jie_terms_are_every_other_index() {
        assert!(SolarTerm::LiChun.is_jie());
        assert!(!SolarTerm::YuShui.is_jie());
        assert!(SolarTerm::QingMing.is_jie());
        assert!(!SolarTerm::ChunFen.is_jie());
    }

    #[test]
    fn lichun_opens_yin_month() {
        assert_eq!(SolarTerm::LiChun.opens_month_branch(), Some(2));
    }

    #[test]
    fn prior_and_next_jie_bracket_instant() {
        let jd = calendar_to_jd(2024, 6, 1.0);
        let (prior, next) = prior_and_next_jie(jd);
        assert!(prior.1 <= jd);
        assert!(next.1 > jd);
        assert!(next.1 - prior.1 < 35.0);
    }

    #[test]
    fn j2000_constant_is_used() {
        assert_eq!(J2000_JD, 2_451_545.0);
    }
}
