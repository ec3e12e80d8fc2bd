//! IAU-1980 theory of nutation, 63-term reduced series.
//!
//! Each row gives the five fundamental-argument multipliers `(D, M, M',
//! F, Omega)` and the longitude/obliquity coefficients, in units of
//! `0.0001"`, with a linear rate in `T` (Julian centuries from J2000.0
//! TDB) for the largest terms. Table order follows decreasing amplitude,
//! matching the original theory's publication order; summation walks the
//! table in that fixed order for reproducibility.

/// One nutation series term.
#[derive(Debug, Clone, Copy)]
pub struct NutationTerm {
    /// Multipliers of the mean elongation of the Moon from the Sun, mean
    /// anomaly of the Sun, mean anomaly of the Moon, Moon's argument of
    /// latitude, and longitude of the ascending node of the Moon's orbit.
    pub args: [i32; 5],
    /// Longitude coefficient and its rate, in `0.0001"`.
    pub psi: (f64, f64),
    /// Obliquity coefficient and its rate, in `0.0001"`.
    pub eps: (f64, f64),
}

macro_rules! row {
    ($d:expr, $m:expr, $mp:expr, $f:expr, $om:expr, $psi:expr, $dpsi:expr, $eps:expr, $deps:expr) => {
        NutationTerm {
            args: [$d, $m, $mp, $f, $om],
            psi: ($psi, $dpsi),
            eps: ($eps, $deps),
        }
    };
}

pub const TERMS: &[NutationTerm] = &[
    row!(0, 0, 0, 0, 1, -171_996.0, -174.2, 92_025.0, 8.9),
    row!(-2, 0, 0, 2, 2, -13_187.0, -1.6, 5_736.0, -3.1),
    row!(0, 0, 0, 2, 2, -2_274.0, -0.2, 977.0, -0.5),
    row!(0, 0, 0, 0, 2, 2_062.0, 0.2, -895.0, 0.5),
    row!(0, 1, 0, 0, 0, 1_426.0, -3.4, 54.0, -0.1),
    row!(0, 0, 1, 0, 0, 712.0, 0.1, -7.0, 0.0),
    row!(-2, 1, 0, 2, 2, -517.0, 1.2, 224.0, -0.6),
    row!(0, 0, 0, 2, 1, -386.0, -0.4, 200.0, 0.0),
    row!(0, 0, 1, 2, 2, -301.0, 0.0, 129.0, -0.1),
    row!(-2, -1, 0, 2, 2, 217.0, -0.5, -95.0, 0.3),
    row!(-2, 0, 1, 0, 0, -158.0, 0.0, 0.0, 0.0),
    row!(-2, 0, 0, 2, 1, 129.0, 0.1, -70.0, 0.0),
    row!(0, 0, -1, 2, 2, 123.0, 0.0, -53.0, 0.0),
    row!(2, 0, 0, 0, 0, 63.0, 0.0, 0.0, 0.0),
    row!(0, 0, 1, 0, 1, 63.0, 0.1, -33.0, 0.0),
    row!(2, 0, -1, 2, 2, -59.0, 0.0, 26.0, 0.0),
    row!(0, 0, -1, 0, 1, -58.0, -0.1, 32.0, 0.0),
    row!(0, 0, 1, 2, 1, -51.0, 0.0, 27.0, 0.0),
    row!(-2, 0, 2, 0, 0, 48.0, 0.0, 0.0, 0.0),
    row!(0, 0, -2, 2, 1, 46.0, 0.0, -24.0, 0.0),
    row!(2, 0, 0, 2, 2, -38.0, 0.0, 16.0, 0.0),
    row!(0, 0, 2, 2, 2, -31.0, 0.0, 13.0, 0.0),
    row!(0, 0, 2, 0, 0, 29.0, 0.0, 0.0, 0.0),
    row!(-2, 0, 1, 2, 2, 29.0, 0.0, -12.0, 0.0),
    row!(0, 0, 0, 2, 0, 26.0, 0.0, 0.0, 0.0),
    row!(-2, 0, 0, 2, 0, -22.0, 0.0, 0.0, 0.0),
    row!(0, 0, -1, 2, 1, 21.0, 0.0, -10.0, 0.0),
    row!(0, 2, 0, 0, 0, 17.0, -0.1, 0.0, 0.0),
    row!(2, 0, -1, 0, 1, 16.0, 0.0, -8.0, 0.0),
    row!(-2, 2, 0, 2, 2, -16.0, 0.1, 7.0, 0.0),
    row!(0, 1, 0, 0, 1, -15.0, 0.0, 9.0, 0.0),
    row!(-2, 0, 1, 0, 1, -13.0, 0.0, 7.0, 0.0),
    row!(0, -1, 0, 0, 1, -12.0, 0.0, 6.0, 0.0),
    row!(0, 0, 2, -2, 0, 11.0, 0.0, 0.0, 0.0),
    row!(2, 0, -1, 2, 1, -10.0, 0.0, 5.0, 0.0),
    row!(2, 0, 1, 2, 2, -8.0, 0.0, 3.0, 0.0),
    row!(0, 1, 0, 2, 2, 7.0, 0.0, -3.0, 0.0),
    row!(-2, 1, 1, 0, 0, -7.0, 0.0, 0.0, 0.0),
    row!(0, -1, 0, 2, 2, -7.0, 0.0, 3.0, 0.0),
    row!(2, 0, 0, 2, 1, 7.0, 0.0, -3.0, 0.0),
    row!(2, 0, 1, 0, 0, -6.0, 0.0, 0.0, 0.0),
    row!(-2, 0, 2, 2, 2, 6.0, 0.0, -3.0, 0.0),
    row!(-2, 0, 1, 2, 1, 6.0, 0.0, -3.0, 0.0),
    row!(2, 0, -2, 0, 1, -5.0, 0.0, 0.0, 0.0),
    row!(2, 0, 0, 0, 1, -5.0, 0.0, 3.0, 0.0),
    row!(0, -1, 1, 0, 0, -5.0, 0.0, 0.0, 0.0),
    row!(-2, -1, 0, 2, 1, -5.0, 0.0, 3.0, 0.0),
    row!(-2, 0, 0, 0, 1, 4.0, 0.0, 0.0, 0.0),
    row!(0, 0, 2, 2, 1, 4.0, 0.0, -2.0, 0.0),
    row!(-2, 0, 2, 0, 1, 4.0, 0.0, 0.0, 0.0),
    row!(2, 0, 0, -2, 1, 4.0, 0.0, 0.0, 0.0),
    row!(0, -1, -1, 2, 2, -4.0, 0.0, 0.0, 0.0),
    row!(0, 2, 1, 0, 0, -4.0, 0.0, 0.0, 0.0),
    row!(-1, 0, 1, 0, 0, -3.0, 0.0, 0.0, 0.0),
    row!(-2, 1, 0, 2, 1, -3.0, 0.0, 0.0, 0.0),
    row!(0, 0, 0, 4, 0, 3.0, 0.0, 0.0, 0.0),
    row!(0, 1, 1, 2, 2, 3.0, 0.0, -2.0, 0.0),
    row!(0, -2, 1, 2, 1, -3.0, 0.0, 2.0, 0.0),
    row!(0, -1, 0, 4, 2, -3.0, 0.0, 2.0, 0.0),
    row!(1, 0, -1, 2, 2, 2.0, 0.0, -1.0, 0.0),
    row!(-1, 1, 0, 2, 1, 3.0, 0.0, 0.0, 0.0),
    row!(-1, -1, 1, 0, 0, -2.0, 0.0, 0.0, 0.0),
    row!(1, 0, -1, 0, 0, 1.0, 0.0, 0.0, 0.0),
];

/// The five fundamental arguments (degrees), following Meeus ch. 22, for
/// `t` in Julian centuries from J2000.0 TDB.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t * t + t.powi(3) / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t * t - t.powi(3) / 300_000.0;
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t * t + t.powi(3) / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t * t + t.powi(3) / 327_270.0;
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t.powi(3) / 450_000.0;
    [d, m, mp, f, om]
}

/// Nutation in longitude and obliquity, both in radians, for `t` in
/// Julian centuries from J2000.0 TDB.
pub fn nutation_iau1980(t: f64) -> (f64, f64) {
    let args_deg = fundamental_arguments(t);
    let args_rad: Vec<f64> = args_deg.iter().map(|d| d.to_radians()).collect();

    let mut dpsi = 0.0;
    let mut deps = 0.0;

    for term in TERMS {
        let arg: f64 = term
            .args
            .iter()
            .zip(&args_rad)
            .map(|(&mult, &a)| mult as f64 * a)
            .sum();
        dpsi += (term.psi.0 + term.psi.1 * t) * arg.sin();
        deps += (term.eps.0 + term.eps.1 * t) * arg.cos();
    }

    // 0.0001" -> radians.
    let arcsec_per_unit = 0.0001 / 3600.0;
    (
        dpsi * arcsec_per_unit.to_radians(),
        deps * arcsec_per_unit.to_radians(),
    )
}

/// Mean obliquity of the ecliptic, radians, IAU 1980 formula, `t` in
/// Julian centuries from J2000.0 TDB.
pub fn mean_obliquity(t: f64) -> f64 {
    let arcsec = 84_381.448 - 46.815_0 * t - 0.000_59 * t * t + 0.001_813 * t.powi(3);
    (arcsec / 3600.0).to_radians()
}
