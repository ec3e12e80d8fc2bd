//! Solar ephemeris: reduced VSOP87 Earth series, IAU-1980 nutation,
//! apparent geocentric solar longitude, and the 24 solar terms.

pub mod nutation;
pub mod solar;
pub mod solar_term;
pub mod vsop87;

pub use nutation::{fundamental_arguments, mean_obliquity, nutation_iau1980};
pub use solar::apparent_solar_longitude;
pub use solar_term::{all_solar_terms, prior_and_next_jie, solar_term_instant, SolarTerm, ALL_TERMS};
pub use vsop87::{earth_heliocentric_latitude, earth_heliocentric_longitude, earth_radius_vector};
