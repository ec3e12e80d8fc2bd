//! True solar time and the historical Chinese DST observance windows.

pub mod dst;
pub mod equation_of_time;

pub use dst::{apply_dst_correction, dst_windows, is_dst_active, DstWindow};
pub use equation_of_time::{equation_of_time_minutes, equation_of_time_radians, TrueSolarReduction};
