pub mod angles;

pub use angles::{arc_contains, deg_to_rad, normalize_deg, rad_to_deg};
