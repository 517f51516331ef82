pub mod constants;
pub mod look_angle;

pub use look_angle::{compute_look_angle, LookAngle};
