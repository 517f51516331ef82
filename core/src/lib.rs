//! Ship-to-GEO pointing and line-of-sight classification core for SatLink.
//!
//! Everything here is a pure function over plain values: a look angle is
//! computed from the ship position, heading and satellite slot, then matched
//! against bow-relative blockage zones and an elevation policy to yield a
//! [`SignalStatus`]. Zone collections are owned by the embedding application
//! and only borrowed here.

pub mod catalog;
pub mod geometry;
pub mod link;
pub mod math;
pub mod obstruction;
pub mod prelude;
pub mod telemetry;

pub use geometry::{compute_look_angle, LookAngle};
pub use link::{classify, evaluate_link, ClassifierThresholds, LinkAssessment, SignalStatus};
pub use obstruction::{is_blocking, BlockageZone};
pub use prelude::{LinkError, LinkInput, LinkResult, ShipPosition};
