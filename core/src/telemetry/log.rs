use log::{debug, info, warn};

use crate::link::{LinkAssessment, SignalStatus};
use crate::prelude::{LinkError, LinkInput};

/// Thin wrapper over the `log` facade that formats link evaluations.
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub fn new() -> Self {
        Self { target: "satlink" }
    }

    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    pub fn record_assessment(&self, input: &LinkInput, assessment: &LinkAssessment) {
        let look = &assessment.look_angle;
        let line = format!(
            "lat {:.2} lng {:.2} hdg {:.1} sat {:.1} -> az {:.1} el {:.1} rel {:.1} range {:.0} km {}",
            input.ship.lat,
            input.ship.lng,
            input.heading_deg,
            input.satellite_lng_deg,
            look.azimuth,
            look.elevation,
            look.relative_azimuth,
            look.range,
            assessment.status
        );
        match assessment.status {
            SignalStatus::Optimal | SignalStatus::Marginal => debug!(target: self.target, "{}", line),
            SignalStatus::Blocked | SignalStatus::NoLos => info!(target: self.target, "{}", line),
        }
    }

    pub fn record_rejection(&self, err: &LinkError) {
        warn!(target: self.target, "rejected link input: {}", err);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
