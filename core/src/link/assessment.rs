use serde::{Deserialize, Serialize};

use crate::geometry::{compute_look_angle, LookAngle};
use crate::link::status::{classify_with, ClassifierThresholds, SignalStatus};
use crate::obstruction::{blocking_zones, validate_zones, BlockageZone};
use crate::prelude::{LinkInput, LinkResult};

/// Everything a display or advisory collaborator needs about one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAssessment {
    pub look_angle: LookAngle,
    pub status: SignalStatus,
    /// Ids of zones whose sector and height cover the satellite, even when a
    /// higher-precedence rule decided the status.
    pub blocking_zone_ids: Vec<String>,
}

impl LinkAssessment {
    pub fn is_transmit_permitted(&self) -> bool {
        self.status != SignalStatus::NoLos
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Validates the boundary inputs, then runs look angle, zone matching and
/// classification.
pub fn evaluate_link(
    input: &LinkInput,
    zones: &[BlockageZone],
    thresholds: &ClassifierThresholds,
) -> LinkResult<LinkAssessment> {
    input.validate()?;
    validate_zones(zones)?;
    thresholds.validate()?;

    let look_angle = compute_look_angle(&input.ship, input.satellite_lng_deg, input.heading_deg);
    Ok(assess(look_angle, zones, thresholds))
}

/// Unchecked counterpart of [`evaluate_link`] for already-validated inputs.
pub fn assess(
    look_angle: LookAngle,
    zones: &[BlockageZone],
    thresholds: &ClassifierThresholds,
) -> LinkAssessment {
    let status = classify_with(&look_angle, zones, thresholds);
    let blocking_zone_ids = blocking_zones(zones, &look_angle)
        .into_iter()
        .map(|zone| zone.id.clone())
        .collect();

    LinkAssessment {
        look_angle,
        status,
        blocking_zone_ids,
    }
}
