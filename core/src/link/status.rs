use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::LookAngle;
use crate::obstruction::{any_blocking, BlockageZone};
use crate::prelude::{LinkError, LinkResult};

/// Elevation below which transmission is inhibited to protect adjacent slots.
pub const NO_LOS_ELEVATION_DEG: f64 = 5.0;

/// Elevation below which an unobstructed link is considered marginal.
pub const MARGINAL_ELEVATION_DEG: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalStatus {
    Optimal,
    Marginal,
    Blocked,
    NoLos,
}

impl SignalStatus {
    pub const ALL: [SignalStatus; 4] = [
        SignalStatus::Optimal,
        SignalStatus::Marginal,
        SignalStatus::Blocked,
        SignalStatus::NoLos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStatus::Optimal => "OPTIMAL",
            SignalStatus::Marginal => "MARGINAL",
            SignalStatus::Blocked => "BLOCKED",
            SignalStatus::NoLos => "NO_LOS",
        }
    }
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elevation thresholds for the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierThresholds {
    pub no_los_deg: f64,
    pub marginal_deg: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            no_los_deg: NO_LOS_ELEVATION_DEG,
            marginal_deg: MARGINAL_ELEVATION_DEG,
        }
    }
}

impl ClassifierThresholds {
    pub fn validate(&self) -> LinkResult<()> {
        if !self.no_los_deg.is_finite() || !self.marginal_deg.is_finite() {
            return Err(LinkError::InvalidThresholds(format!(
                "thresholds must be finite, got {} / {}",
                self.no_los_deg, self.marginal_deg
            )));
        }
        if self.no_los_deg > self.marginal_deg {
            return Err(LinkError::InvalidThresholds(format!(
                "no-LOS threshold {} exceeds marginal threshold {}",
                self.no_los_deg, self.marginal_deg
            )));
        }
        Ok(())
    }
}

/// Classifies the link with the default 5 / 15 degree policy.
pub fn classify(look_angle: &LookAngle, zones: &[BlockageZone]) -> SignalStatus {
    classify_with(look_angle, zones, &ClassifierThresholds::default())
}

/// Ordered guard chain, first match wins. The transmit-inhibit rule fires
/// before any obstruction check.
pub fn classify_with(
    look_angle: &LookAngle,
    zones: &[BlockageZone],
    thresholds: &ClassifierThresholds,
) -> SignalStatus {
    if look_angle.elevation < thresholds.no_los_deg {
        SignalStatus::NoLos
    } else if any_blocking(zones, look_angle) {
        SignalStatus::Blocked
    } else if look_angle.elevation < thresholds.marginal_deg {
        SignalStatus::Marginal
    } else {
        SignalStatus::Optimal
    }
}
