use serde::{Deserialize, Serialize};

use crate::math::angles::{normalize_deg, FULL_TURN_DEG};
use crate::prelude::{LinkError, LinkResult};

/// Bow-relative sector in which ship structure hides the sky below
/// `max_elevation`.
///
/// `start_rel_az` and `end_rel_az` are read clockwise; a start greater than
/// the end wraps through the bow (e.g. 350..10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockageZone {
    pub id: String,
    pub name: String,
    pub start_rel_az: f64,
    pub end_rel_az: f64,
    pub max_elevation: f64,
}

impl BlockageZone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_rel_az: f64,
        end_rel_az: f64,
        max_elevation: f64,
    ) -> LinkResult<Self> {
        let zone = Self {
            id: id.into(),
            name: name.into(),
            start_rel_az,
            end_rel_az,
            max_elevation,
        };
        zone.validate()?;
        Ok(zone)
    }

    /// Builds a zone centred on a bearing, as entered on the deck editor.
    pub fn from_sector(
        id: impl Into<String>,
        name: impl Into<String>,
        center_rel_az: f64,
        width: f64,
        max_elevation: f64,
    ) -> LinkResult<Self> {
        let id = id.into();
        if !center_rel_az.is_finite() || !width.is_finite() {
            return Err(LinkError::InvalidZone {
                id,
                reason: format!("sector centre {center_rel_az} / width {width} must be finite"),
            });
        }
        if !(0.0..=FULL_TURN_DEG).contains(&width) {
            return Err(LinkError::InvalidZone {
                id,
                reason: format!("sector width {width} is outside [0, 360]"),
            });
        }
        let half_width = width / 2.0;
        Self::new(
            id,
            name,
            normalize_deg(center_rel_az - half_width),
            normalize_deg(center_rel_az + half_width),
            max_elevation,
        )
    }

    pub fn validate(&self) -> LinkResult<()> {
        if self.id.trim().is_empty() {
            return Err(self.invalid("id must not be empty".into()));
        }
        if !self.start_rel_az.is_finite() || !self.end_rel_az.is_finite() {
            return Err(self.invalid(format!(
                "azimuth bounds {} / {} must be finite",
                self.start_rel_az, self.end_rel_az
            )));
        }
        if !self.max_elevation.is_finite() || !(0.0..=90.0).contains(&self.max_elevation) {
            return Err(self.invalid(format!(
                "max elevation {} is outside [0, 90]",
                self.max_elevation
            )));
        }
        Ok(())
    }

    /// Sector bounds wrapped into `[0, 360)`.
    pub fn normalized_bounds(&self) -> (f64, f64) {
        (
            normalize_deg(self.start_rel_az),
            normalize_deg(self.end_rel_az),
        )
    }

    fn invalid(&self, reason: String) -> LinkError {
        LinkError::InvalidZone {
            id: self.id.clone(),
            reason,
        }
    }
}

/// Validates every zone and rejects repeated ids.
pub fn validate_zones(zones: &[BlockageZone]) -> LinkResult<()> {
    for (idx, zone) in zones.iter().enumerate() {
        zone.validate()?;
        if zones[..idx].iter().any(|earlier| earlier.id == zone.id) {
            return Err(LinkError::DuplicateZoneId(zone.id.clone()));
        }
    }
    Ok(())
}

/// Obstructions of a typical vessel: funnel astern, cranes on either beam.
pub fn default_blockage_zones() -> Vec<BlockageZone> {
    vec![
        BlockageZone {
            id: "1".into(),
            name: "Main Funnel".into(),
            start_rel_az: 170.0,
            end_rel_az: 190.0,
            max_elevation: 80.0,
        },
        BlockageZone {
            id: "2".into(),
            name: "Crane Stbd".into(),
            start_rel_az: 85.0,
            end_rel_az: 95.0,
            max_elevation: 20.0,
        },
        BlockageZone {
            id: "3".into(),
            name: "Crane Port".into(),
            start_rel_az: 265.0,
            end_rel_az: 275.0,
            max_elevation: 20.0,
        },
    ]
}
