use serde::{Deserialize, Serialize};

/// Geodetic position of the ship, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipPosition {
    pub lat: f64,
    pub lng: f64,
}

impl ShipPosition {
    /// Builds a position after checking it lies on the globe.
    pub fn new(lat: f64, lng: f64) -> LinkResult<Self> {
        let position = Self { lat, lng };
        position.validate()?;
        Ok(position)
    }

    pub fn validate(&self) -> LinkResult<()> {
        ensure_finite("latitude", self.lat)?;
        ensure_finite("longitude", self.lng)?;
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(LinkError::LatitudeOutOfRange(self.lat));
        }
        ensure_longitude("ship longitude", self.lng)
    }
}

/// Raw inputs for one link evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkInput {
    pub ship: ShipPosition,
    /// Ship heading in degrees true. Any finite value is wrapped into [0, 360).
    pub heading_deg: f64,
    /// Sub-satellite longitude of the GEO target.
    pub satellite_lng_deg: f64,
}

impl LinkInput {
    pub fn new(ship: ShipPosition, heading_deg: f64, satellite_lng_deg: f64) -> Self {
        Self {
            ship,
            heading_deg,
            satellite_lng_deg,
        }
    }

    pub fn validate(&self) -> LinkResult<()> {
        self.ship.validate()?;
        ensure_finite("heading", self.heading_deg)?;
        ensure_finite("satellite longitude", self.satellite_lng_deg)?;
        ensure_longitude("satellite longitude", self.satellite_lng_deg)
    }
}

/// Boundary errors raised for malformed inputs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("{field} {value} is outside [-180, 180]")]
    LongitudeOutOfRange { field: &'static str, value: f64 },
    #[error("invalid blockage zone '{id}': {reason}")]
    InvalidZone { id: String, reason: String },
    #[error("duplicate blockage zone id '{0}'")]
    DuplicateZoneId(String),
    #[error("invalid classifier thresholds: {0}")]
    InvalidThresholds(String),
    #[error("invalid heading step {0}, expected a value in [0.01, 180]")]
    InvalidStep(f64),
    #[error("unknown satellite '{0}'")]
    UnknownSatellite(String),
}

pub type LinkResult<T> = Result<T, LinkError>;

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> LinkResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LinkError::NonFinite { field, value })
    }
}

fn ensure_longitude(field: &'static str, value: f64) -> LinkResult<()> {
    if (-180.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(LinkError::LongitudeOutOfRange { field, value })
    }
}
