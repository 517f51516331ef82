use serde::Serialize;

use crate::prelude::{LinkError, LinkResult};

/// A geostationary satellite identified by its orbital slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoSatellite {
    pub name: &'static str,
    pub longitude_deg: f64,
}

/// Commonly used maritime GEO slots, west to east.
pub const COMMON_SATELLITES: [GeoSatellite; 11] = [
    GeoSatellite { name: "Horizons 4", longitude_deg: -127.0 },
    GeoSatellite { name: "Intelsat 21", longitude_deg: -58.0 },
    GeoSatellite { name: "Intelsat 32e", longitude_deg: -43.0 },
    GeoSatellite { name: "Intelsat 35e", longitude_deg: -34.5 },
    GeoSatellite { name: "Intelsat 37e", longitude_deg: -18.0 },
    GeoSatellite { name: "Intelsat 33e", longitude_deg: 60.0 },
    GeoSatellite { name: "Intelsat 20", longitude_deg: 68.5 },
    GeoSatellite { name: "Intelsat 22", longitude_deg: 72.0 },
    GeoSatellite { name: "APSTAR 6D", longitude_deg: 134.0 },
    GeoSatellite { name: "Horizons 3e", longitude_deg: 169.0 },
    GeoSatellite { name: "Intelsat 18", longitude_deg: 180.0 },
];

/// Case-insensitive lookup by satellite name.
pub fn find_satellite(name: &str) -> LinkResult<GeoSatellite> {
    let wanted = name.trim();
    COMMON_SATELLITES
        .iter()
        .copied()
        .find(|sat| sat.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| LinkError::UnknownSatellite(name.to_string()))
}
