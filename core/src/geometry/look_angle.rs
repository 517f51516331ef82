use serde::{Deserialize, Serialize};

use crate::geometry::constants::{EARTH_RADIUS_KM, GEO_RADIUS_KM};
use crate::math::angles::{deg_to_rad, normalize_deg, rad_to_deg};
use crate::prelude::ShipPosition;

/// Pointing solution from the ship to a GEO satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookAngle {
    /// True-north azimuth in `[0, 360)`.
    pub azimuth: f64,
    /// Degrees above the horizon.
    pub elevation: f64,
    /// Slant range in km.
    pub range: f64,
    /// Bow-relative azimuth in `[0, 360)`.
    pub relative_azimuth: f64,
}

/// Computes the look angle to a satellite parked on the equatorial GEO belt.
///
/// Uses the spherical-earth approximation: central angle from
/// `cos(beta) = cos(lat) * cos(dlng)`, elevation from
/// `atan((cos(beta) - Re/Rg) / sin(beta))` and azimuth from
/// `atan2(tan(dlng), sin(lat)) + 180`. The azimuth term is a simplification of
/// the full topocentric transform; its behaviour near the poles and on the
/// equator is pinned by tests rather than corrected here.
///
/// The longitude difference is deliberately left un-normalized, every use of
/// it goes through a periodic function.
pub fn compute_look_angle(ship: &ShipPosition, satellite_lng: f64, heading: f64) -> LookAngle {
    let lat_rad = deg_to_rad(ship.lat);
    let dlng_rad = deg_to_rad(satellite_lng - ship.lng);

    let cos_beta = lat_rad.cos() * dlng_rad.cos();
    let central_angle = cos_beta.clamp(-1.0, 1.0).acos();

    let range = (EARTH_RADIUS_KM.powi(2) + GEO_RADIUS_KM.powi(2)
        - 2.0 * EARTH_RADIUS_KM * GEO_RADIUS_KM * cos_beta)
        .sqrt();

    let sin_beta = central_angle.sin();
    let elevation = if sin_beta == 0.0 {
        // satellite at zenith
        90.0
    } else {
        rad_to_deg(((cos_beta - EARTH_RADIUS_KM / GEO_RADIUS_KM) / sin_beta).atan())
    };

    let azimuth = normalize_deg(rad_to_deg(dlng_rad.tan().atan2(lat_rad.sin())) + 180.0);
    let relative_azimuth = normalize_deg(azimuth - heading);

    LookAngle {
        azimuth,
        elevation,
        range,
        relative_azimuth,
    }
}
