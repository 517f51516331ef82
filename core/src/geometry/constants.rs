/// Mean Earth radius in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geostationary altitude above the mean radius, km.
pub const GEO_ALTITUDE_KM: f64 = 35_786.0;

/// Orbital radius of the geostationary belt, km.
pub const GEO_RADIUS_KM: f64 = EARTH_RADIUS_KM + GEO_ALTITUDE_KM;
