pub mod satellites;

pub use satellites::{find_satellite, GeoSatellite, COMMON_SATELLITES};
