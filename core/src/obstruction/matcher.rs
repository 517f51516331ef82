use crate::geometry::LookAngle;
use crate::math::angles::arc_contains;
use crate::obstruction::zone::BlockageZone;

/// True when the satellite bearing falls inside the zone and is still below
/// the obstacle's silhouette.
pub fn is_blocking(zone: &BlockageZone, look_angle: &LookAngle) -> bool {
    let (start, end) = zone.normalized_bounds();
    arc_contains(look_angle.relative_azimuth, start, end)
        && look_angle.elevation < zone.max_elevation
}

/// Zones that currently block the satellite, in collection order.
pub fn blocking_zones<'a>(
    zones: &'a [BlockageZone],
    look_angle: &LookAngle,
) -> Vec<&'a BlockageZone> {
    zones
        .iter()
        .filter(|zone| is_blocking(zone, look_angle))
        .collect()
}

pub fn any_blocking(zones: &[BlockageZone], look_angle: &LookAngle) -> bool {
    zones.iter().any(|zone| is_blocking(zone, look_angle))
}
