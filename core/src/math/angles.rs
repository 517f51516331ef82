//! Degree helpers shared by the geometry and obstruction modules.

pub const FULL_TURN_DEG: f64 = 360.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Wraps an angle in degrees into `[0, 360)`.
///
/// `rem_euclid` can return exactly 360.0 for tiny negative inputs
/// (e.g. `-1e-15`), so that case folds back to zero.
pub fn normalize_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(FULL_TURN_DEG);
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Tests whether `value` lies on the closed arc from `start` to `end`.
///
/// All three angles must already be in `[0, 360)`. When `start > end` the arc
/// runs clockwise through north, e.g. 350..10.
pub fn arc_contains(value: f64, start: f64, end: f64) -> bool {
    if start <= end {
        start <= value && value <= end
    } else {
        value >= start || value <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_keeps_in_range_values() {
        assert_eq!(normalize_deg(0.0), 0.0);
        assert_eq!(normalize_deg(359.5), 359.5);
    }

    #[test]
    fn normalize_wraps_negative_and_large_values() {
        assert_eq!(normalize_deg(-10.0), 350.0);
        assert_eq!(normalize_deg(360.0), 0.0);
        assert_eq!(normalize_deg(725.0), 5.0);
        assert_eq!(normalize_deg(-720.0), 0.0);
    }

    #[test]
    fn normalize_never_returns_full_turn() {
        let wrapped = normalize_deg(-1e-15);
        assert!((0.0..FULL_TURN_DEG).contains(&wrapped));
    }

    #[test]
    fn unit_conversion_round_trips() {
        assert_relative_eq!(deg_to_rad(180.0), std::f64::consts::PI);
        assert_relative_eq!(rad_to_deg(std::f64::consts::FRAC_PI_2), 90.0);
    }

    #[test]
    fn plain_arc_is_inclusive() {
        assert!(arc_contains(170.0, 170.0, 190.0));
        assert!(arc_contains(190.0, 170.0, 190.0));
        assert!(arc_contains(180.0, 170.0, 190.0));
        assert!(!arc_contains(169.9, 170.0, 190.0));
        assert!(!arc_contains(10.0, 170.0, 190.0));
    }

    #[test]
    fn wrapping_arc_spans_north() {
        assert!(arc_contains(355.0, 350.0, 10.0));
        assert!(arc_contains(0.0, 350.0, 10.0));
        assert!(arc_contains(10.0, 350.0, 10.0));
        assert!(!arc_contains(180.0, 350.0, 10.0));
        assert!(!arc_contains(349.0, 350.0, 10.0));
    }

    #[test]
    fn zero_width_arc_matches_single_bearing() {
        assert!(arc_contains(42.0, 42.0, 42.0));
        assert!(!arc_contains(42.5, 42.0, 42.0));
    }
}
