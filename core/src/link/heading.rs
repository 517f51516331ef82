use crate::geometry::compute_look_angle;
use crate::link::status::{classify_with, ClassifierThresholds, SignalStatus};
use crate::math::angles::normalize_deg;
use crate::obstruction::{validate_zones, BlockageZone};
use crate::prelude::{LinkError, LinkInput, LinkResult};

/// Finest heading increment accepted by searches and sweeps.
pub const MIN_STEP_DEG: f64 = 0.01;

/// Largest useful increment; a half turn already reaches every heading.
pub const MAX_STEP_DEG: f64 = 180.0;

/// Rejects heading increments outside `[MIN_STEP_DEG, MAX_STEP_DEG]`.
pub fn validate_step(step_deg: f64) -> LinkResult<()> {
    if step_deg.is_finite() && (MIN_STEP_DEG..=MAX_STEP_DEG).contains(&step_deg) {
        Ok(())
    } else {
        Err(LinkError::InvalidStep(step_deg))
    }
}

/// Finds the nearest heading that takes the satellite out of every blockage
/// zone.
///
/// Headings are tried at `current ± k * step_deg`, starboard first. Returns
/// `None` unless the link is currently `BLOCKED`: turning the ship cannot
/// raise elevation, so `NO_LOS` has no remedy here.
pub fn suggest_clear_heading(
    input: &LinkInput,
    zones: &[BlockageZone],
    thresholds: &ClassifierThresholds,
    step_deg: f64,
) -> LinkResult<Option<f64>> {
    validate_step(step_deg)?;
    input.validate()?;
    validate_zones(zones)?;
    thresholds.validate()?;

    let status_at = |heading: f64| {
        let look = compute_look_angle(&input.ship, input.satellite_lng_deg, heading);
        classify_with(&look, zones, thresholds)
    };

    if status_at(input.heading_deg) != SignalStatus::Blocked {
        return Ok(None);
    }

    let steps = (MAX_STEP_DEG / step_deg).ceil() as usize;
    for k in 1..=steps {
        let offset = k as f64 * step_deg;
        for candidate in [input.heading_deg + offset, input.heading_deg - offset] {
            if status_at(candidate) != SignalStatus::Blocked {
                log::debug!(
                    "clear heading {:.1} found {:.1} deg from {:.1}",
                    normalize_deg(candidate),
                    offset,
                    input.heading_deg
                );
                return Ok(Some(normalize_deg(candidate)));
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstruction::default_blockage_zones;
    use crate::prelude::ShipPosition;
    use approx::assert_relative_eq;

    const PACIFIC_AZIMUTH: f64 = 141.923_749_373_221;

    fn pacific(heading: f64) -> LinkInput {
        LinkInput::new(ShipPosition { lat: 20.0, lng: -155.0 }, heading, -170.0)
    }

    #[test]
    fn clear_link_needs_no_turn() {
        let suggestion = suggest_clear_heading(
            &pacific(0.0),
            &default_blockage_zones(),
            &ClassifierThresholds::default(),
            1.0,
        )
        .unwrap();
        assert_eq!(suggestion, None);
    }

    #[test]
    fn funnel_blockage_clears_after_turning_past_sector_edge() {
        // satellite dead astern, funnel covers 170..190
        let heading = normalize_deg(PACIFIC_AZIMUTH - 180.0);
        let suggestion = suggest_clear_heading(
            &pacific(heading),
            &default_blockage_zones(),
            &ClassifierThresholds::default(),
            3.0,
        )
        .unwrap()
        .expect("a clear heading exists");
        // twelve degrees to starboard puts the satellite at relative 168
        assert_relative_eq!(suggestion, normalize_deg(heading + 12.0), epsilon = 1e-9);
    }

    #[test]
    fn fully_surrounding_zone_has_no_remedy() {
        let ring = vec![BlockageZone::new("ring", "Radome", 0.0, 359.999, 89.0).unwrap()];
        let tight_ring = vec![BlockageZone::new("ring", "Radome", 1.0, 0.5, 89.0).unwrap()];
        let thresholds = ClassifierThresholds::default();
        assert_eq!(
            suggest_clear_heading(&pacific(0.0), &tight_ring, &thresholds, 10.0).unwrap(),
            None
        );
        assert!(suggest_clear_heading(&pacific(0.0), &ring, &thresholds, 0.0).is_err());
    }

    #[test]
    fn step_bounds_are_enforced() {
        assert!(validate_step(MIN_STEP_DEG).is_ok());
        assert!(validate_step(MAX_STEP_DEG).is_ok());
        assert_eq!(validate_step(1e-12), Err(LinkError::InvalidStep(1e-12)));
        assert_eq!(validate_step(200.0), Err(LinkError::InvalidStep(200.0)));
        assert!(validate_step(f64::NAN).is_err());
    }

    #[test]
    fn malformed_zone_is_rejected_before_searching() {
        let broken = vec![BlockageZone {
            id: "mast".into(),
            name: "Mast".into(),
            start_rel_az: 0.0,
            end_rel_az: 10.0,
            max_elevation: 120.0,
        }];
        let err = suggest_clear_heading(
            &pacific(0.0),
            &broken,
            &ClassifierThresholds::default(),
            5.0,
        )
        .unwrap_err();
        assert!(matches!(err, LinkError::InvalidZone { ref id, .. } if id == "mast"));

        let mut duplicated = default_blockage_zones();
        duplicated.push(duplicated[0].clone());
        assert_eq!(
            suggest_clear_heading(&pacific(0.0), &duplicated, &ClassifierThresholds::default(), 5.0),
            Err(LinkError::DuplicateZoneId("1".into()))
        );
    }

    #[test]
    fn inverted_thresholds_are_rejected_before_searching() {
        let thresholds = ClassifierThresholds {
            no_los_deg: 30.0,
            marginal_deg: 10.0,
        };
        let err = suggest_clear_heading(&pacific(0.0), &default_blockage_zones(), &thresholds, 5.0)
            .unwrap_err();
        assert!(matches!(err, LinkError::InvalidThresholds(_)));
    }

    #[test]
    fn no_los_is_not_fixable_by_turning() {
        let input = LinkInput::new(ShipPosition { lat: 90.0, lng: 0.0 }, 0.0, 0.0);
        let suggestion = suggest_clear_heading(
            &input,
            &default_blockage_zones(),
            &ClassifierThresholds::default(),
            5.0,
        )
        .unwrap();
        assert_eq!(suggestion, None);
    }
}
