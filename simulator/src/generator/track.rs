use anyhow::bail;
use rand::{rngs::StdRng, Rng, SeedableRng};
use satlinkcore::math::normalize_deg;
use satlinkcore::prelude::ShipPosition;
use serde::{Deserialize, Serialize};

const MINUTES_PER_DEGREE_LAT: f64 = 60.0;

/// Parameters for a synthetic voyage: constant course and speed with random
/// yaw about the course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub start: ShipPosition,
    pub course_deg: f64,
    pub speed_knots: f64,
    pub step_minutes: f64,
    pub steps: usize,
    pub yaw_amplitude_deg: f64,
    pub seed: u64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            start: ShipPosition {
                lat: 20.0,
                lng: -155.0,
            },
            course_deg: 0.0,
            speed_knots: 12.0,
            step_minutes: 10.0,
            steps: 36,
            yaw_amplitude_deg: 4.0,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSample {
    pub index: usize,
    pub position: ShipPosition,
    pub heading_deg: f64,
}

/// Dead-reckons the track on a spherical earth. Fails when the course runs
/// over a pole, where a rhumb-line step is undefined.
pub fn build_track(config: &TrackConfig) -> anyhow::Result<Vec<TrackSample>> {
    if !config.speed_knots.is_finite() || config.speed_knots < 0.0 {
        bail!("track speed must be a non-negative number, got {}", config.speed_knots);
    }
    if !config.yaw_amplitude_deg.is_finite() || config.yaw_amplitude_deg < 0.0 {
        bail!(
            "yaw amplitude must be a non-negative number, got {}",
            config.yaw_amplitude_deg
        );
    }
    config.start.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.steps);
    let mut position = config.start;
    let step_nm = config.speed_knots * config.step_minutes / 60.0;
    let course_rad = config.course_deg.to_radians();

    for index in 0..config.steps {
        let yaw = if config.yaw_amplitude_deg > 0.0 {
            rng.gen_range(-config.yaw_amplitude_deg..=config.yaw_amplitude_deg)
        } else {
            0.0
        };
        samples.push(TrackSample {
            index,
            position,
            heading_deg: normalize_deg(config.course_deg + yaw),
        });

        let lat = position.lat + step_nm * course_rad.cos() / MINUTES_PER_DEGREE_LAT;
        if !(-90.0..=90.0).contains(&lat) {
            bail!("track crosses the pole after step {}", index);
        }
        let cos_lat = position.lat.to_radians().cos();
        let dlng = if cos_lat.abs() > f64::EPSILON {
            step_nm * course_rad.sin() / (MINUTES_PER_DEGREE_LAT * cos_lat)
        } else {
            0.0
        };
        position = ShipPosition {
            lat,
            lng: wrap_longitude(position.lng + dlng),
        };
    }

    Ok(samples)
}

fn wrap_longitude(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}
