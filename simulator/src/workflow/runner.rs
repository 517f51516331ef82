use crate::generator::track::TrackSample;
use crate::workflow::config::ScenarioConfig;
use anyhow::Context;
use satlinkcore::geometry::compute_look_angle;
use satlinkcore::link::{
    assess, evaluate_link, suggest_clear_heading, validate_step, LinkAssessment,
};
use satlinkcore::math::normalize_deg;
use satlinkcore::obstruction::validate_zones;
use satlinkcore::prelude::LinkInput;
use satlinkcore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use satlinkcore::{BlockageZone, SignalStatus};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResult {
    pub input: LinkInput,
    pub assessment: LinkAssessment,
    pub blocking_zone_names: Vec<String>,
    pub suggested_heading: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub heading_deg: f64,
    pub relative_azimuth: f64,
    pub status: SignalStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackOutcome {
    pub sample: TrackSample,
    pub assessment: LinkAssessment,
}

#[derive(Clone)]
pub struct Runner {
    config: ScenarioConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn execute(&self, zones: &[BlockageZone]) -> anyhow::Result<WorkflowResult> {
        self.execute_scenario(&self.config, zones)
    }

    /// Evaluates an arbitrary scenario against the given zone snapshot.
    pub fn execute_scenario(
        &self,
        scenario: &ScenarioConfig,
        zones: &[BlockageZone],
    ) -> anyhow::Result<WorkflowResult> {
        let logger = LogManager::new();
        let input = scenario.to_link_input()?;

        let assessment = match validate_step(scenario.sweep_step_deg)
            .and_then(|()| evaluate_link(&input, zones, &scenario.thresholds))
        {
            Ok(assessment) => assessment,
            Err(err) => {
                self.metrics.record_rejection();
                logger.record_rejection(&err);
                return Err(err).context("evaluating link");
            }
        };

        let suggested_heading = if assessment.status == SignalStatus::Blocked {
            suggest_clear_heading(&input, zones, &scenario.thresholds, scenario.sweep_step_deg)
                .context("searching for a clear heading")?
        } else {
            None
        };
        self.metrics.record_status(assessment.status);
        logger.record_assessment(&input, &assessment);

        let blocking_zone_names = zones
            .iter()
            .filter(|zone| assessment.blocking_zone_ids.contains(&zone.id))
            .map(|zone| zone.name.clone())
            .collect();

        Ok(WorkflowResult {
            input,
            assessment,
            blocking_zone_names,
            suggested_heading,
        })
    }

    /// Status at every heading from 0 up to (not including) 360.
    pub fn sweep(&self, zones: &[BlockageZone], step_deg: f64) -> anyhow::Result<Vec<SweepPoint>> {
        validate_step(step_deg).context("validating sweep step")?;
        let base = self.config.to_link_input()?;
        base.validate().context("validating sweep scenario")?;
        validate_zones(zones).context("validating sweep zones")?;
        self.config
            .thresholds
            .validate()
            .context("validating sweep thresholds")?;

        let steps = (360.0 / step_deg).ceil() as usize;
        let points = (0..steps)
            .map(|k| {
                let heading_deg = normalize_deg(k as f64 * step_deg);
                let look = compute_look_angle(&base.ship, base.satellite_lng_deg, heading_deg);
                let status = assess(look, zones, &self.config.thresholds).status;
                self.metrics.record_status(status);
                SweepPoint {
                    heading_deg,
                    relative_azimuth: look.relative_azimuth,
                    status,
                }
            })
            .collect();
        Ok(points)
    }

    /// Re-evaluates the scenario's satellite from every point of a track.
    pub fn replay(
        &self,
        track: &[TrackSample],
        zones: &[BlockageZone],
    ) -> anyhow::Result<Vec<TrackOutcome>> {
        let satellite_lng = self.config.satellite_longitude()?;
        track
            .iter()
            .map(|sample| -> anyhow::Result<TrackOutcome> {
                let input = LinkInput::new(sample.position, sample.heading_deg, satellite_lng);
                let assessment = evaluate_link(&input, zones, &self.config.thresholds)
                    .with_context(|| format!("evaluating track sample {}", sample.index))?;
                self.metrics.record_status(assessment.status);
                Ok(TrackOutcome {
                    sample: *sample,
                    assessment,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::track::{build_track, TrackConfig};
    use satlinkcore::obstruction::default_blockage_zones;

    #[test]
    fn runner_executes_default_scenario() {
        let runner = Runner::new(ScenarioConfig::default());
        let result = runner.execute(&default_blockage_zones()).unwrap();
        assert_eq!(result.assessment.status, SignalStatus::Optimal);
        assert!(result.blocking_zone_names.is_empty());
        assert_eq!(result.suggested_heading, None);
        assert_eq!(runner.metrics().optimal, 1);
    }

    #[test]
    fn blocked_scenario_names_zone_and_suggests_heading() {
        // azimuth is ~141.92, so heading 322 leaves the satellite just off the stern
        let cfg = ScenarioConfig::from_args(20.0, -155.0, 322.0, -170.0, None);
        let runner = Runner::new(cfg);
        let result = runner.execute(&default_blockage_zones()).unwrap();
        assert_eq!(result.assessment.status, SignalStatus::Blocked);
        assert_eq!(result.blocking_zone_names, vec!["Main Funnel".to_string()]);
        let heading = result.suggested_heading.expect("turn clears the funnel");
        let look = compute_look_angle(&result.input.ship, result.input.satellite_lng_deg, heading);
        assert!(!(170.0..=190.0).contains(&look.relative_azimuth));
    }

    #[test]
    fn invalid_scenario_is_counted_as_rejection() {
        let cfg = ScenarioConfig::from_args(95.0, 0.0, 0.0, 0.0, None);
        let runner = Runner::new(cfg);
        assert!(runner.execute(&[]).is_err());
        assert_eq!(runner.metrics().rejected, 1);
    }

    #[test]
    fn sweep_covers_full_circle() {
        let runner = Runner::new(ScenarioConfig::default());
        let points = runner.sweep(&default_blockage_zones(), 10.0).unwrap();
        assert_eq!(points.len(), 36);
        assert_eq!(points[0].heading_deg, 0.0);
        assert!(points
            .iter()
            .any(|p| p.status == SignalStatus::Blocked));
        assert!(points
            .iter()
            .all(|p| p.status != SignalStatus::NoLos));
        assert_eq!(runner.metrics().evaluated(), 36);
    }

    #[test]
    fn sweep_rejects_zero_step() {
        let runner = Runner::new(ScenarioConfig::default());
        assert!(runner.sweep(&[], 0.0).is_err());
    }

    #[test]
    fn sweep_rejects_vanishing_step() {
        let runner = Runner::new(ScenarioConfig::default());
        let err = runner.sweep(&default_blockage_zones(), 1e-12).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid heading step"));
        assert_eq!(runner.metrics().evaluated(), 0);
    }

    #[test]
    fn oversized_step_is_a_rejection_not_an_evaluation() {
        let cfg = ScenarioConfig {
            sweep_step_deg: 200.0,
            ..Default::default()
        };
        let runner = Runner::new(cfg);
        let err = runner.execute(&default_blockage_zones()).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid heading step 200"));
        let metrics = runner.metrics();
        assert_eq!(metrics.evaluated(), 0);
        assert_eq!(metrics.rejected, 1);
    }

    #[test]
    fn clear_link_skips_heading_search() {
        let runner = Runner::new(ScenarioConfig::default());
        let result = runner.execute(&default_blockage_zones()).unwrap();
        assert_eq!(result.assessment.status, SignalStatus::Optimal);
        assert_eq!(result.suggested_heading, None);
        assert_eq!(runner.metrics().optimal, 1);
        assert_eq!(runner.metrics().rejected, 0);
    }

    #[test]
    fn replay_evaluates_every_sample() {
        let runner = Runner::new(ScenarioConfig::default());
        let track = build_track(&TrackConfig {
            steps: 12,
            seed: 7,
            ..Default::default()
        })
        .unwrap();
        let outcomes = runner.replay(&track, &default_blockage_zones()).unwrap();
        assert_eq!(outcomes.len(), 12);
        assert_eq!(outcomes[3].sample.index, 3);
        assert_eq!(runner.metrics().evaluated(), 12);
    }
}
