use anyhow::Context;
use satlinkcore::catalog::find_satellite;
use satlinkcore::link::validate_step;
use satlinkcore::obstruction::default_blockage_zones;
use satlinkcore::prelude::{LinkInput, ShipPosition};
use satlinkcore::{BlockageZone, ClassifierThresholds};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SHIP_LAT: f64 = 20.0;
pub const DEFAULT_SHIP_LNG: f64 = -155.0;
pub const DEFAULT_SATELLITE_LNG: f64 = -170.0;
pub const DEFAULT_SWEEP_STEP_DEG: f64 = 5.0;

/// One evaluation scenario, as read from YAML or assembled from CLI flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub ship: ShipPosition,
    pub heading_deg: f64,
    pub satellite_lng_deg: f64,
    /// Catalog name; when set it overrides `satellite_lng_deg`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satellite: Option<String>,
    /// Falls back to the vessel's default obstructions when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<BlockageZone>>,
    pub thresholds: ClassifierThresholds,
    pub sweep_step_deg: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            ship: ShipPosition {
                lat: DEFAULT_SHIP_LAT,
                lng: DEFAULT_SHIP_LNG,
            },
            heading_deg: 0.0,
            satellite_lng_deg: DEFAULT_SATELLITE_LNG,
            satellite: None,
            zones: None,
            thresholds: ClassifierThresholds::default(),
            sweep_step_deg: DEFAULT_SWEEP_STEP_DEG,
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario config {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario config {}", path_ref.display()))?;
        config
            .validate()
            .with_context(|| format!("validating scenario config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Checks the settings that are not part of a single link evaluation.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_step(self.sweep_step_deg).context("checking sweep_step_deg")?;
        Ok(())
    }

    pub fn from_args(
        lat: f64,
        lng: f64,
        heading_deg: f64,
        satellite_lng_deg: f64,
        satellite: Option<String>,
    ) -> Self {
        Self {
            ship: ShipPosition { lat, lng },
            heading_deg,
            satellite_lng_deg,
            satellite,
            ..Default::default()
        }
    }

    pub fn satellite_longitude(&self) -> anyhow::Result<f64> {
        match self.satellite.as_deref() {
            Some(name) => Ok(find_satellite(name)
                .with_context(|| format!("resolving satellite preset '{}'", name))?
                .longitude_deg),
            None => Ok(self.satellite_lng_deg),
        }
    }

    pub fn to_link_input(&self) -> anyhow::Result<LinkInput> {
        Ok(LinkInput::new(
            self.ship,
            self.heading_deg,
            self.satellite_longitude()?,
        ))
    }

    pub fn zone_set(&self) -> Vec<BlockageZone> {
        self.zones.clone().unwrap_or_else(default_blockage_zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_describe_pacific_scenario() {
        let cfg = ScenarioConfig::default();
        let input = cfg.to_link_input().unwrap();
        assert_eq!(input.ship.lat, 20.0);
        assert_eq!(input.ship.lng, -155.0);
        assert_eq!(input.satellite_lng_deg, -170.0);
        assert_eq!(cfg.zone_set().len(), 3);
    }

    #[test]
    fn satellite_preset_overrides_longitude() {
        let cfg = ScenarioConfig::from_args(10.0, 5.0, 45.0, 0.0, Some("Intelsat 33e".into()));
        assert_eq!(cfg.satellite_longitude().unwrap(), 60.0);
    }

    #[test]
    fn unknown_preset_is_reported() {
        let cfg = ScenarioConfig::from_args(10.0, 5.0, 45.0, 0.0, Some("Telstar".into()));
        let err = cfg.to_link_input().unwrap_err();
        assert!(format!("{:#}", err).contains("unknown satellite 'Telstar'"));
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"ship:\n  lat: -33.9\n  lng: 18.4\nheading_deg: 270\nsatellite: Intelsat 37e\nzones:\n  - id: mast\n    name: Foremast\n    start_rel_az: 355\n    end_rel_az: 5\n    max_elevation: 35\nthresholds:\n  marginal_deg: 20\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = ScenarioConfig::load(&path).unwrap();
        assert_eq!(cfg.ship.lat, -33.9);
        assert_eq!(cfg.satellite_longitude().unwrap(), -18.0);
        assert_eq!(cfg.zone_set()[0].id, "mast");
        assert_eq!(cfg.thresholds.no_los_deg, 5.0);
        assert_eq!(cfg.thresholds.marginal_deg, 20.0);
        assert_eq!(cfg.sweep_step_deg, DEFAULT_SWEEP_STEP_DEG);
    }

    #[test]
    fn config_load_rejects_oversized_sweep_step() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"heading_deg: 10\nsweep_step_deg: 200\n").unwrap();
        let path = temp.into_temp_path();
        let err = ScenarioConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid heading step 200"));
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = ScenarioConfig::load("/nonexistent/scenario.yaml").unwrap_err();
        assert!(err.to_string().contains("reading scenario config"));
    }
}
