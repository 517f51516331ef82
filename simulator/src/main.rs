use anyhow::Context;
use clap::Parser;
use generator::track::{build_track, TrackConfig};
use gui_bridge::bridge::{gui_bind_address, GuiBridge};
use gui_bridge::model::VisualizationModel;
use satlinkcore::catalog::COMMON_SATELLITES;
use satlinkcore::SignalStatus;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{
    ScenarioConfig, DEFAULT_SATELLITE_LNG, DEFAULT_SHIP_LAT, DEFAULT_SHIP_LNG,
};
use workflow::runner::Runner;
use workflow::zones::ZoneRegistry;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Ship-to-GEO look angle and line-of-sight driver")]
struct Args {
    /// Load a scenario from YAML instead of the position flags
    #[arg(long)]
    scenario: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_SHIP_LAT, allow_hyphen_values = true)]
    lat: f64,
    #[arg(long, default_value_t = DEFAULT_SHIP_LNG, allow_hyphen_values = true)]
    lng: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    heading: f64,
    #[arg(long, default_value_t = DEFAULT_SATELLITE_LNG, allow_hyphen_values = true)]
    sat_lng: f64,
    /// Satellite preset name, overrides --sat-lng
    #[arg(long)]
    satellite: Option<String>,
    /// Print the satellite presets and exit
    #[arg(long, default_value_t = false)]
    list_satellites: bool,
    /// Report the status at every heading around the compass
    #[arg(long, default_value_t = false)]
    sweep: bool,
    /// Replay a generated voyage described by a YAML track config
    #[arg(long)]
    track: Option<PathBuf>,
    /// Append a one-line summary to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Keep the visualization bridge alive until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
    #[arg(long, default_value_t = 9000)]
    port: u16,
}

fn load_track_config(path: &Path) -> anyhow::Result<TrackConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading track config {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing track config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_satellites {
        for sat in COMMON_SATELLITES.iter() {
            println!("{:<14} {:>7.1}", sat.name, sat.longitude_deg);
        }
        return Ok(());
    }

    let scenario = if let Some(path) = args.scenario.as_ref() {
        ScenarioConfig::load(path)?
    } else {
        ScenarioConfig::from_args(args.lat, args.lng, args.heading, args.sat_lng, args.satellite)
    };

    let registry = ZoneRegistry::new(scenario.zone_set()).context("loading blockage zones")?;
    log::info!("loaded {} blockage zones", registry.len());
    let runner = Runner::new(scenario.clone());
    let result = runner.execute(registry.as_slice())?;
    let look = &result.assessment.look_angle;

    println!(
        "Link -> status {}, azimuth {:.2}, elevation {:.2}, relative {:.2}, range {:.1} km",
        result.assessment.status, look.azimuth, look.elevation, look.relative_azimuth, look.range
    );
    if !result.blocking_zone_names.is_empty() {
        println!("Blocked by: {}", result.blocking_zone_names.join(", "));
    }
    if result.assessment.status == SignalStatus::NoLos {
        println!("Transmission inhibited: elevation below {:.1} deg", scenario.thresholds.no_los_deg);
    }
    if let Some(heading) = result.suggested_heading {
        println!("Suggested heading to clear obstruction: {:.1}", heading);
    }

    if args.sweep {
        for point in runner.sweep(registry.as_slice(), scenario.sweep_step_deg)? {
            println!(
                "heading {:>6.1} relative {:>6.1} {}",
                point.heading_deg, point.relative_azimuth, point.status
            );
        }
    }

    if let Some(path) = args.track.as_ref() {
        let track = build_track(&load_track_config(path)?).context("building track")?;
        let outcomes = runner.replay(&track, registry.as_slice())?;
        let degraded = outcomes
            .iter()
            .filter(|o| matches!(o.assessment.status, SignalStatus::Blocked | SignalStatus::NoLos))
            .count();
        println!("Track replay -> samples {}, degraded {}", outcomes.len(), degraded);
    }

    let metrics = runner.metrics();
    log::info!(
        "evaluations {} (optimal {}, marginal {}, blocked {}, no_los {}), rejected {}",
        metrics.evaluated(),
        metrics.optimal,
        metrics.marginal,
        metrics.blocked,
        metrics.no_los,
        metrics.rejected
    );

    if let Some(report_path) = args.report.as_ref() {
        let report = format!(
            "lat={:.4} lng={:.4} heading={:.1} sat={:.1} status={} az={:.3} el={:.3} range={:.1}\n",
            result.input.ship.lat,
            result.input.ship.lng,
            result.input.heading_deg,
            result.input.satellite_lng_deg,
            result.assessment.status,
            look.azimuth,
            look.elevation,
            look.range
        );
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)
            .with_context(|| format!("opening report {}", report_path.display()))?;
        file.write_all(report.as_bytes())?;
    }

    if args.serve {
        let zones = registry.snapshot();
        let gui_bridge = GuiBridge::new(Arc::new(runner), registry);
        gui_bridge.publish(VisualizationModel::from_result(&result, zones));
        let (bound, _server) = gui_bridge.serve(gui_bind_address(args.port))?;
        gui_bridge.publish_status(&format!(
            "HTTP bridge running on http://{} (Ctrl+C to stop)...",
            bound
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
