use crate::gui_bridge::model::VisualizationModel;
use crate::workflow::config::ScenarioConfig;
use crate::workflow::runner::Runner;
use crate::workflow::zones::ZoneRegistry;
use anyhow::Context;
use satlinkcore::BlockageZone;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    thread,
};
use tokio::runtime::Builder;
use warp::{
    http::StatusCode,
    reply::{Json, WithStatus},
    Filter, Rejection, Reply,
};

const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn gui_bind_address(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

type SharedModel = Arc<RwLock<VisualizationModel>>;
type SharedZones = Arc<RwLock<ZoneRegistry>>;

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn error_reply(status: StatusCode, message: String) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
}

/// Serves the latest link evaluation and the editable zone set to the display
/// layer over HTTP.
pub struct GuiBridge {
    state: SharedModel,
    zones: SharedZones,
    runner: Arc<Runner>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>, registry: ZoneRegistry) -> Self {
        let zones = registry.snapshot();
        Self {
            state: Arc::new(RwLock::new(VisualizationModel {
                zones,
                ..Default::default()
            })),
            zones: Arc::new(RwLock::new(registry)),
            runner,
        }
    }

    /// `GET /assessment`, `POST /evaluate`, `GET|POST /zones`, `DELETE /zones/{id}`.
    pub fn routes(&self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        let state = self.state.clone();
        let zones = self.zones.clone();
        let runner = self.runner.clone();
        let state_filter = warp::any().map(move || state.clone());
        let zones_filter = warp::any().map(move || zones.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_assessment = warp::path!("assessment")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: SharedModel| warp::reply::json(&*read(&state)));

        let evaluate = warp::path!("evaluate")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(zones_filter.clone())
            .and(runner_filter)
            .map(
                |scenario: ScenarioConfig,
                 state: SharedModel,
                 zones: SharedZones,
                 runner: Arc<Runner>| {
                    let zone_set = scenario
                        .zones
                        .clone()
                        .unwrap_or_else(|| read(&zones).snapshot());
                    match runner.execute_scenario(&scenario, &zone_set) {
                        Ok(result) => {
                            let model = VisualizationModel::from_result(&result, zone_set);
                            *write(&state) = model.clone();
                            warp::reply::with_status(warp::reply::json(&model), StatusCode::OK)
                        }
                        Err(err) => {
                            log::warn!("evaluate rejected: {:#}", err);
                            error_reply(StatusCode::BAD_REQUEST, format!("{:#}", err))
                        }
                    }
                },
            );

        let list_zones = warp::path!("zones")
            .and(warp::get())
            .and(zones_filter.clone())
            .map(|zones: SharedZones| warp::reply::json(&read(&zones).snapshot()));

        let add_zone = warp::path!("zones")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::json())
            .and(zones_filter.clone())
            .map(|zone: BlockageZone, zones: SharedZones| {
                match write(&zones).add(zone.clone()) {
                    Ok(()) => warp::reply::with_status(warp::reply::json(&zone), StatusCode::CREATED),
                    Err(err) => error_reply(StatusCode::BAD_REQUEST, err.to_string()),
                }
            });

        let remove_zone = warp::path!("zones" / String)
            .and(warp::delete())
            .and(zones_filter)
            .map(|id: String, zones: SharedZones| match write(&zones).remove(&id) {
                Some(zone) => warp::reply::with_status(warp::reply::json(&zone), StatusCode::OK),
                None => error_reply(StatusCode::NOT_FOUND, format!("no blockage zone '{}'", id)),
            });

        get_assessment
            .or(evaluate)
            .or(list_zones)
            .or(add_zone)
            .or(remove_zone)
    }

    /// Binds the HTTP server, then runs it on a background thread.
    ///
    /// Binding happens on the caller's thread so an occupied port is reported
    /// here. Returns the bound address, which differs from `addr` when port 0
    /// is requested.
    pub fn serve(&self, addr: SocketAddr) -> anyhow::Result<(SocketAddr, thread::JoinHandle<()>)> {
        let routes = self.routes();
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("building bridge runtime")?;
        let (bound, server) = {
            let _enter = runtime.enter();
            warp::serve(routes)
                .try_bind_ephemeral(addr)
                .with_context(|| format!("binding visualization bridge to {}", addr))?
        };
        log::info!("visualization bridge listening on http://{}", bound);
        let handle = thread::spawn(move || runtime.block_on(server));
        Ok((bound, handle))
    }

    pub fn publish(&self, model: VisualizationModel) {
        let mut guard = write(&self.state);
        *guard = model;
        if let Some(assessment) = guard.assessment.as_ref() {
            log::info!(
                "[GUI] status {} az {:.1} el {:.1} zones {}",
                assessment.status,
                assessment.look_angle.azimuth,
                assessment.look_angle.elevation,
                guard.zones.len()
            );
        }
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        read(&self.state).clone()
    }
}
