//! Run execution and caching service.

use std::path::Path;
use std::time::Instant;

use nf_core::timing::Timer;
use nf_gas::FlowTable;
use nf_moc::{Nozzle, Point, march, seed_throat};
use nf_project::DesignDef;
use nf_results::{RunManifest, RunStore, to_points, to_records};
use tracing::info;

use crate::error::AppResult;
use crate::progress::{RunProgressEvent, RunStage};
use crate::project_service;

/// Version tag folded into run ids; a solver change invalidates old caches.
pub const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for running a design.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub solver_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            solver_version: SOLVER_VERSION.to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub design_id: &'a str,
    pub options: RunOptions,
}

/// Concise timing and size summary for a run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub table_time_s: f64,
    pub seed_time_s: f64,
    pub march_time_s: f64,
    pub save_time_s: f64,
    pub load_cache_time_s: f64,
    pub total_time_s: f64,
    pub table_rows: usize,
    pub point_count: usize,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub loaded_from_cache: bool,
    pub timing: RunTimingSummary,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent::stage(
            stage,
            started.elapsed().as_secs_f64(),
            message,
        ));
    }
}

/// Execute or load a run based on request.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    ensure_run_with_progress(request, None)
}

/// Execute or load a run and stream stage progress events.
pub fn ensure_run_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();

    emit_progress(
        &mut progress_cb,
        RunStage::LoadingProject,
        started,
        Some("Loading project".to_string()),
    );

    let project = project_service::load_project(request.project_path)?;
    let design = project_service::get_design(&project, request.design_id)?;

    emit_progress(
        &mut progress_cb,
        RunStage::CheckingCache,
        started,
        Some("Checking run cache".to_string()),
    );

    let run_id = nf_results::compute_run_id(design, &request.options.solver_version);
    let store = RunStore::for_project(request.project_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        info!(design = design.id.as_str(), run_id = run_id.as_str(), "run cache hit");
        emit_progress(
            &mut progress_cb,
            RunStage::LoadingCachedResult,
            started,
            Some("Loading cached run".to_string()),
        );

        let mut timing = RunTimingSummary::default();
        let load_started = Instant::now();
        let manifest = store.load_manifest(&run_id)?;
        timing.load_cache_time_s = load_started.elapsed().as_secs_f64();
        timing.point_count = manifest.point_count;
        timing.total_time_s = started.elapsed().as_secs_f64();

        emit_progress(
            &mut progress_cb,
            RunStage::Completed,
            started,
            Some("Loaded cached run".to_string()),
        );

        return Ok(RunResponse {
            run_id,
            manifest,
            loaded_from_cache: true,
            timing,
        });
    }

    info!(
        design = design.id.as_str(),
        run_id = run_id.as_str(),
        use_cache = request.options.use_cache,
        "run cache miss, solving"
    );

    let mut timing = RunTimingSummary::default();
    let nozzle = execute_design(design, &mut progress_cb, started, &mut timing)?;

    emit_progress(
        &mut progress_cb,
        RunStage::SavingResults,
        started,
        Some(format!("Saving {} points", nozzle.points.len())),
    );

    let save_timer = Timer::start("save run");
    let manifest = RunManifest {
        run_id: run_id.clone(),
        design_id: design.id.clone(),
        design_name: design.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        solver_version: request.options.solver_version.clone(),
        point_count: nozzle.points.len(),
        throat_count: nozzle.throat_count,
        line_count: nozzle.lines.len(),
    };
    store.save_run(&manifest, &to_records(&nozzle.points))?;
    timing.save_time_s = save_timer.stop();

    timing.total_time_s = started.elapsed().as_secs_f64();

    emit_progress(
        &mut progress_cb,
        RunStage::Completed,
        started,
        Some("Run completed".to_string()),
    );

    Ok(RunResponse {
        run_id,
        manifest,
        loaded_from_cache: false,
        timing,
    })
}

fn execute_design(
    design: &DesignDef,
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    started: Instant,
    timing: &mut RunTimingSummary,
) -> AppResult<Nozzle> {
    let params = design.to_parameters()?;

    emit_progress(
        progress_cb,
        RunStage::BuildingTable,
        started,
        Some(params.table.to_string()),
    );
    let table_timer = Timer::start("flow table");
    let table = FlowTable::build(params.gamma, params.table)?;
    timing.table_time_s = table_timer.stop();
    timing.table_rows = table.len();

    emit_progress(
        progress_cb,
        RunStage::SeedingThroat,
        started,
        Some(format!("{} characteristics", params.characteristics)),
    );
    let seed_timer = Timer::start("throat seed");
    let fan = seed_throat(&params, &table)?;
    timing.seed_time_s = seed_timer.stop();

    emit_progress(progress_cb, RunStage::Marching, started, None);
    let march_timer = Timer::start("march");
    let nozzle = march(&table, &fan)?;
    timing.march_time_s = march_timer.stop();
    timing.point_count = nozzle.points.len();

    Ok(nozzle)
}

/// List runs of the project, most recent first.
pub fn list_runs(project_path: &Path, design_id: Option<&str>) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;

    let mut runs = store.list_runs(design_id)?;
    runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(runs)
}

/// Load a specific run's manifest and points.
pub fn load_run(project_path: &Path, run_id: &str) -> AppResult<(RunManifest, Vec<Point>)> {
    let store = RunStore::for_project(project_path)?;

    let manifest = store.load_manifest(run_id)?;
    let records = store.load_points(run_id)?;

    Ok((manifest, to_points(&records)))
}
