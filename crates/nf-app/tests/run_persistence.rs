use std::path::PathBuf;

use nf_app::{RunOptions, RunRequest, ensure_run, list_runs, load_run, query};
use nf_moc::PointKind;

const PROJECT: &str = r#"
version: 1
name: Persistence
designs:
  - id: m2
    name: Mach 2 air
    gas: { gamma: 1.4 }
    table: { min_mach: 1.0, mach_step: 0.0001, max_mach: 4.0 }
    exit_mach: 2.0
    throat: { theta_min_rad: 0.01, characteristics: 3 }
  - id: m2-fine
    name: Mach 2 air, finer fan
    gas: { gamma: 1.4 }
    table: { min_mach: 1.0, mach_step: 0.0001, max_mach: 4.0 }
    exit_mach: 2.0
    throat: { theta_min_rad: 0.01, characteristics: 8 }
"#;

fn write_project(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("nf_app_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("project.yaml");
    std::fs::write(&path, PROJECT).unwrap();
    path
}

fn request<'a>(project_path: &'a PathBuf, design_id: &'a str, use_cache: bool) -> RunRequest<'a> {
    RunRequest {
        project_path,
        design_id,
        options: RunOptions {
            use_cache,
            ..RunOptions::default()
        },
    }
}

#[test]
fn run_persists_and_is_reused() {
    let project_path = write_project("persist");

    let first = ensure_run(&request(&project_path, "m2", true)).expect("run failed");
    assert!(!first.loaded_from_cache);
    assert_eq!(first.manifest.point_count, 12);
    assert_eq!(first.manifest.throat_count, 3);
    assert_eq!(first.manifest.line_count, 3);
    assert!(
        project_path
            .parent()
            .unwrap()
            .join(".nozzleflow/runs")
            .join(&first.run_id)
            .join("points.jsonl")
            .exists()
    );

    let second = ensure_run(&request(&project_path, "m2", true)).expect("cached run failed");
    assert!(second.loaded_from_cache);
    assert_eq!(second.run_id, first.run_id);
    assert_eq!(second.manifest, first.manifest);

    let (manifest, points) = load_run(&project_path, &first.run_id).expect("load failed");
    assert_eq!(manifest.design_id, "m2");
    assert_eq!(points.len(), 12);
    assert_eq!(points[0].kind, PointKind::Throat);
    assert_eq!(points[11].kind, PointKind::Wall);

    let summary = query::get_run_summary(&points).expect("summary failed");
    assert_eq!(summary.throat_count, 3);
    assert_eq!(summary.flow_count, 6);
    assert_eq!(summary.wall_count, 3);
    assert!((summary.exit_mach - 2.0).abs() < 1e-3);
    assert!(summary.exit_flow_angle_deg.abs() < 1e-9);
    assert!(summary.exit_y > 1.0);
    assert!(summary.length_to_height() > 1.0);
}

#[test]
fn no_cache_resolves_and_matches() {
    let project_path = write_project("no_cache");

    let first = ensure_run(&request(&project_path, "m2", true)).unwrap();
    let forced = ensure_run(&request(&project_path, "m2", false)).unwrap();
    assert!(!forced.loaded_from_cache);
    assert_eq!(forced.run_id, first.run_id);

    let (_, points) = load_run(&project_path, &forced.run_id).unwrap();
    assert_eq!(points.len(), forced.manifest.point_count);
}

#[test]
fn runs_listed_per_design() {
    let project_path = write_project("listing");

    let coarse = ensure_run(&request(&project_path, "m2", true)).unwrap();
    let fine = ensure_run(&request(&project_path, "m2-fine", true)).unwrap();
    assert_ne!(coarse.run_id, fine.run_id);
    assert_eq!(fine.manifest.point_count, 8 * 13 / 2);

    assert_eq!(list_runs(&project_path, None).unwrap().len(), 2);
    let only_fine = list_runs(&project_path, Some("m2-fine")).unwrap();
    assert_eq!(only_fine.len(), 1);
    assert_eq!(only_fine[0].run_id, fine.run_id);
}

#[test]
fn unknown_design_and_run_are_reported() {
    let project_path = write_project("unknown");

    assert!(matches!(
        ensure_run(&request(&project_path, "nope", true)),
        Err(nf_app::AppError::DesignNotFound(_))
    ));
    assert!(matches!(
        load_run(&project_path, "deadbeef"),
        Err(nf_app::AppError::RunNotFound(_))
    ));
}
