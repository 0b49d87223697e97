use nf_project::schema::*;
use nf_project::{load, load_json, load_yaml, save_json, save_yaml, validate_project};

fn design(id: &str, exit_mach: f64, characteristics: usize) -> DesignDef {
    DesignDef {
        id: id.to_string(),
        name: format!("Nozzle {id}"),
        gas: GasDef { gamma: 1.4 },
        table: TableDef {
            min_mach: 1.0,
            mach_step: 0.001,
            max_mach: 5.0,
        },
        exit_mach,
        throat: ThroatDef {
            theta_min_deg: Some(0.5),
            theta_min_rad: None,
            characteristics,
        },
    }
}

#[test]
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: 1,
        name: "Empty Project".to_string(),
        designs: vec![],
    };

    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("nf_project_roundtrip_empty.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_designs() {
    let project = Project {
        version: 1,
        name: "Two nozzles".to_string(),
        designs: vec![design("m2", 2.0, 7), design("m3", 3.0, 12)],
    };

    let path = std::env::temp_dir().join("nf_project_roundtrip_designs.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_designs() {
    let mut radians = design("rad", 2.4, 5);
    radians.throat.theta_min_deg = None;
    radians.throat.theta_min_rad = Some(0.005);
    let project = Project {
        version: 1,
        name: "JSON nozzles".to_string(),
        designs: vec![radians],
    };

    let path = std::env::temp_dir().join("nf_project_roundtrip_designs.json");
    save_json(&path, &project).unwrap();
    assert_eq!(load_json(&path).unwrap(), project);
    assert_eq!(load(&path).unwrap(), project);
}

#[test]
fn table_defaults_apply() {
    let yaml = r#"
version: 1
name: Defaults
designs:
  - id: d
    name: Default table
    gas: { gamma: 1.3 }
    exit_mach: 2.2
    throat: { theta_min_rad: 0.01, characteristics: 4 }
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    validate_project(&project).unwrap();

    let table = project.designs[0].table;
    assert_eq!(table, TableDef::default());
    assert_eq!(table.min_mach, 1.0);
    assert_eq!(table.max_mach, 10.0);
}

#[test]
fn to_parameters_converts_degrees() {
    let params = design("m2", 2.0, 7).to_parameters().unwrap();

    assert_eq!(params.gamma, 1.4);
    assert_eq!(params.exit_mach, 2.0);
    assert_eq!(params.characteristics, 7);
    assert!((params.theta_min - 0.5_f64.to_radians()).abs() < 1e-15);
    assert_eq!(params.table.max_mach, 5.0);
}

#[test]
fn to_parameters_rejects_missing_angle() {
    let mut d = design("m2", 2.0, 7);
    d.throat.theta_min_deg = None;
    assert!(d.to_parameters().is_err());
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("nf_project_does_not_exist.yaml");
    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, nf_project::ProjectError::Io(_)));
}
