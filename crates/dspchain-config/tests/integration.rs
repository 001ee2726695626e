//! Integration tests for dspchain-config.
//!
//! These tests drive catalog loading end to end against temporary config
//! directories laid out the way a host installs them.

use dspchain_config::{
    CatalogPaths, GrammarVariant, PresetCatalog, PresetDelegate, PresetError, PresetRecord,
    PresetSerializer, StageNode, load_catalog,
};
use std::fs;
use tempfile::TempDir;

fn config_dir() -> (TempDir, CatalogPaths) {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let paths = CatalogPaths::in_config_dir(temp_dir.path());
    fs::create_dir_all(&paths.preset_dir).expect("should create preset dir");
    (temp_dir, paths)
}

/// No current configuration, one library preset.
#[test]
fn test_library_preset_without_current() {
    let (_dir, paths) = config_dir();
    fs::write(paths.preset_dir.join("a.txt"), "eq {\n1.0\n2.0\n}").unwrap();

    let records = load_catalog(&paths).expect("should load catalog");

    assert_eq!(records.len(), 1);
    let a = &records[0];
    assert_eq!(a.name, "a");
    assert!(!a.is_current);
    assert!(a.save_path.is_none());
    assert_eq!(a.nodes.len(), 1);
    assert_eq!(a.nodes[0].stage_type, "eq");
    assert_eq!(a.nodes[0].enabled, None);
    assert_eq!(a.nodes[0].values(), vec!["1.0", "2.0"]);
}

/// A flag column in a library preset is a header with too many tokens.
#[test]
fn test_library_preset_with_flag_column_is_invalid() {
    let (_dir, paths) = config_dir();
    fs::write(paths.preset_dir.join("a.txt"), "eq 0 {\n1.0\n2.0\n}").unwrap();

    let err = load_catalog(&paths).unwrap_err();
    assert!(matches!(err, PresetError::InvalidFormat { line: 1, .. }), "got: {err:?}");
}

/// The current configuration becomes the first, current record.
#[test]
fn test_current_configuration_record() {
    let (_dir, paths) = config_dir();
    fs::write(&paths.current_config, "comp 1 {\n0.5\n}").unwrap();
    fs::write(paths.preset_dir.join("other.txt"), "eq {\n}\n").unwrap();

    let records = load_catalog(&paths).unwrap();

    let current = &records[0];
    assert!(current.is_current);
    assert_eq!(current.name, "Custom");
    assert_eq!(current.save_path.as_ref(), Some(&paths.current_config));
    assert_eq!(current.nodes.len(), 1);
    assert_eq!(current.nodes[0].stage_type, "comp");
    assert_eq!(current.nodes[0].enabled, Some(true));
    assert_eq!(current.nodes[0].values(), vec!["0.5"]);

    assert!(!records[1].is_current);
}

/// A present but corrupt current configuration is not treated as missing.
#[test]
fn test_corrupt_current_configuration_fails() {
    let (_dir, paths) = config_dir();
    fs::write(&paths.current_config, "comp {\n0.5\n}").unwrap();
    fs::write(paths.preset_dir.join("a.txt"), "eq {\n}\n").unwrap();

    let err = load_catalog(&paths).unwrap_err();
    assert!(matches!(err, PresetError::InvalidFormat { .. }), "got: {err:?}");
}

/// The second load is refused before any filesystem access.
#[test]
fn test_second_load_is_refused_without_io() {
    let (_dir, paths) = config_dir();
    fs::write(paths.preset_dir.join("a.txt"), "eq {\n}\n").unwrap();

    let mut catalog = PresetCatalog::new(paths.clone());
    catalog.load().unwrap();

    // Reading this file would fail with InvalidFormat.
    fs::write(&paths.current_config, "not a header\n").unwrap();

    let err = catalog.load().unwrap_err();
    assert!(matches!(err, PresetError::AlreadyLoaded), "got: {err:?}");
    assert_eq!(catalog.len(), 1);
}

/// Missing preset directory and current file give an empty catalog.
#[test]
fn test_missing_everything_is_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let paths = CatalogPaths::in_config_dir(temp_dir.path().join("never-created"));

    let catalog = PresetCatalog::open(paths).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.current().is_none());
}

/// Save then reload through the serializer yields the same catalog.
#[test]
fn test_save_reload_roundtrip() {
    let (dir, paths) = config_dir();
    fs::write(
        &paths.current_config,
        "eq 1 {\n100\n-3\n}\n\ncomp 0 {\n0.5\n\n4\n}\n",
    )
    .unwrap();
    fs::write(paths.preset_dir.join("lead.txt"), "reverb {\n0.8\n}\n").unwrap();

    let catalog = PresetCatalog::open(paths).unwrap();
    assert!(catalog.is_saveable(0));

    let copy_paths = CatalogPaths::in_config_dir(dir.path().join("copy"));
    let mut copy = PresetCatalog::new(copy_paths.clone());
    // Install the records under the new location by writing them out.
    for record in catalog.iter() {
        let path = if record.is_current {
            copy_paths.current_config.clone()
        } else {
            copy_paths.preset_file(&record.name)
        };
        record.save(&path, record.variant()).unwrap();
    }
    copy.load().unwrap();

    assert_eq!(copy.len(), catalog.len());
    for (a, b) in copy.iter().zip(catalog.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.is_current, b.is_current);
    }
}

/// Saving a single library preset writes only that file.
#[test]
fn test_save_single_preset() {
    let (_dir, paths) = config_dir();
    fs::write(paths.preset_dir.join("a.txt"), "eq   {\n  1.0  \n}").unwrap();
    fs::write(paths.preset_dir.join("b.txt"), "comp {\n}").unwrap();

    let catalog = PresetCatalog::open(paths.clone()).unwrap();
    catalog.save_preset(0).unwrap();

    assert_eq!(
        fs::read_to_string(paths.preset_dir.join("a.txt")).unwrap(),
        "eq {\n1.0\n}\n"
    );
    assert_eq!(
        fs::read_to_string(paths.preset_dir.join("b.txt")).unwrap(),
        "comp {\n}"
    );
}

/// A record built in code can be stored in the library and discovered.
#[test]
fn test_programmatic_record_is_discovered() {
    let (_dir, paths) = config_dir();
    let record = PresetRecord::new(
        "built",
        vec![StageNode::new("eq").with_items(["1", "2", "3"])],
    );
    record
        .save(paths.preset_file("built"), GrammarVariant::Bare)
        .unwrap();

    let catalog = PresetCatalog::open(paths).unwrap();
    assert_eq!(catalog.find("built"), Some(&record));
}

/// Presets in sub-directories are named by their relative path.
#[test]
fn test_nested_library_presets() {
    let (_dir, paths) = config_dir();
    let factory = paths.preset_dir.join("factory");
    fs::create_dir_all(&factory).unwrap();
    fs::write(factory.join("rock.txt"), "eq {\n1.0\n}\n").unwrap();
    fs::write(paths.preset_dir.join("top.txt"), "comp {\n}\n").unwrap();

    let catalog = PresetCatalog::open(paths).unwrap();
    let names: Vec<_> = catalog.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["factory/rock", "top"]);

    let rock = catalog.find("factory/rock").expect("nested preset should load");
    assert_eq!(rock.nodes[0].values(), vec!["1.0"]);
    assert!(!rock.is_current);
}
