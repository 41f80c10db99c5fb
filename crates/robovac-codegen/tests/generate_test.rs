//! End-to-end tests for the generation pass.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use robovac_catalog::{builtin_catalog, Catalog, SeriesEntry};
use robovac_codegen::{CodegenError, ModelGenerator, INDEX_FILE};

fn read_tree(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            let name = entry.file_name().to_string_lossy().into_owned();
            (name, fs::read(entry.path()).unwrap())
        })
        .collect()
}

#[test]
fn test_generates_one_file_per_model_plus_index() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = builtin_catalog();

    let report = ModelGenerator::new(catalog.clone(), dir.path())
        .generate()
        .unwrap();

    assert_eq!(report.models, 33);
    assert_eq!(report.files.len(), 34);
    assert_eq!(report.files.last().unwrap(), &dir.path().join(INDEX_FILE));

    for (_, model) in catalog.models() {
        assert!(dir.path().join(format!("{model}.py")).exists(), "{model}");
    }

    let index = fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap();
    for (_, model) in catalog.models() {
        let key = format!("    \"{model}\": {model},\n");
        assert_eq!(index.matches(&key).count(), 1, "{model}");
    }
}

#[test]
fn test_generation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ModelGenerator::new(builtin_catalog(), dir.path());

    generator.generate().unwrap();
    let first = read_tree(dir.path());

    generator.generate().unwrap();
    let second = read_tree(dir.path());

    assert_eq!(first, second);
}

#[test]
fn test_adding_a_model_only_adds_its_file_and_updates_the_index() {
    let base = builtin_catalog();

    // same catalog with one extra C-series model
    let mut series: Vec<SeriesEntry> = base.series().to_vec();
    series[0].models.push("T9999".to_string());
    let models: Vec<String> = base.models().map(|(_, m)| m.to_string()).collect();
    let extended = Catalog::new(
        series,
        models.iter().filter(|m| base.is_map_capable(m.as_str())).cloned().collect(),
        models.iter().filter(|m| base.has_consumables(m.as_str())).cloned().collect(),
    );

    let before_dir = tempfile::tempdir().unwrap();
    let after_dir = tempfile::tempdir().unwrap();
    ModelGenerator::new(base, before_dir.path()).generate().unwrap();
    ModelGenerator::new(extended, after_dir.path()).generate().unwrap();

    let before = read_tree(before_dir.path());
    let after = read_tree(after_dir.path());

    assert_eq!(after.len(), before.len() + 1);
    assert!(after.contains_key("T9999.py"));

    for (name, contents) in &before {
        if name == INDEX_FILE {
            assert_ne!(after[name], *contents, "index must pick up the new model");
        } else {
            assert_eq!(after[name], *contents, "{name} must be unchanged");
        }
    }
}

#[test]
fn test_missing_destination_directory_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = ModelGenerator::new(builtin_catalog(), &missing)
        .generate()
        .unwrap_err();

    match err {
        CodegenError::Write { path, .. } => assert!(path.starts_with(&missing)),
        other => panic!("unexpected error: {other}"),
    }
}
