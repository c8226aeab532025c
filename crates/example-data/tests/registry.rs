//! File-level tests for the seed registry.
//!
//! Parsing rules are covered by the unit tests; these exercise reading and
//! atomically rewriting registry files through capability-scoped handles.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use camino::{Utf8Path, Utf8PathBuf};
use example_data::{RegistryError, SeedDefinition, SeedRegistry};
use rstest::{fixture, rstest};
use test_support::{open_registry_dir, unique_temp_path};

const VALID_JSON: &str = r#"{
    "version": 1,
    "tagNames": ["RPG", "Action", "Aventure", "Puzzle", "Indépendant", "Multijoueur", "Stratégie"],
    "seeds": [
        {"name": "mossy-owl", "seed": 2026, "gameCount": 50, "userCount": 12}
    ]
}"#;

struct RegistryFile {
    path: Utf8PathBuf,
}

impl RegistryFile {
    fn file_name(&self) -> &Utf8Path {
        Utf8Path::new(self.path.file_name().expect("registry file name"))
    }

    fn load(&self) -> Result<SeedRegistry, RegistryError> {
        let dir = open_registry_dir(&self.path).expect("open registry dir");
        SeedRegistry::from_file(&dir, self.file_name())
    }

    fn entries(&self) -> Vec<String> {
        let dir = open_registry_dir(&self.path).expect("open registry dir");
        let mut names: Vec<String> = dir
            .entries()
            .expect("list registry dir")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

#[fixture]
fn registry_file() -> RegistryFile {
    let path = unique_temp_path("registry", "seeds.json").expect("temp path");
    let dir = open_registry_dir(&path).expect("open registry dir");
    dir.write(path.file_name().expect("file name"), VALID_JSON)
        .expect("write registry");
    RegistryFile { path }
}

#[rstest]
fn loads_registry_from_file(registry_file: RegistryFile) {
    let registry = registry_file.load().expect("load registry");

    assert_eq!(registry.tag_names().len(), 7);
    assert_eq!(
        registry.find_seed("mossy-owl").map(SeedDefinition::game_count),
        Ok(50)
    );
}

#[test]
fn reports_missing_file_with_its_path() {
    let path = unique_temp_path("registry-missing", "absent.json").expect("temp path");
    let dir = open_registry_dir(&path).expect("open registry dir");

    let result = SeedRegistry::from_file(&dir, Utf8Path::new("absent.json"));

    assert!(matches!(
        result,
        Err(RegistryError::IoError { ref path, .. }) if path.as_str() == "absent.json"
    ));
}

#[rstest]
fn rewrites_file_with_appended_seed(registry_file: RegistryFile) {
    let registry = registry_file.load().expect("load registry");
    let updated = registry
        .append_seed(SeedDefinition::new("autumn-breeze".to_owned(), 77, 10, 4))
        .expect("append seed");
    let dir = open_registry_dir(&registry_file.path).expect("open registry dir");

    updated
        .write_to_file(&dir, registry_file.file_name())
        .expect("write registry");

    let reloaded = registry_file.load().expect("reload registry");
    assert_eq!(reloaded, updated);
    assert_eq!(registry_file.entries(), vec!["seeds.json".to_owned()]);
}

#[rstest]
fn written_file_keeps_non_ascii_tag_names(registry_file: RegistryFile) {
    let registry = registry_file.load().expect("load registry");
    let dir = open_registry_dir(&registry_file.path).expect("open registry dir");

    registry
        .write_to_file(&dir, registry_file.file_name())
        .expect("write registry");

    let contents = dir
        .read_to_string(registry_file.file_name())
        .expect("read registry");
    assert!(contents.contains("Stratégie"));
    assert!(contents.contains("\"tagNames\""));
}

#[rstest]
fn refuses_nested_write_targets(registry_file: RegistryFile) {
    let registry = registry_file.load().expect("load registry");
    let dir = open_registry_dir(&registry_file.path).expect("open registry dir");

    let result = registry.write_to_file(&dir, Utf8Path::new("nested/seeds.json"));

    assert!(matches!(result, Err(RegistryError::WriteError { .. })));
    assert_eq!(registry_file.entries(), vec!["seeds.json".to_owned()]);
}
