use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use facade_config::{Config, ConfigError, ConfigSourceKind, LoadOptions, CONFIG_FILE_NAME};
use tempfile::TempDir;

fn write_file(path: impl AsRef<Path>, contents: &str) {
    let mut file = fs::File::create(path).expect("create config");
    file.write_all(contents.as_bytes()).expect("write config");
}

fn canonical(path: impl AsRef<Path>) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize path")
}

#[test]
fn loads_defaults_when_no_files_present() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());

    let config =
        Config::load(LoadOptions::default().with_working_dir(working_dir)).expect("load defaults");

    assert_eq!(config.user.name, "john doe");
    assert!(config.state.is_loading);
    assert!(config.state.is_saving);
    assert_eq!(config.updates.country, "USA");
    assert_eq!(config.updates.role, "Editor");
    assert_eq!(config.sources.layers.len(), 1);
    assert_eq!(config.sources.layers[0].kind, ConfigSourceKind::Default);
}

#[test]
fn override_wins_over_local_key_by_key() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());

    write_file(
        working_dir.join(CONFIG_FILE_NAME),
        r#"
        [user]
        name = "local user"

        [updates]
        country = "Chile"
        role = "Viewer"
        "#,
    );
    write_file(
        working_dir.join("override.toml"),
        r#"
        [updates]
        role = "Admin"

        [state]
        is_saving = false
        "#,
    );

    let config = Config::load(
        LoadOptions::default()
            .with_working_dir(&working_dir)
            .with_override_path("override.toml"),
    )
    .expect("load layered config");

    assert_eq!(config.user.name, "local user");
    assert_eq!(config.updates.country, "Chile");
    assert_eq!(config.updates.role, "Admin");
    assert!(config.state.is_loading);
    assert!(!config.state.is_saving);

    let kinds: Vec<_> = config.sources.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ConfigSourceKind::Default,
            ConfigSourceKind::Local,
            ConfigSourceKind::Override
        ]
    );
    assert_eq!(
        config.sources.layers[2].path.as_deref(),
        Some(working_dir.join("override.toml").as_path())
    );
}

#[test]
fn local_file_used_as_override_is_applied_once() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());
    write_file(working_dir.join(CONFIG_FILE_NAME), "[updates]\ncountry = \"Peru\"\n");

    let config = Config::load(
        LoadOptions::default()
            .with_working_dir(&working_dir)
            .with_override_path(CONFIG_FILE_NAME),
    )
    .expect("load");

    assert_eq!(config.updates.country, "Peru");
    assert_eq!(config.sources.layers.len(), 2);
    assert_eq!(config.sources.layers[1].kind, ConfigSourceKind::Override);
}

#[test]
fn missing_override_is_reported() {
    let temp = TempDir::new().expect("tempdir");

    let err = Config::load(
        LoadOptions::default()
            .with_working_dir(temp.path())
            .with_override_path("absent.toml"),
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::OverrideNotFound { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());
    write_file(working_dir.join(CONFIG_FILE_NAME), "[user]\nnickname = \"jd\"\n");

    let err = Config::load(LoadOptions::default().with_working_dir(&working_dir)).unwrap_err();

    match err {
        ConfigError::Parse { path, .. } => assert_eq!(path, working_dir.join(CONFIG_FILE_NAME)),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn empty_user_name_fails_validation() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());
    write_file(working_dir.join(CONFIG_FILE_NAME), "[user]\nname = \"\"\n");

    let err = Config::load(LoadOptions::default().with_working_dir(&working_dir)).unwrap_err();

    match err {
        ConfigError::Validation(validation) => {
            assert_eq!(validation.key, "user.name");
            assert_eq!(validation.source.kind, ConfigSourceKind::Local);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn update_values_are_not_validated() {
    let config = Config::from_toml_str("[updates]\ncountry = \"\"\nrole = \"\"\n").expect("parse");

    assert_eq!(config.updates.country, "");
    assert_eq!(config.updates.role, "");
}
