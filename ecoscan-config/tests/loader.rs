use ecoscan_config::{ConfigLoadError, ConfigLoader, ConfigSource};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

fn loader_in(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::new()
        .without_env_file()
        .with_search_root(dir.path())
}

#[test]
fn defaults_when_nothing_is_configured() {
    let dir = TempDir::new().unwrap();
    let load = loader_in(&dir).load_with_env(env(&[])).unwrap();

    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config.catalog.size, 10_000);
    assert_eq!(load.config.catalog.seed, None);
    assert_eq!(load.config.logging.filter, "info");
    assert!(load.config.output.pretty);
}

#[test]
fn default_toml_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/ecoscan.toml");
    fs::write(
        &path,
        r#"
[catalog]
size = 500
seed = 42
price_range = [1.0, 20.0]

[logging]
filter = "ecoscan_core=debug"
"#,
    )
    .unwrap();

    let load = loader_in(&dir).load_with_env(env(&[])).unwrap();
    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(load.config.catalog.size, 500);
    assert_eq!(load.config.catalog.seed, Some(42));
    assert_eq!(load.config.catalog.price_range, (1.0, 20.0));
    assert_eq!(load.config.catalog.max_markup, 0.5);
    assert_eq!(load.config.logging.filter, "ecoscan_core=debug");
}

#[test]
fn env_path_beats_inline_json_and_default_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ecoscan.toml"), "[catalog]\nsize = 1\n")
        .unwrap();
    let custom = dir.path().join("custom.json");
    fs::write(&custom, r#"{"catalog": {"size": 77}}"#).unwrap();
    let custom_str = custom.display().to_string();

    let load = loader_in(&dir)
        .load_with_env(env(&[
            ("ECOSCAN_CONFIG_PATH", custom_str.as_str()),
            ("ECOSCAN_CONFIG_JSON", r#"{"catalog": {"size": 5}}"#),
        ]))
        .unwrap();
    assert_eq!(load.source, ConfigSource::EnvPath(custom));
    assert_eq!(load.config.catalog.size, 77);
}

#[test]
fn inline_json_beats_default_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ecoscan.toml"), "[catalog]\nsize = 1\n")
        .unwrap();

    let load = loader_in(&dir)
        .load_with_env(env(&[(
            "ECOSCAN_CONFIG_JSON",
            r#"{"output": {"pretty": false}, "catalog": {"size": 5}}"#,
        )]))
        .unwrap();
    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.catalog.size, 5);
    assert!(!load.config.output.pretty);
}

#[test]
fn explicit_path_wins_and_env_overrides_apply_last() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.conf");
    fs::write(&path, "[catalog]\nsize = 300\nseed = 9\n").unwrap();

    let load = loader_in(&dir)
        .with_config_path(&path)
        .load_with_env(env(&[
            ("ECOSCAN_CONFIG_JSON", r#"{"catalog": {"size": 5}}"#),
            ("ECOSCAN_CATALOG_SIZE", "123"),
            ("ECOSCAN_CATALOG_SEED", "random"),
            ("ECOSCAN_LOG_ANSI", "no"),
        ]))
        .unwrap();
    assert_eq!(load.source, ConfigSource::Explicit(path));
    assert_eq!(load.config.catalog.size, 123);
    assert_eq!(load.config.catalog.seed, None);
    assert!(!load.config.logging.ansi);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = loader_in(&dir)
        .with_config_path(dir.path().join("nope.toml"))
        .load_with_env(env(&[]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn malformed_files_report_their_format() {
    let dir = TempDir::new().unwrap();
    let toml_path = dir.path().join("bad.toml");
    fs::write(&toml_path, "[catalog\nsize = ").unwrap();
    let err = loader_in(&dir)
        .with_config_path(&toml_path)
        .load_with_env(env(&[]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Toml { .. }));

    let err = loader_in(&dir)
        .load_with_env(env(&[("ECOSCAN_CONFIG_JSON", "{not json")]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Json { .. }));
}

#[test]
fn invalid_generator_options_fail_validation() {
    let dir = TempDir::new().unwrap();
    let err = loader_in(&dir)
        .load_with_env(env(&[(
            "ECOSCAN_CONFIG_JSON",
            r#"{"catalog": {"price_range": [50.0, 10.0]}}"#,
        )]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Catalog(_)));
}
