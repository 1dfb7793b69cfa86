use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A command isolated from any `.env`, config file or ECOSCAN_* variable
/// in the caller's environment.
fn ecoscanctl(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("ecoscanctl");
    cmd.current_dir(dir.path());
    for name in [
        "ECOSCAN_CONFIG_PATH",
        "ECOSCAN_CONFIG_JSON",
        "ECOSCAN_CATALOG_OPTIONS",
        "ECOSCAN_CATALOG_SIZE",
        "ECOSCAN_CATALOG_SEED",
        "ECOSCAN_CATALOG_MAX_MARKUP",
        "ECOSCAN_LOG",
        "ECOSCAN_LOG_ANSI",
        "ECOSCAN_OUTPUT_PRETTY",
        "RUST_LOG",
    ] {
        cmd.env_remove(name);
    }
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    ecoscanctl(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("top-rated")
                .and(predicate::str::contains("price-range"))
                .and(predicate::str::contains("compare"))
                .and(predicate::str::contains("--snapshot")),
        );
}

#[test]
fn query_help_documents_filters() {
    let dir = TempDir::new().unwrap();
    ecoscanctl(&dir)
        .args(["query", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--min-score")
                .and(predicate::str::contains("--then-by")),
        );
}

#[test]
fn show_prints_the_requested_product() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(
        ecoscanctl(&dir).args(["--seed", "7", "--size", "50", "show", "3"]),
    );
    assert_eq!(value["id"], 3);
    assert!(value["sustainabilityScore"].as_u64().is_some());
    assert_eq!(value["alternatives"].as_array().map(Vec::len), Some(2));
}

#[test]
fn unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    ecoscanctl(&dir)
        .args(["--seed", "7", "--size", "50", "show", "999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no product with id 999999"));
}

#[test]
fn top_rated_respects_limit() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(ecoscanctl(&dir).args([
        "--seed", "1", "--size", "200", "top-rated", "--limit", "5",
    ]));
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 5);
    let ratings: Vec<f64> =
        items.iter().filter_map(|p| p["rating"].as_f64()).collect();
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn inverted_price_range_is_empty() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(ecoscanctl(&dir).args([
        "--seed", "1", "--size", "100", "price-range", "100", "50",
    ]));
    assert_eq!(value, Value::Array(Vec::new()));
}

#[test]
fn vocab_lists_forty_brands() {
    let dir = TempDir::new().unwrap();
    let value =
        json_stdout(ecoscanctl(&dir).args(["--size", "1", "vocab", "brands"]));
    assert_eq!(value.as_array().map(Vec::len), Some(40));
}

#[test]
fn subcategory_vocab_needs_a_category() {
    let dir = TempDir::new().unwrap();
    ecoscanctl(&dir)
        .args(["vocab", "subcategories"])
        .assert()
        .failure();

    let value = json_stdout(ecoscanctl(&dir).args([
        "--size",
        "1",
        "vocab",
        "subcategories",
        "--category",
        "clothing",
    ]));
    assert!(value.as_array().is_some_and(|list| !list.is_empty()));
}

#[test]
fn snapshot_round_trip_through_the_cli() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("catalog.json");
    let snapshot_arg = snapshot.display().to_string();

    let written = json_stdout(ecoscanctl(&dir).args([
        "--seed",
        "99",
        "--size",
        "30",
        "generate",
        "--output",
        snapshot_arg.as_str(),
    ]));
    assert_eq!(written["size"], 30);
    assert_eq!(written["seed"], 99);

    let stats = json_stdout(
        ecoscanctl(&dir).args(["--snapshot", snapshot_arg.as_str(), "stats"]),
    );
    assert_eq!(stats["total"], 30);
    assert_eq!(stats["categories"].as_array().map(Vec::len), Some(15));
}

#[test]
fn config_file_sets_catalog_size() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("ecoscan.toml"),
        "[catalog]\nsize = 12\nseed = 4\n\n[output]\npretty = false\n",
    )
    .unwrap();

    let value = json_stdout(ecoscanctl(&dir).arg("stats"));
    assert_eq!(value["total"], 12);
}

#[test]
fn catalog_options_env_sets_catalog_size() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(
        ecoscanctl(&dir)
            .env("ECOSCAN_CATALOG_OPTIONS", r#"{"size": 9, "seed": 2}"#)
            .arg("stats"),
    );
    assert_eq!(value["total"], 9);
}

#[test]
fn query_pages_results() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(ecoscanctl(&dir).args([
        "--seed", "3", "--size", "300", "query", "--sort", "price",
        "--order", "desc", "--limit", "10", "--offset", "5",
    ]));
    assert_eq!(value["total"], 300);
    assert_eq!(value["offset"], 5);
    let prices: Vec<f64> = value["items"]
        .as_array()
        .expect("items")
        .iter()
        .filter_map(|p| p["price"].as_f64())
        .collect();
    assert_eq!(prices.len(), 10);
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}
