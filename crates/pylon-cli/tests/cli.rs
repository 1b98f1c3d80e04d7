use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join(relative)
}

fn metro() -> String {
    repo_path("test_data/grids/metro_grid.toml")
        .to_string_lossy()
        .into_owned()
}

fn feeder() -> String {
    repo_path("test_data/grids/radial_feeder.yaml")
        .to_string_lossy()
        .into_owned()
}

/// `pylon` with HOME pointed at a directory without `.pylon/`, so a user
/// config on the machine running the tests cannot change the output.
fn pylon() -> Command {
    let mut cmd = Command::cargo_bin("pylon").unwrap();
    cmd.env("HOME", env!("CARGO_MANIFEST_DIR"));
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn approx(value: &Value, expected: f64) -> bool {
    value.as_f64().map_or(false, |v| (v - expected).abs() < 1e-9)
}

#[test]
fn pylon_path_dijkstra_table() {
    pylon()
        .args(["path", &metro(), "--from", "SS_1", "--to", "SS_9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route SS_1 (Luzhniki) -> SS_9 (Kosino)"))
        .stdout(predicate::str::contains("51.2 km"))
        .stdout(predicate::str::contains("SS_1 -> SS_4 -> SS_9"));
}

#[test]
fn pylon_path_all_json() {
    let report = json_stdout(pylon().args([
        "path",
        &metro(),
        "--from",
        "SS_1",
        "--to",
        "SS_9",
        "--algorithm",
        "all",
        "--format",
        "json",
    ]));
    assert_eq!(report["start_name"], "Luzhniki");
    assert_eq!(report["dfs"]["algorithm"], "dfs");
    assert!(approx(&report["dijkstra"]["total_length"], 51.2));
    let bfs_hops = report["bfs"]["path"].as_array().unwrap().len();
    let dfs_hops = report["dfs"]["path"].as_array().unwrap().len();
    assert!(bfs_hops <= dfs_hops);
}

#[test]
fn pylon_distances_json() {
    let tree = json_stdout(pylon().args([
        "distances",
        &metro(),
        "--from",
        "SS_1",
        "--format",
        "json",
    ]));
    assert!(approx(&tree["distances"]["SS_1"], 0.0));
    assert!(approx(&tree["distances"]["SS_10"], 5.2));
    assert!((tree["distances"]["SS_6"].as_f64().unwrap() - 46.2).abs() < 1e-9);
    assert_eq!(tree["predecessors"]["SS_6"], "SS_3");
    assert_eq!(tree["unreachable"].as_array().unwrap().len(), 0);
}

#[test]
fn pylon_critical_on_meshed_grid() {
    pylon()
        .args(["critical", &metro()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No critical substations"));
}

#[test]
fn pylon_critical_with_bridges() {
    pylon()
        .args(["critical", &feeder(), "--bridges"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Critical substations (3):"))
        .stdout(predicate::str::is_match(r"1\s+FEED_1\s+Millbrook\s+110kV\s+4").unwrap())
        .stdout(predicate::str::contains("Bridge lines (6):"));
}

#[test]
fn pylon_shutdown_writes_report() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("shutdown.json");
    pylon()
        .args([
            "shutdown",
            &feeder(),
            "--max-nodes",
            "2",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shutdown report written to"));

    let report: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let steps = report["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["removed"], "FEED_1");
    assert_eq!(steps[0]["components"].as_array().unwrap().len(), 4);
    assert_eq!(steps[1]["removed"], "CORE_B");
    assert_eq!(steps[1]["degree_before"], 2);
    assert!(approx(&report["initial_capacity"], 1350.0));
    assert!(approx(&report["remaining_capacity"], 920.0));
}

#[test]
fn pylon_shutdown_uses_config_defaults() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[analysis]\nmax_nodes = 1\n[output]\nformat = \"json\"\n").unwrap();

    let report = json_stdout(pylon().args([
        "--config",
        config.to_str().unwrap(),
        "shutdown",
        &feeder(),
    ]));
    assert_eq!(report["steps"].as_array().unwrap().len(), 1);
    assert_eq!(report["isolated_components"], 4);

    // a flag beats the file
    pylon()
        .args([
            "--config",
            config.to_str().unwrap(),
            "shutdown",
            &feeder(),
            "--max-nodes",
            "3",
            "--format",
            "table",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 3: remove FEED_2"));
}

#[test]
fn pylon_unknown_substation_fails() {
    pylon()
        .args(["path", &metro(), "--from", "SS_1", "--to", "SS_404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown substation 'SS_404'"));
}

#[test]
fn pylon_missing_grid_fails() {
    pylon()
        .args(["stats", "test_data/grids/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does_not_exist.toml"));
}

#[test]
fn pylon_stats_and_islands() {
    pylon()
        .args(["stats", &metro()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Substations   : 10"))
        .stdout(predicate::str::contains("Lines         : 13"))
        .stdout(predicate::str::contains("Components    : 1"));

    pylon()
        .args(["islands", &metro()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 island(s), 2460.0 MW total"));
}

#[test]
fn pylon_convert_round_trips() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("metro.json");
    pylon()
        .args(["convert", &metro(), "--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 substation(s) and 13 line(s)"));

    let converted = json_stdout(pylon().args([
        "stats",
        out.to_str().unwrap(),
        "--format",
        "json",
    ]));
    assert_eq!(converted["node_count"], 10);
    assert_eq!(converted["edge_count"], 13);
}

#[test]
fn pylon_convert_rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("metro.csv");
    pylon()
        .args(["convert", &metro(), "--out", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot tell output format"));
    assert!(!out.exists());
}
