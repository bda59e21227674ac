//! End-to-end CLI tests for the arete binary.
//!
//! Each test runs the real binary against an isolated set of XDG
//! directories so the user's actual store and config are never touched.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_data: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_data = base.join("xdg-data");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_data).expect("failed to create XDG_DATA_HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_data,
            xdg_config,
            xdg_state,
        }
    }

    fn store_path(&self) -> PathBuf {
        self.xdg_data.join("arete/store.json")
    }

    fn run(&self, args: &[&str]) -> Output {
        let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("arete"));
        Command::new(bin_path)
            .args(args)
            .env("HOME", &self.home)
            .env("XDG_DATA_HOME", &self.xdg_data)
            .env("XDG_CONFIG_HOME", &self.xdg_config)
            .env("XDG_STATE_HOME", &self.xdg_state)
            .output()
            .expect("failed to execute arete")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "arete {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

#[test]
fn test_add_done_list_round_trip() {
    let env = CliTestEnv::new();

    let added = env.run_ok(&["add", "Morning run", "--category", "Fitness"]);
    assert!(added.contains("Morning run"));
    assert!(env.store_path().exists());

    let done = env.run_ok(&["done", "morning"]);
    assert!(done.contains("✓ Morning run"));

    let list = env.run_ok(&["list"]);
    assert!(list.contains("[✓] Morning run"));
    assert!(list.contains("Day 1 of 900"));
}

#[test]
fn test_done_backfill_and_undo() {
    let env = CliTestEnv::new();
    env.run_ok(&["add", "Read", "--category", "Learning"]);

    env.run_ok(&["done", "read", "--date", "2025-01-15"]);
    let repeat = env.run_ok(&["done", "read", "--date", "2025-01-15"]);
    assert!(repeat.contains("already done"));

    let undo = env.run_ok(&["undo", "read", "--date", "2025-01-15"]);
    assert!(undo.contains("Unmarked"));

    // Future dates are rejected
    let future = env.run(&["done", "read", "--date", "2999-01-01"]);
    assert!(!future.status.success());

    // Malformed dates are rejected, not coerced
    let bad = env.run(&["done", "read", "--date", "01/15/2025"]);
    assert!(!bad.status.success());
}

#[test]
fn test_unknown_habit_fails() {
    let env = CliTestEnv::new();
    let output = env.run(&["done", "ghost"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("habit not found"));
}

#[test]
fn test_stats_json_export_shape() {
    let env = CliTestEnv::new();
    env.run_ok(&["add", "Run", "--category", "Fitness"]);
    env.run_ok(&["add", "Read", "--category", "Learning"]);
    env.run_ok(&["done", "run"]);

    let json = env.run_ok(&["stats", "--export", "json"]);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(value["totals"]["active_habits"], 2);
    assert_eq!(value["totals"]["completed_today"], 1);
    assert_eq!(value["series"].as_array().unwrap().len(), 30);
    assert_eq!(value["heatmap"].as_array().unwrap().len(), 90);

    // Today is the last entry and carries the 50% completion
    let last = value["series"].as_array().unwrap().last().unwrap();
    assert_eq!(last["count"], 1);
    assert_eq!(last["total_active"], 2);
    assert_eq!(last["percentage"], 50.0);
}

#[test]
fn test_sunburst_json_export() {
    let env = CliTestEnv::new();
    env.run_ok(&["add", "Run", "--category", "Fitness"]);
    env.run_ok(&["done", "run"]);

    let json = env.run_ok(&["sunburst", "--export", "json"]);
    let slices: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    let slices = slices.as_array().unwrap();

    // Root + Fitness + Run
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0]["depth"], 0);
    assert_eq!(slices[0]["name"], "Root");
    let run = slices.iter().find(|s| s["name"] == "Run").unwrap();
    assert_eq!(run["depth"], 2);
    assert_eq!(run["ancestors"].as_array().unwrap().len(), 3);
}

#[test]
fn test_logo_json_export() {
    let env = CliTestEnv::new();
    env.run_ok(&["add", "Run", "--category", "Fitness"]);
    env.run_ok(&["add", "Read", "--category", "Learning"]);
    env.run_ok(&["done", "run"]);

    let json = env.run_ok(&["logo", "--export", "json"]);
    let slices: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    let slices = slices.as_array().unwrap();

    assert_eq!(slices.len(), 2);
    let run = slices.iter().find(|s| s["title"] == "Run").unwrap();
    let read = slices.iter().find(|s| s["title"] == "Read").unwrap();
    assert_eq!(run["completed"], true);
    assert_eq!(run["opacity"], 1.0);
    assert_eq!(read["completed"], false);
    assert_eq!(read["color"], "#E7E5E4");
}

#[test]
fn test_category_management() {
    let env = CliTestEnv::new();
    env.run_ok(&["category", "add", "Music"]);
    env.run_ok(&["add", "Practice scales", "--category", "Music"]);
    env.run_ok(&["category", "rename", "Music", "Craft"]);

    let list = env.run_ok(&["list"]);
    assert!(list.contains("Craft"));

    // Still referenced, so removal is refused
    let rm = env.run(&["category", "rm", "Craft"]);
    assert!(!rm.status.success());

    env.run_ok(&["rm", "Practice scales"]);
    env.run_ok(&["category", "rm", "Craft"]);
}

#[test]
fn test_archive_excludes_from_stats() {
    let env = CliTestEnv::new();
    env.run_ok(&["add", "Run", "--category", "Fitness"]);
    env.run_ok(&["add", "Read", "--category", "Learning"]);
    env.run_ok(&["archive", "read"]);

    let json = env.run_ok(&["stats", "--export", "json"]);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["totals"]["active_habits"], 1);

    let list = env.run_ok(&["list"]);
    assert!(!list.contains("Read"));
    let list_all = env.run_ok(&["list", "--all"]);
    assert!(list_all.contains("(archived)"));
}
