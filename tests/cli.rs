//! End-to-end tests for the finplan binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finplan(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finplan").unwrap();
    cmd.env("FINPLAN_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_savings_plan() {
    let dir = TempDir::new().unwrap();
    finplan(&dir)
        .args(["savings", "--goal", "12000", "--term", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings Plan"))
        .stdout(predicate::str::contains("$1,000"))
        .stdout(predicate::str::contains("$250"));
}

#[test]
fn test_savings_goal_already_met() {
    let dir = TempDir::new().unwrap();
    finplan(&dir)
        .args(["savings", "-g", "5000", "-t", "6", "-c", "5000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("You already reached your goal!"));
}

#[test]
fn test_budget_json() {
    let dir = TempDir::new().unwrap();
    let output = finplan(&dir)
        .args([
            "budget", "--salary", "10000", "--rent", "6000", "--food", "1000", "-f", "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["kind"], "budget");
    assert_eq!(value["schema_version"], "1.0.0");
}

#[test]
fn test_budget_without_income() {
    let dir = TempDir::new().unwrap();
    finplan(&dir)
        .args(["budget", "--rent", "500"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least one source of income"));
}

#[test]
fn test_goal_tight() {
    let dir = TempDir::new().unwrap();
    finplan(&dir)
        .args([
            "goal", "-i", "3000", "-t", "500", "--housing", "1500", "-e", "800", "-e", "300",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2,600.00"))
        .stdout(predicate::str::contains("tight (gap $100.00)"));
}

#[test]
fn test_init_then_config() {
    let dir = TempDir::new().unwrap();
    finplan(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    finplan(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nav breakpoint:   100 columns"))
        .stdout(predicate::str::contains("Initialized:      true"));
}

#[test]
fn test_budget_with_huge_values() {
    let dir = TempDir::new().unwrap();
    finplan(&dir)
        .args(["budget", "--salary", "9e16", "--rent", "2e16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,000,000,000,000"));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    finplan(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal personal-finance calculators"))
        .stdout(predicate::str::contains("savings"))
        .stdout(predicate::str::contains("goal"));
}
