use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "cashflow";

/// Isolated data and config files for one test.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join("config.json"), r#"{"color": false}"#).expect("seed config");
        Self { dir }
    }

    fn data_file(&self) -> std::path::PathBuf {
        self.dir.path().join("cashflow_data.json")
    }

    fn config_file(&self) -> std::path::PathBuf {
        self.dir.path().join("config.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.env_remove("CASHFLOW_DATA_FILE")
            .env_remove("CASHFLOW_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--data-file")
            .arg(self.data_file())
            .arg("--config")
            .arg(self.config_file());
        cmd
    }

    fn add(&self, args: &[&str]) {
        self.cmd()
            .arg("add")
            .args(args)
            .assert()
            .success()
            .stdout(contains("Added"));
    }

    fn seed_scenario(&self) {
        self.add(&["Salary", "3000", "inflow", "income", "--recurring", "--start-month", "2024-01"]);
        self.add(&["Rent", "1200", "outflow", "housing", "--recurring", "--start-month", "2024-01"]);
        self.add(&["Vacation", "500", "outflow", "fun", "--month", "2024-02"]);
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read data file")).expect("valid json")
}

#[test]
fn add_reports_generated_id_and_persists_record() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["add", "Salary", "3000", "inflow", "income", "--recurring"])
        .args(["--start-month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("Added inflow 'Salary' with id "));

    let data = read_json(&sandbox.data_file());
    let records = data["transactions"].as_array().expect("transactions array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["type"], "inflow");
    assert_eq!(records[0]["recurrence"], "recurring");
    assert_eq!(records[0]["start_month"], "2024-01");
    assert!(records[0]["end_month"].is_null());
    assert!(!records[0]["id"].as_str().unwrap_or_default().is_empty());
}

#[test]
fn summary_matches_reference_scenario() {
    let sandbox = Sandbox::new();
    sandbox.seed_scenario();

    sandbox
        .cmd()
        .args(["summary", "2024-02", "--opening-balance", "200"])
        .assert()
        .success()
        .stdout(
            contains("Cash flow summary for 2024-02")
                .and(contains("Total inflows:   $3000.00"))
                .and(contains("Total outflows:  $1700.00"))
                .and(contains("Net income:      $1300.00"))
                .and(contains("Closing balance: $1500.00"))
                .and(contains("- Vacation ($500.00, outflow, one-time, from 2024-02)")),
        );
}

#[test]
fn summary_json_is_machine_readable() {
    let sandbox = Sandbox::new();
    sandbox.seed_scenario();

    let output = sandbox
        .cmd()
        .args(["summary", "2024-03", "--opening-balance", "-50", "--json"])
        .output()
        .expect("run summary");
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json summary");
    assert_eq!(summary["month"], "2024-03");
    assert_eq!(summary["inflows"], 3000.0);
    assert_eq!(summary["outflows"], 1200.0);
    assert_eq!(summary["closing_balance"], 1750.0);
    assert_eq!(summary["transactions"].as_array().map(Vec::len), Some(2));
}

#[test]
fn list_filters_by_month() {
    let sandbox = Sandbox::new();
    sandbox.seed_scenario();

    sandbox
        .cmd()
        .args(["list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(
            contains("Salary | inflow | $3000.00 | recurring (2024-01+) | income")
                .and(contains("Rent"))
                .and(contains("Vacation").not()),
        );

    sandbox
        .cmd()
        .args(["list", "--month", "2023-12"])
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}

#[test]
fn unknown_type_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["add", "Move", "10", "transfer", "misc", "--month", "2024-01"])
        .assert()
        .failure()
        .stderr(contains("transfer"));
    assert!(!sandbox.data_file().exists());
}

#[test]
fn one_time_without_month_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["add", "Vacation", "500", "outflow", "fun"])
        .assert()
        .code(1)
        .stderr(contains("Error: Validation failed: one-time transactions require a month"));
    assert!(!sandbox.data_file().exists());
}

#[test]
fn negative_amount_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["add", "Refund", "-5", "inflow", "misc", "--month", "2024-01"])
        .assert()
        .code(1)
        .stderr(contains("non-negative"));
}

#[test]
fn malformed_month_is_rejected_before_the_model() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["summary", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("invalid month `2024-13`"));
}

#[test]
fn reset_clears_data_once() {
    let sandbox = Sandbox::new();
    sandbox.add(&["Gift", "20", "inflow", "misc", "--month", "2024-02"]);

    sandbox
        .cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Cleared saved cash flow data."));
    assert!(!sandbox.data_file().exists());

    sandbox
        .cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("No data file to clear."));
}

#[test]
fn config_set_changes_currency_symbol() {
    let sandbox = Sandbox::new();
    sandbox.add(&["Gift", "20", "inflow", "misc", "--month", "2024-02"]);

    sandbox
        .cmd()
        .args(["config", "set", "currency-symbol", "€"])
        .assert()
        .success()
        .stdout(contains("Set currency-symbol to '€'"));

    sandbox
        .cmd()
        .args(["summary", "2024-02"])
        .assert()
        .success()
        .stdout(contains("Total inflows:   €20.00"));

    sandbox
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("\"currency_symbol\": \"€\"").and(contains("\"color\": false")));
}

#[test]
fn data_file_can_come_from_environment() {
    let sandbox = Sandbox::new();
    let env_file = sandbox.dir.path().join("from_env.json");

    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("CASHFLOW_DATA_FILE", &env_file)
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(sandbox.config_file())
        .args(["add", "Gift", "20", "inflow", "misc", "--month", "2024-02"])
        .assert()
        .success();

    assert!(env_file.exists());
    assert!(!sandbox.data_file().exists());
}

#[test]
fn add_help_explains_month_flags() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(
            contains("Months are given with flags, not positionally")
                .and(contains("--recurring --start-month 2024-01")),
        );
}

#[test]
fn recurring_add_ignores_one_time_month() {
    let sandbox = Sandbox::new();
    sandbox.add(&[
        "Salary", "3000", "inflow", "income", "--recurring", "--month", "2023-06",
        "--start-month", "2024-01",
    ]);

    let data = read_json(&sandbox.data_file());
    assert!(data["transactions"][0]["month"].is_null());
    sandbox
        .cmd()
        .args(["list", "--month", "2023-06"])
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}
