//! End-to-end tests for the `backsolve` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Two-year 8% annual-pay loan on 360-day years with no floating index.
fn fixed_loan_csv() -> NamedTempFile {
    write_temp(".csv", "amount,day_offset,reference_rate\n8,360,0\n108,720,0\n")
}

/// Outflow of 1000 followed by three annual inflows.
fn investment_json() -> NamedTempFile {
    write_temp(
        ".json",
        r#"[
            {"amount": -1000, "day_offset": 1},
            {"amount": 300, "day_offset": 366},
            {"amount": 400, "day_offset": 731},
            {"amount": 500, "day_offset": 1096}
        ]"#,
    )
}

fn backsolve() -> Command {
    let mut cmd = Command::cargo_bin("backsolve").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("BACKSOLVE_CONFIG");
    cmd
}

#[test]
fn spread_minimal_output() {
    let flows = fixed_loan_csv();

    backsolve()
        .args(["spread", "--price", "100", "--format", "minimal", "--cash-flows"])
        .arg(flows.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.08000000"));
}

#[test]
fn spread_table_output() {
    let flows = fixed_loan_csv();

    backsolve()
        .args(["spread", "--price", "100", "--cash-flows"])
        .arg(flows.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Spread Backsolve"))
        .stdout(predicate::str::contains("800.0000 bps"))
        .stdout(predicate::str::contains("ACT/360"));
}

#[test]
fn irr_json_output() {
    let flows = investment_json();

    let output = backsolve()
        .args(["irr", "--format", "json", "--cash-flows"])
        .arg(flows.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["model"], "irr");
    assert_eq!(report["cash_flows"], 4);
    assert_eq!(report["year_convention"], "ACT/365");
    let rate = report["rate"].as_f64().unwrap();
    assert!((rate - 0.088_963_394_693).abs() < 1e-9);
}

#[test]
fn irr_csv_output_has_header() {
    let flows = investment_json();

    backsolve()
        .args(["irr", "--format", "csv", "--cash-flows"])
        .arg(flows.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "model,rate,rate_bps,iterations,residual",
        ));
}

#[test]
fn pv_at_spread_with_clean_basis() {
    let flows = write_temp(".csv", "amount,day_offset\n100,365\n");

    backsolve()
        .args([
            "pv",
            "--spread",
            "0",
            "--year-convention",
            "365",
            "--clean",
            "--accrued",
            "2",
            "--format",
            "minimal",
            "--cash-flows",
        ])
        .arg(flows.path())
        .assert()
        .success()
        .stdout("98.0000000000\n");
}

#[test]
fn pv_requires_a_rate() {
    let flows = fixed_loan_csv();

    backsolve()
        .args(["pv", "--cash-flows"])
        .arg(flows.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--spread"));
}

#[test]
fn repeated_day_offset_fails() {
    let flows = write_temp(".csv", "amount,day_offset\n100,100\n100,100\n");

    backsolve()
        .args(["irr", "--cash-flows"])
        .arg(flows.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid cash flow stream"));
}

#[test]
fn zero_cash_flows_are_degenerate() {
    let flows = write_temp(".csv", "amount,day_offset,reference_rate\n0,90,0.03\n0,180,0.035\n");

    backsolve()
        .args(["spread", "--price", "95", "--cash-flows"])
        .arg(flows.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("spread backsolve"))
        .stderr(predicate::str::contains("doesn't change"))
        .stderr(predicate::str::contains("check the cash flow amounts"));
}

#[test]
fn config_file_iteration_cap_is_applied() {
    let flows = fixed_loan_csv();
    let config = write_temp(
        ".toml",
        "[solver]\nresidual_tolerance = 0.0\nmax_iterations = 1\n",
    );

    backsolve()
        .args(["spread", "--price", "92", "--config"])
        .arg(config.path())
        .arg("--cash-flows")
        .arg(flows.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to converge after 1 iterations"))
        .stderr(predicate::str::contains("larger --max-iterations"));
}

#[test]
fn command_line_overrides_config() {
    let flows = fixed_loan_csv();
    let config = write_temp(".json", r#"{"solver": {"max_iterations": 1}}"#);

    backsolve()
        .args(["spread", "--price", "100", "--max-iterations", "50", "--format", "minimal"])
        .arg("--config")
        .arg(config.path())
        .arg("--cash-flows")
        .arg(flows.path())
        .assert()
        .success();
}

#[test]
fn invalid_config_is_reported() {
    let flows = fixed_loan_csv();
    let config = write_temp(".toml", "[solver]\nmax_iterations = 0\n");

    backsolve()
        .args(["irr", "--config"])
        .arg(config.path())
        .arg("--cash-flows")
        .arg(flows.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_iterations"));
}

#[test]
fn accrued_without_clean_is_rejected() {
    let flows = fixed_loan_csv();

    backsolve()
        .args(["spread", "--price", "100", "--accrued", "1", "--cash-flows"])
        .arg(flows.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--accrued requires --clean"));
}
