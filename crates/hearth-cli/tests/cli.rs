//! End-to-end CLI tests: load a CSV, request each view, round-trip a
//! snapshot.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const HEADER: &str = "Family ID,Member ID,Category,Amount,Income,Monthly Expenses,Savings,Loan Payments,Credit Card Spending,Financial Goals Met (%)";

fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn sample_csv() -> tempfile::NamedTempFile {
    write_csv(&[
        "F1,F1-M1,Groceries,120,1000,500,200,100,50,80",
        "F1,F1-M2,Travel,300,2500,900,700,250,125,60",
        "F2,F2-M1,Entertainment,150,4000,1500,1500,400,200,90",
    ])
}

#[test]
fn test_family_spending_table() {
    let csv = sample_csv();
    Command::cargo_bin("hearth")
        .unwrap()
        .args(["family-spending", "--input"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("F1"))
        .stdout(predicate::str::contains("420.00"))
        .stdout(predicate::str::contains("150.00"));
}

#[test]
fn test_member_spending_json() {
    let csv = sample_csv();
    let output = Command::cargo_bin("hearth")
        .unwrap()
        .args(["member-spending", "--format", "json", "--input"])
        .arg(csv.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
    assert_eq!(parsed[0]["member_id"], "F1-M1");
}

#[test]
fn test_health_worked_example() {
    // First row reproduces the reference example: raw 4.075, score 407.50.
    let csv = sample_csv();
    Command::cargo_bin("hearth")
        .unwrap()
        .args(["health", "--input"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("407.50"));
}

#[test]
fn test_category_spending_csv_format() {
    let csv = sample_csv();
    Command::cargo_bin("hearth")
        .unwrap()
        .args(["category-spending", "--format", "csv", "--input"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries,120.00"));
}

#[test]
fn test_correlations_table() {
    let csv = sample_csv();
    Command::cargo_bin("hearth")
        .unwrap()
        .args(["correlations", "--input"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Income vs Monthly Expenses"));
}

#[test]
fn test_snapshot_roundtrip() {
    let csv = sample_csv();
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("scored.json");

    Command::cargo_bin("hearth")
        .unwrap()
        .args(["snapshot", "--input"])
        .arg(csv.path())
        .arg("--output")
        .arg(&snapshot)
        .assert()
        .success();

    // Views render from the snapshot without the CSV.
    Command::cargo_bin("hearth")
        .unwrap()
        .arg("health")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("407.50"));

    Command::cargo_bin("hearth")
        .unwrap()
        .arg("family-spending")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("420.00"));
}

#[test]
fn test_scoring_flags_rejected_with_snapshot() {
    let csv = sample_csv();
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("scored.json");

    Command::cargo_bin("hearth")
        .unwrap()
        .args(["snapshot", "--input"])
        .arg(csv.path())
        .arg("--output")
        .arg(&snapshot)
        .assert()
        .success();

    Command::cargo_bin("hearth")
        .unwrap()
        .args(["health", "--scope", "per-family", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no effect on a snapshot"));
}

#[test]
fn test_missing_source_fails() {
    Command::cargo_bin("hearth")
        .unwrap()
        .arg("family-spending")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No dataset source"));
}

#[test]
fn test_missing_column_names_the_column() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    // No "Income" column.
    writeln!(
        file,
        "Family ID,Member ID,Category,Amount,Monthly Expenses,Savings,Loan Payments,Credit Card Spending,Financial Goals Met (%)"
    )
    .unwrap();
    writeln!(file, "F1,F1-M1,Travel,10,500,1,1,1,50").unwrap();

    Command::cargo_bin("hearth")
        .unwrap()
        .args(["family-spending", "--input"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Column not found"))
        .stderr(predicate::str::contains("Income"));
}

#[test]
fn test_zero_income_row_aborts_scoring() {
    let csv = write_csv(&[
        "F1,F1-M1,Groceries,120,1000,500,200,100,50,80",
        "F1,F1-M2,Travel,300,0,900,700,250,125,60",
    ]);

    Command::cargo_bin("hearth")
        .unwrap()
        .args(["health", "--input"])
        .arg(csv.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Score undefined at row 2"));
}

#[test]
fn test_normalized_formula_flag() {
    let csv = sample_csv();
    let output = Command::cargo_bin("hearth")
        .unwrap()
        .args(["health", "--formula", "normalized", "--format", "json", "--input"])
        .arg(csv.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for score in parsed["row_scores"].as_array().unwrap() {
        let value = score.as_f64().unwrap();
        assert!((0.0..=100.0).contains(&value));
    }
}
