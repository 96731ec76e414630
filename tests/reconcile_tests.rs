//! End-to-end CLI tests: full reconciliation runs against CSV fixtures,
//! artifact contents, and error exits.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_fixtures(dir: &std::path::Path) {
    // Grade sheet: name in column A, score in column C; one row has no
    // coercible score and must be dropped.
    std::fs::write(
        dir.join("grades.csv"),
        "\
MARIA DA SILVA,x,8.0
JOAO PEREIRA,x,\"6,5\"
JOAO PEREIRA,x,9.0
ANA LUIZA COSTA,x,10
PEDRO ALMEIDA,x,5.0
CAROL,x,absent
",
    )
    .unwrap();

    std::fs::write(
        dir.join("roster.csv"),
        "\
001,MARIA DA SILVA
002,MARIA DA SILVA SANTOS
003,JOAO PEREIRA DOS SANTOS
004,ANA LUIZA COSTA
",
    )
    .unwrap();
}

#[test]
fn reconcile_writes_expected_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let out_dir = dir.path().join("results");

    Command::cargo_bin("grade-recon")
        .unwrap()
        .args([
            "reconcile",
            dir.path().join("grades.csv").to_str().unwrap(),
            dir.path().join("roster.csv").to_str().unwrap(),
            "--score-column",
            "C",
            "--series",
            "3A",
            "--exam",
            "P1",
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "matched: 1, partial: 1, ambiguous: 1, not found: 1",
        ))
        .stderr(predicate::str::contains("PEDRO ALMEIDA"));

    // Import file: exact match for Ana, partial for Joao, comma decimals,
    // first-seen source order.
    let import = std::fs::read_to_string(out_dir.join("3A - P1.txt")).unwrap();
    assert_eq!(import, "003\t6,5\n004\t10,0\n");

    // Maria pattern-matches both roster Marias
    let ambiguities = std::fs::read_to_string(out_dir.join("ambiguities 3A - P1.txt")).unwrap();
    assert!(ambiguities.contains("'MARIA DA SILVA' (score: 8.0)"));
    assert!(ambiguities.contains("- id: 001, name: 'MARIA DA SILVA'"));
    assert!(ambiguities.contains("- id: 002, name: 'MARIA DA SILVA SANTOS'"));

    let partials = std::fs::read_to_string(out_dir.join("partial matches 3A - P1.txt")).unwrap();
    assert!(partials.starts_with("--- Partial matches in 3A - P1 ---"));
    assert!(partials.contains("'JOAO PEREIRA' (score: 6.5)"));
    assert!(partials.contains("- id: 003, name: 'JOAO PEREIRA DOS SANTOS'"));

    let not_found = std::fs::read_to_string(out_dir.join("students_not_found.txt")).unwrap();
    assert!(not_found.starts_with("--- Students not found in 3A - P1 ---"));
    assert!(not_found.contains("PEDRO ALMEIDA"));
}

#[test]
fn second_run_appends_banner_to_not_found() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let out_dir = dir.path().join("results");

    for _ in 0..2 {
        Command::cargo_bin("grade-recon")
            .unwrap()
            .args([
                "reconcile",
                dir.path().join("grades.csv").to_str().unwrap(),
                dir.path().join("roster.csv").to_str().unwrap(),
                "-c",
                "C",
                "--series",
                "3A",
                "--exam",
                "P1",
                "--out-dir",
                out_dir.to_str().unwrap(),
            ])
            .assert()
            .success();
    }

    let not_found = std::fs::read_to_string(out_dir.join("students_not_found.txt")).unwrap();
    assert_eq!(
        not_found.matches("--- Students not found in 3A - P1 ---").count(),
        1
    );
    assert!(not_found.contains("--- New entries at "));
    assert_eq!(not_found.matches("PEDRO ALMEIDA").count(), 2);

    // The import artifact is overwritten, not accumulated
    let import = std::fs::read_to_string(out_dir.join("3A - P1.txt")).unwrap();
    assert_eq!(import, "003\t6,5\n004\t10,0\n");
}

#[test]
fn invalid_score_column_fails_before_reading_files() {
    let dir = tempfile::tempdir().unwrap();

    // Input paths do not exist; the column is rejected first
    Command::cargo_bin("grade-recon")
        .unwrap()
        .args([
            "reconcile",
            "missing-grades.csv",
            "missing-roster.csv",
            "-c",
            "AA",
            "--series",
            "3A",
            "--exam",
            "P1",
            "--out-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid score column"));
}

#[test]
fn lowercase_column_letter_accepted() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let out_dir = dir.path().join("results");

    Command::cargo_bin("grade-recon")
        .unwrap()
        .args([
            "reconcile",
            dir.path().join("grades.csv").to_str().unwrap(),
            dir.path().join("roster.csv").to_str().unwrap(),
            "-c",
            "c",
            "--series",
            "3A",
            "--exam",
            "P1",
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(out_dir.join("3A - P1.txt").exists());
}

#[test]
fn empty_grade_sheet_produces_no_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    // Every row fails score coercion
    std::fs::write(dir.path().join("grades.csv"), "MARIA,x,absent\nJOAO,x,-\n").unwrap();
    std::fs::write(dir.path().join("roster.csv"), "001,MARIA\n").unwrap();
    let out_dir = dir.path().join("results");

    Command::cargo_bin("grade-recon")
        .unwrap()
        .args([
            "reconcile",
            dir.path().join("grades.csv").to_str().unwrap(),
            dir.path().join("roster.csv").to_str().unwrap(),
            "-c",
            "C",
            "--series",
            "3A",
            "--exam",
            "P1",
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to reconcile"));

    assert!(!out_dir.exists());
}

#[test]
fn missing_roster_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    Command::cargo_bin("grade-recon")
        .unwrap()
        .args([
            "reconcile",
            dir.path().join("grades.csv").to_str().unwrap(),
            dir.path().join("no-such-roster.csv").to_str().unwrap(),
            "-c",
            "C",
            "--series",
            "3A",
            "--exam",
            "P1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-roster.csv"));
}

#[test]
fn skip_rows_ignores_preamble() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("grades.csv"),
        "\
School report,,
Class 3A,,
Name,,Score
ANA LUIZA COSTA,x,7.5
",
    )
    .unwrap();
    std::fs::write(dir.path().join("roster.csv"), "004,ANA LUIZA COSTA\n").unwrap();
    let out_dir = dir.path().join("results");

    Command::cargo_bin("grade-recon")
        .unwrap()
        .args([
            "reconcile",
            dir.path().join("grades.csv").to_str().unwrap(),
            dir.path().join("roster.csv").to_str().unwrap(),
            "-c",
            "C",
            "--skip-rows",
            "3",
            "--series",
            "3A",
            "--exam",
            "P1",
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("matched: 1"));

    let import = std::fs::read_to_string(out_dir.join("3A - P1.txt")).unwrap();
    assert_eq!(import, "004\t7,5\n");
}

#[test]
fn json_summary_reports_buckets() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let out_dir = dir.path().join("results");

    let output = Command::cargo_bin("grade-recon")
        .unwrap()
        .args([
            "reconcile",
            dir.path().join("grades.csv").to_str().unwrap(),
            dir.path().join("roster.csv").to_str().unwrap(),
            "-c",
            "C",
            "--series",
            "3A",
            "--exam",
            "P1",
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["summary"]["matched"], 1);
    assert_eq!(json["summary"]["partial"], 1);
    assert_eq!(json["summary"]["ambiguous"], 1);
    assert_eq!(json["summary"]["not_found"], 1);
    assert_eq!(json["summary"]["duplicates_skipped"], 1);
    assert_eq!(json["dropped_rows"], 1);
    assert_eq!(json["not_found"][0], "PEDRO ALMEIDA");
}

#[test]
fn probe_classifies_single_name() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    Command::cargo_bin("grade-recon")
        .unwrap()
        .args([
            "probe",
            "João Pereira",
            dir.path().join("roster.csv").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("partial -> id 003"));

    Command::cargo_bin("grade-recon")
        .unwrap()
        .args([
            "probe",
            "Maria da Silva",
            dir.path().join("roster.csv").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ambiguous, 2 candidates"));
}

#[test]
fn roster_reports_collisions() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("roster.csv"),
        "001,MARIA DA SILVA\n002,Maria da Silva\n003,JOAO\n",
    )
    .unwrap();

    Command::cargo_bin("grade-recon")
        .unwrap()
        .args(["roster", dir.path().join("roster.csv").to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("3 roster entries")
                .and(predicate::str::contains("1 normalized-name collision")),
        );
}
