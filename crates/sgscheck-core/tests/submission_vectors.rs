//! Integration tests: run whole-submission test vectors.
//!
//! Each fixture in tests/fixtures/ has:
//! - case.json: a complete submission as the collection layer sends it
//! - expect.json: the expected outcome and exact ordered message list
//!
//! These tests load the fixtures, normalize, evaluate, and compare the
//! report to the expected result, including message order.

use sgscheck_core::{Submission, evaluate, normalize};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);

    let case_path = dir.join("case.json");
    let expect_path = dir.join("expect.json");

    let case_str = std::fs::read_to_string(&case_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", case_path.display()));
    let expect_str = std::fs::read_to_string(&expect_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", expect_path.display()));

    let submission: Submission = serde_json::from_str(&case_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", case_path.display()));
    let expected: serde_json::Value = serde_json::from_str(&expect_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", expect_path.display()));

    let (director, roster) = normalize(submission);
    let report = evaluate(&director, &roster);

    let got = serde_json::json!({
        "accepted": report.is_accepted(),
        "messages": report.messages(),
    });

    assert_eq!(
        got,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(&got).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );
}

#[test]
fn golden_clean_pass() {
    run_fixture("golden_clean_pass");
}

#[test]
fn golden_placeholder_extra_teams() {
    run_fixture("golden_placeholder_extra_teams");
}

#[test]
fn adversarial_director_scienze_motorie() {
    run_fixture("adversarial_director_scienze_motorie");
}

#[test]
fn adversarial_senior_repeated() {
    run_fixture("adversarial_senior_repeated");
}

#[test]
fn adversarial_first_team_unassigned() {
    run_fixture("adversarial_first_team_unassigned");
}

#[test]
fn adversarial_first_team_elevel() {
    run_fixture("adversarial_first_team_elevel");
}

#[test]
fn adversarial_cross_group_conflict() {
    run_fixture("adversarial_cross_group_conflict");
}

#[test]
fn adversarial_director_coaches_first_team() {
    run_fixture("adversarial_director_coaches_first_team");
}
