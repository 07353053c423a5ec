use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_org_is_rejected() {
  let mut cmd = Command::cargo_bin("github-review-report").unwrap();
  cmd.args(["--repo", "widgets", "--team", "platform"]);
  let out = cmd.output().unwrap();
  assert!(!out.status.success());
  let err = String::from_utf8_lossy(&out.stderr);
  assert!(err.contains("--org is required"), "stderr: {}", err);
}

#[test]
fn zero_months_is_rejected() {
  let mut cmd = Command::cargo_bin("github-review-report").unwrap();
  cmd
    .args(["--org", "acme", "--repo", "widgets", "--team", "platform", "--months", "0"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--months must be at least 1"));
}

#[test]
fn malformed_repo_is_rejected() {
  let mut cmd = Command::cargo_bin("github-review-report").unwrap();
  cmd
    .args(["--org", "acme", "--repo", "acme//widgets", "--team", "platform"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("must look like OWNER/NAME"));
}

#[test]
fn blank_team_is_rejected() {
  let mut cmd = Command::cargo_bin("github-review-report").unwrap();
  cmd
    .args(["--org", "acme", "--repo", "widgets", "--team", "  "])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--team is required"));
}
