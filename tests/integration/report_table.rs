use crate::common;

#[test]
fn table_mode_reports_member_approvals_inside_the_window() {
  let team = common::team_fixture(&["alice", "bob"]);
  let prs = common::prs_fixture(&[
    common::pr_node(101, Some("mira"), "2025-09-10T00:00:00Z", &["alice", "carol"]),
    common::pr_node(103, None, "2025-09-01T00:00:00Z", &["alice", "bob"]),
    common::pr_node(102, Some("mira"), "2025-07-01T00:00:00Z", &["bob"]),
  ]);

  let mut cmd = test_support::cmd_bin("github-review-report");
  cmd
    .args([
      "--org",
      "acme",
      "--repo",
      "acme/widgets",
      "--team",
      "platform",
      "--format",
      "table",
      "--now-override",
      common::PINNED_NOW,
    ])
    .env("GRR_TEST_TEAM_JSON", &team)
    .env("GRR_TEST_PRS_JSON", &prs);

  let out = cmd.output().unwrap();
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

  let stdout = String::from_utf8_lossy(&out.stdout);
  assert_eq!(stdout, "Reviewer  Reviews\nalice           2\nbob             1\n");
}

#[test]
fn table_mode_counts_re_reviews_twice() {
  let team = common::team_fixture(&["alice", "bob"]);
  let prs = common::prs_fixture(&[
    common::pr_node(7, Some("mira"), "2025-09-02T00:00:00Z", &["alice", "alice", "bob"]),
    common::pr_node(8, Some("noah"), "2025-09-03T00:00:00Z", &["alice"]),
  ]);

  let mut cmd = test_support::cmd_bin("github-review-report");
  cmd
    .args([
      "--org",
      "acme",
      "--repo",
      "widgets",
      "--team",
      "platform",
      "--format",
      "table",
      "--now-override",
      common::PINNED_NOW,
    ])
    .env("GRR_TEST_TEAM_JSON", &team)
    .env("GRR_TEST_PRS_JSON", &prs);

  let out = cmd.output().unwrap();
  assert!(out.status.success());
  assert_eq!(
    String::from_utf8_lossy(&out.stdout),
    "Reviewer  Reviews\nalice           3\nbob             1\n"
  );
}

#[test]
fn empty_window_prints_the_header_only() {
  let team = common::team_fixture(&["alice"]);
  let prs = common::prs_fixture(&[common::pr_node(
    1,
    Some("mira"),
    "2025-06-30T00:00:00Z",
    &["alice"],
  )]);

  let mut cmd = test_support::cmd_bin("github-review-report");
  cmd
    .args([
      "--org",
      "acme",
      "--repo",
      "widgets",
      "--team",
      "platform",
      "--format",
      "table",
      "--now-override",
      common::PINNED_NOW,
    ])
    .env("GRR_TEST_TEAM_JSON", &team)
    .env("GRR_TEST_PRS_JSON", &prs);

  let out = cmd.output().unwrap();
  assert!(out.status.success());
  assert_eq!(String::from_utf8_lossy(&out.stdout), "Reviewer  Reviews\n");
}

#[test]
fn a_pr_updated_exactly_at_the_cutoff_is_included() {
  let team = common::team_fixture(&["alice"]);
  let prs = common::prs_fixture(&[common::pr_node(
    5,
    Some("mira"),
    "2025-08-15T12:00:00Z",
    &["alice"],
  )]);

  let mut cmd = test_support::cmd_bin("github-review-report");
  cmd
    .args([
      "--org",
      "acme",
      "--repo",
      "widgets",
      "--team",
      "platform",
      "--format",
      "table",
      "--now-override",
      common::PINNED_NOW,
    ])
    .env("GRR_TEST_TEAM_JSON", &team)
    .env("GRR_TEST_PRS_JSON", &prs);

  let out = cmd.output().unwrap();
  assert!(out.status.success());
  assert_eq!(
    String::from_utf8_lossy(&out.stdout),
    "Reviewer  Reviews\nalice           1\n"
  );
}
