use crate::common;

// Picker mode with nothing to pick must not open a prompt; it exits cleanly
// with empty stdout, which also keeps piped use safe.
#[test]
fn picker_mode_with_no_reviewers_prints_nothing_and_succeeds() {
  let team = common::team_fixture(&["alice"]);
  let prs = common::prs_fixture(&[common::pr_node(
    1,
    Some("mira"),
    "2025-05-01T00:00:00Z",
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
      "picker",
      "--now-override",
      common::PINNED_NOW,
    ])
    .env("GRR_TEST_TEAM_JSON", &team)
    .env("GRR_TEST_PRS_JSON", &prs);

  let out = cmd.output().unwrap();
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  assert!(out.stdout.is_empty());
}
