use crate::common;

#[test]
fn approvals_merge_across_pull_request_pages() {
  let team = common::team_fixture(&["alice", "bob"]);
  let page0 = common::prs_page_fixture(
    &[common::pr_node(1, Some("mira"), "2025-09-10T00:00:00Z", &["alice"])],
    Some("P1"),
  );
  let page1 = common::prs_page_fixture(
    &[common::pr_node(2, Some("noah"), "2025-09-05T00:00:00Z", &["alice", "bob"])],
    None,
  );

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
    .env("GRR_TEST_PRS_PAGE_0_JSON", &page0)
    .env("GRR_TEST_PRS_PAGE_P1_JSON", &page1);

  let out = cmd.output().unwrap();
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  assert_eq!(
    String::from_utf8_lossy(&out.stdout),
    "Reviewer  Reviews\nalice           2\nbob             1\n"
  );
}

#[test]
fn a_missing_page_fixture_fails_instead_of_truncating() {
  let team = common::team_fixture(&["alice"]);
  let page0 = common::prs_page_fixture(
    &[common::pr_node(1, Some("mira"), "2025-09-10T00:00:00Z", &["alice"])],
    Some("GONE"),
  );

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
    .env("GRR_TEST_PRS_PAGE_0_JSON", &page0)
    .env_remove("GRR_TEST_PRS_PAGE_GONE_JSON");

  let out = cmd.output().unwrap();
  assert!(!out.status.success());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("GRR_TEST_PRS_PAGE_GONE_JSON"), "stderr: {}", stderr);
}
