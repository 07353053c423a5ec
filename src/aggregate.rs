// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build the reviewer index from filtered pull requests and derive sorted per-reviewer totals
// role: aggregate/core
// inputs: window-filtered PullRequest list; TeamMemberSet
// outputs: ReviewIndex and ReviewerSummary list for the presenter
// invariants:
// - Reviewer keys are team-member logins only
// - PR lists preserve fetch order; re-reviews append again (no dedup by PR identity)
// - Summaries sort by total descending, then login ascending
// errors: None; aggregation is total over its inputs
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::model::{PullRequest, ReviewIndex, ReviewerSummary, TeamMemberSet};

/// Group approvals as reviewer → author → PRs, keeping only team-member
/// reviewers. A PR approved twice by the same reviewer appends twice.
pub fn build_review_index(prs: &[PullRequest], members: &TeamMemberSet) -> ReviewIndex {
  let mut index = ReviewIndex::default();

  for pr in prs {
    let author = pr.author_key().to_string();

    for review in &pr.approvals {
      let Some(reviewer) = review.reviewer.as_deref() else {
        continue;
      };
      if !members.contains(reviewer) {
        continue;
      }

      index
        .reviewers
        .entry(reviewer.to_string())
        .or_default()
        .entry(author.clone())
        .or_default()
        .push(pr.reviewed_ref());
    }
  }

  index
}

/// Per-reviewer totals, sorted by total descending with login as the tie key.
pub fn summarize(index: &ReviewIndex) -> Vec<ReviewerSummary> {
  let mut out: Vec<ReviewerSummary> = index
    .reviewers
    .iter()
    .map(|(login, authors)| ReviewerSummary {
      login: login.clone(),
      total: authors.values().map(Vec::len).sum(),
    })
    .collect();

  out.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.login.cmp(&b.login)));

  out
}
