// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the review-report model (pull requests, reviews, the reviewer index) shared by fetch, aggregation and rendering
// role: model/types
// outputs: Serializable structs with stable field names; deterministic BTree-based grouping types
// invariants: ReviewIndex keys are team-member logins only; PR lists preserve fetch order; no mutation after construction
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Login GitHub shows in place of deleted accounts; used as the author key
/// when a pull request's author is gone.
pub const GHOST_LOGIN: &str = "ghost";

/// Member logins of the configured team; the trust filter for reviewers.
pub type TeamMemberSet = BTreeSet<String>;

/// One pull request as fetched, with its approved reviews attached.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PullRequest {
  // Core scalars
  pub number: i64,
  pub title: String,
  pub url: String,
  /// Author login; `None` when the account was deleted.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,
  // Temporal
  pub created_at: String,
  pub updated_at: String,
  // Reviews (APPROVED state only, capped at the API page size)
  pub approvals: Vec<Review>,
}

impl PullRequest {
  /// Author key used for grouping; deleted accounts fold into [`GHOST_LOGIN`].
  pub fn author_key(&self) -> &str {
    self.author.as_deref().unwrap_or(GHOST_LOGIN)
  }

  /// The display fields the breakdown view keeps per entry.
  pub fn reviewed_ref(&self) -> ReviewedPr {
    ReviewedPr {
      number: self.number,
      title: self.title.clone(),
      url: self.url.clone(),
    }
  }
}

/// A single APPROVED review on a pull request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Review {
  /// Reviewer login; `None` when the account was deleted.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reviewer: Option<String>,
  pub state: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub submitted_at: Option<String>,
}

/// Per-entry payload of the reviewer index: what the breakdown view shows.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReviewedPr {
  pub number: i64,
  pub title: String,
  pub url: String,
}

/// reviewer login → author login → pull requests in fetch order.
///
/// A reviewer key exists only if that login is in the [`TeamMemberSet`] the
/// index was built against. BTree maps keep iteration deterministic.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ReviewIndex {
  pub reviewers: BTreeMap<String, BTreeMap<String, Vec<ReviewedPr>>>,
}

impl ReviewIndex {
  pub fn is_empty(&self) -> bool {
    self.reviewers.is_empty()
  }
}

/// Per-reviewer totals, derived from [`ReviewIndex`] for display.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ReviewerSummary {
  pub login: String,
  pub total: usize,
}
