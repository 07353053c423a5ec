// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate one report run: resolve the window, fetch team and pull requests, aggregate
// role: processing/orchestrator
// inputs: EffectiveConfig (org/owner/name/team, months, optional now override)
// outputs: Report with the cutoff used, the reviewer index and sorted summaries
// side_effects: Network or fixture reads via the GraphQL seam; stderr cap warnings
// invariants:
// - The cutoff is computed once and applied to every fetched pull request
// - Summaries are sorted before the presenter sees them
// errors: Propagates fetch/window errors with context; no retries
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;

use crate::aggregate;
use crate::cli::EffectiveConfig;
use crate::github::{api, queries};
use crate::model::{ReviewIndex, ReviewerSummary};
use crate::window;

/// Everything the presenter needs, already sorted and grouped.
#[derive(Debug)]
pub struct Report {
  pub cutoff: String,
  pub index: ReviewIndex,
  pub summaries: Vec<ReviewerSummary>,
}

pub fn build_report(cfg: &EffectiveConfig) -> Result<Report> {
  let now = window::effective_now(window::parse_now_override(cfg.now_override.as_deref()));
  let cutoff = window::cutoff_timestamp(now, cfg.months)?;

  let client = api::build_client()?;
  let members = queries::fetch_team_members(client.as_ref(), &cfg.org, &cfg.team)?;
  let prs = queries::fetch_pull_requests(client.as_ref(), &cfg.owner, &cfg.name)?;
  let recent = queries::recent_only(prs, &cutoff);

  let index = aggregate::build_review_index(&recent, &members);
  let summaries = aggregate::summarize(&index);

  Ok(Report { cutoff, index, summaries })
}
