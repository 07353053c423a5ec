use colored::Colorize;
use std::collections::BTreeMap;

use crate::model::{ReviewedPr, ReviewerSummary};

/// Aligned two-column table over reviewer summaries. The name column is as
/// wide as the longest login plus two (floored at the header label so an
/// empty report still renders two columns); counts are right-aligned.
pub fn table(summaries: &[ReviewerSummary]) -> String {
  let longest = summaries
    .iter()
    .map(|s| s.login.len())
    .max()
    .unwrap_or(0)
    .max("Reviewer".len());
  let width = longest + 2;

  let mut lines = Vec::with_capacity(summaries.len() + 1);
  lines.push(format!("{:<width$}{:>7}", "Reviewer", "Reviews"));
  for s in summaries {
    lines.push(format!("{:<width$}{:>7}", s.login, s.total));
  }
  lines.join("\n")
}

/// One picker row per reviewer, matching the table's sort order.
pub fn picker_line(summary: &ReviewerSummary) -> String {
  format!("@{} ({} approvals)", summary.login, summary.total)
}

/// Nested per-author breakdown for one reviewer. Headers are bold, author
/// groups cyan, URLs dimmed; `colored` drops the escapes on non-terminals.
pub fn breakdown(login: &str, authors: &BTreeMap<String, Vec<ReviewedPr>>) -> String {
  let total: usize = authors.values().map(Vec::len).sum();

  let mut lines = Vec::new();
  lines.push(format!("@{} ({} approvals)", login, total).bold().to_string());
  for (author, prs) in authors {
    lines.push(String::new());
    lines.push(format!("{} ({})", author.cyan().bold(), prs.len()));
    for pr in prs {
      lines.push(format!("  #{} {}", pr.number, pr.title));
      lines.push(format!("      {}", pr.url.dimmed()));
    }
  }
  lines.join("\n")
}
