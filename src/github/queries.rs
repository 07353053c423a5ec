// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: The two report queries (team members, pull requests with approved reviews) over the GraphQL seam
// role: github/queries
// inputs: org/team and owner/name from config; a GithubGraphql transport
// outputs: TeamMemberSet and Vec<PullRequest> in fetch order
// side_effects: stderr warnings when a 50-item page cap is filled
// invariants:
// - Pull requests are fetched newest-updated first and pages are followed until exhausted
// - GraphQL `errors` payloads abort the run with the first message
// - Window filtering compares fixed-shape ISO-8601 strings lexicographically
// errors: Propagated as anyhow::Result with context; callers do not recover
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::ext::serde_json::JsonFetch;
use crate::github::api::GithubGraphql;
use crate::model::{PullRequest, Review, TeamMemberSet};
use crate::window;

// Page size used by both query documents; keep in sync with the `first:` args.
pub const PAGE_CAP: usize = 50;

pub const TEAM_MEMBERS_QUERY: &str = r#"
query($org: String!, $team: String!) {
  organization(login: $org) {
    team(slug: $team) {
      members(first: 50) {
        nodes { login }
      }
    }
  }
}
"#;

pub const PULL_REQUESTS_QUERY: &str = r#"
query($owner: String!, $name: String!, $cursor: String) {
  repository(owner: $owner, name: $name) {
    pullRequests(
      first: 50
      after: $cursor
      states: [OPEN, CLOSED, MERGED]
      orderBy: {field: UPDATED_AT, direction: DESC}
    ) {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        number
        title
        url
        createdAt
        updatedAt
        author { login }
        reviews(states: [APPROVED], first: 50) {
          nodes {
            author { login }
            state
            submittedAt
          }
        }
      }
    }
  }
}
"#;

// --- Wire shapes (GraphQL `data` subtree) ---

#[derive(Debug, Deserialize)]
struct TeamMembersData {
  organization: Option<OrgNode>,
}

#[derive(Debug, Deserialize)]
struct OrgNode {
  team: Option<TeamNode>,
}

#[derive(Debug, Deserialize)]
struct TeamNode {
  members: MemberConn,
}

#[derive(Debug, Deserialize)]
struct MemberConn {
  nodes: Vec<Option<MemberNode>>,
}

#[derive(Debug, Deserialize)]
struct MemberNode {
  login: String,
}

#[derive(Debug, Deserialize)]
struct PullsData {
  repository: Option<RepoNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepoNode {
  pull_requests: PullConn,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullConn {
  page_info: PageInfo,
  nodes: Vec<Option<PullNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
  has_next_page: bool,
  end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullNode {
  number: i64,
  title: String,
  url: String,
  created_at: String,
  updated_at: String,
  author: Option<ActorNode>,
  reviews: ReviewConn,
}

#[derive(Debug, Deserialize)]
struct ActorNode {
  login: String,
}

#[derive(Debug, Deserialize)]
struct ReviewConn {
  nodes: Vec<Option<ReviewNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewNode {
  author: Option<ActorNode>,
  state: String,
  submitted_at: Option<String>,
}

impl PullNode {
  fn into_pull_request(self) -> PullRequest {
    let approvals: Vec<Review> = self
      .reviews
      .nodes
      .into_iter()
      .flatten()
      .map(|r| Review {
        reviewer: r.author.map(|a| a.login),
        state: r.state,
        submitted_at: r.submitted_at,
      })
      .collect();

    if approvals.len() >= PAGE_CAP {
      eprintln!(
        "[github] PR #{} filled the {}-review page; approvals beyond it are not counted",
        self.number, PAGE_CAP
      );
    }

    PullRequest {
      number: self.number,
      title: self.title,
      url: self.url,
      author: self.author.map(|a| a.login),
      created_at: self.created_at,
      updated_at: self.updated_at,
      approvals,
    }
  }
}

/// Unwrap a GraphQL envelope: abort on an `errors` payload, yield `data`.
fn expect_data(envelope: serde_json::Value, what: &str) -> Result<serde_json::Value> {
  if let Some(errors) = envelope.get("errors").and_then(|e| e.as_array()) {
    if !errors.is_empty() {
      let message = errors[0].fetch("message").to_or_default::<String>();
      bail!("GraphQL error while fetching {}: {}", what, message);
    }
  }

  envelope
    .fetch("data")
    .to::<serde_json::Value>()
    .with_context(|| format!("GraphQL response for {} had no data", what))
}

/// One page of up to 50 member logins for `org`/`team`.
pub fn fetch_team_members(api: &dyn GithubGraphql, org: &str, team: &str) -> Result<TeamMemberSet> {
  let envelope = api.graphql(TEAM_MEMBERS_QUERY, serde_json::json!({ "org": org, "team": team }))?;
  let data = expect_data(envelope, "team members")?;
  let parsed: TeamMembersData = serde_json::from_value(data).context("unexpected team members response shape")?;

  let team_node = parsed
    .organization
    .with_context(|| format!("organization '{}' not found", org))?
    .team
    .with_context(|| format!("team '{}/{}' not found", org, team))?;

  let logins: Vec<String> = team_node.members.nodes.into_iter().flatten().map(|m| m.login).collect();

  if logins.len() >= PAGE_CAP {
    eprintln!(
      "[github] team {}/{} filled the {}-member page; members beyond it are not counted",
      org, team, PAGE_CAP
    );
  }

  Ok(logins.into_iter().collect())
}

/// Every pull request of `owner`/`name`, newest-updated first, with approved
/// reviews attached; follows cursors until the connection is exhausted.
pub fn fetch_pull_requests(api: &dyn GithubGraphql, owner: &str, name: &str) -> Result<Vec<PullRequest>> {
  let mut out: Vec<PullRequest> = Vec::new();
  let mut cursor: Option<String> = None;

  loop {
    let envelope = api.graphql(
      PULL_REQUESTS_QUERY,
      serde_json::json!({ "owner": owner, "name": name, "cursor": cursor }),
    )?;
    let data = expect_data(envelope, "pull requests")?;
    let parsed: PullsData = serde_json::from_value(data).context("unexpected pull request page shape")?;

    let page = parsed
      .repository
      .with_context(|| format!("repository '{}/{}' not found", owner, name))?
      .pull_requests;

    for node in page.nodes.into_iter().flatten() {
      out.push(node.into_pull_request());
    }

    if !page.page_info.has_next_page {
      break;
    }

    cursor = page.page_info.end_cursor;
    if cursor.is_none() {
      bail!("pull request page for {}/{} reported a next page without a cursor", owner, name);
    }
  }

  Ok(out)
}

/// Keep PRs updated at or after the cutoff (fetch order preserved).
pub fn recent_only(prs: Vec<PullRequest>, cutoff: &str) -> Vec<PullRequest> {
  prs
    .into_iter()
    .filter(|pr| window::within_window(&pr.updated_at, cutoff))
    .collect()
}
