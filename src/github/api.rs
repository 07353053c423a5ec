// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Isolated GitHub GraphQL transport (token discovery, POST seam, env fixture backend)
// role: github/api
// inputs: env GITHUB_TOKEN / GH_TOKEN; optional `gh` CLI for token fallback; GRR_TEST_* fixture vars
// outputs: Raw GraphQL response envelopes as serde_json::Value
// side_effects: Network calls to api.github.com; spawns `gh` subprocess when needed
// invariants:
// - Token discovery prefers GITHUB_TOKEN, then GH_TOKEN, then `gh auth token`
// - Fixture vars take precedence over HTTP so tests never touch the network
// - Transport and non-2xx failures abort the run (fail-fast, no retry)
// errors: Propagated as anyhow::Result with context; callers do not recover
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result, bail};

pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
const USER_AGENT: &str = "github-review-report";

const ENV_TEAM_FIXTURE: &str = "GRR_TEST_TEAM_JSON";
const ENV_PRS_FIXTURE: &str = "GRR_TEST_PRS_JSON";
const ENV_PRS_PAGE_PREFIX: &str = "GRR_TEST_PRS_PAGE_";

/// Discover a GitHub token: env vars first, then `gh auth token` if available.
pub fn get_github_token() -> Option<String> {
  if let Ok(t) = std::env::var("GITHUB_TOKEN") {
    if !t.trim().is_empty() {
      return Some(t);
    }
  }

  if let Ok(gh_token) = std::env::var("GH_TOKEN") {
    if !gh_token.trim().is_empty() {
      return Some(gh_token);
    }
  }

  if let Ok(output) = std::process::Command::new("gh").args(["auth", "token"]).output() {
    if output.status.success() {
      let t = String::from_utf8_lossy(&output.stdout).trim().to_string();

      if !t.is_empty() {
        return Some(t);
      }
    }
  }

  None
}

// --- Trait seam for the GraphQL transport ---
pub trait GithubGraphql {
  /// POST one GraphQL document with its variables; returns the raw response
  /// envelope (`data` / `errors` untouched).
  fn graphql(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value>;
}

struct HttpGraphql {
  token: String,
  endpoint: String,
}

impl HttpGraphql {
  fn new(token: String) -> Self {
    Self {
      token,
      endpoint: GITHUB_GRAPHQL_URL.to_string(),
    }
  }

  #[cfg(any(test, feature = "testutil"))]
  fn with_endpoint(token: String, endpoint: String) -> Self {
    Self { token, endpoint }
  }
}

impl GithubGraphql for HttpGraphql {
  fn graphql(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value> {
    let agent = ureq::AgentBuilder::new().build();
    let payload = serde_json::json!({ "query": query, "variables": variables });

    let response = agent
      .post(&self.endpoint)
      .set("Authorization", &format!("Bearer {}", self.token))
      .set("User-Agent", USER_AGENT)
      .send_json(payload)
      .context("GitHub GraphQL request failed")?;

    response
      .into_json::<serde_json::Value>()
      .context("GitHub GraphQL response was not valid JSON")
  }
}

/// Fixture-backed transport for tests: responses come from GRR_TEST_* env vars.
///
/// The team query is served from GRR_TEST_TEAM_JSON. The pull-request query is
/// served from GRR_TEST_PRS_JSON, or — when paging is under test — from
/// GRR_TEST_PRS_PAGE_<cursor>_JSON, where the first page is page 0 and each
/// fixture's `endCursor` names the var suffix of the next page.
struct EnvGraphql;

impl GithubGraphql for EnvGraphql {
  fn graphql(&self, _query: &str, variables: serde_json::Value) -> Result<serde_json::Value> {
    if variables.get("team").is_some() {
      return fixture_json(ENV_TEAM_FIXTURE);
    }

    match variables.get("cursor").and_then(|c| c.as_str()) {
      Some(cursor) => fixture_json(&format!("{}{}_JSON", ENV_PRS_PAGE_PREFIX, cursor)),
      None => {
        let first_page = format!("{}0_JSON", ENV_PRS_PAGE_PREFIX);
        if std::env::var(&first_page).is_ok() {
          fixture_json(&first_page)
        } else {
          fixture_json(ENV_PRS_FIXTURE)
        }
      }
    }
  }
}

fn fixture_json(var: &str) -> Result<serde_json::Value> {
  let s = std::env::var(var).with_context(|| format!("missing {} fixture", var))?;
  serde_json::from_str(&s).with_context(|| format!("{} is not valid JSON", var))
}

pub fn env_wants_fixture() -> bool {
  std::env::var(ENV_TEAM_FIXTURE).is_ok()
    || std::env::var(ENV_PRS_FIXTURE).is_ok()
    || std::env::var(format!("{}0_JSON", ENV_PRS_PAGE_PREFIX)).is_ok()
}

/// Select the transport: fixtures when GRR_TEST_* vars are present, otherwise
/// HTTP with a discovered token. No token and no fixtures is a hard error.
pub fn build_client() -> Result<Box<dyn GithubGraphql>> {
  if env_wants_fixture() {
    eprintln!("[github] serving GraphQL responses from GRR_TEST_* fixtures");
    return Ok(Box::new(EnvGraphql));
  }

  match get_github_token() {
    Some(token) => Ok(Box::new(HttpGraphql::new(token))),
    None => bail!("no GitHub token found; set GITHUB_TOKEN or GH_TOKEN, or run `gh auth login`"),
  }
}

// Public constructors for dependency injection in higher layers/tests.
#[cfg(any(test, feature = "testutil"))]
pub fn make_env_client() -> Box<dyn GithubGraphql> {
  Box::new(EnvGraphql)
}
#[cfg(any(test, feature = "testutil"))]
pub fn make_http_client(token: String, endpoint: String) -> Box<dyn GithubGraphql> {
  Box::new(HttpGraphql::with_endpoint(token, endpoint))
}
