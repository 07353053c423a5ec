use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "github-review-report",
    version,
    about = "Report approved PR reviews per team member (table or fuzzy picker)",
    long_about = None
)]
pub struct Cli {
  /// GitHub organization login
  #[arg(long)]
  pub org: Option<String>,

  /// Repository to report on: OWNER/NAME, or a bare NAME under --org
  #[arg(long)]
  pub repo: Option<String>,

  /// Team slug whose members count as reviewers
  #[arg(long)]
  pub team: Option<String>,

  /// Window length in calendar months before now
  #[arg(long, default_value_t = 1)]
  pub months: u32,

  /// Output mode; auto = table on an interactive stdout, picker when piped
  #[arg(long, value_enum, default_value = "auto")]
  pub format: Format,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant for window computation (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

/// Presenter selection; `Auto` resolves against terminal interactivity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
  Auto,
  Table,
  Picker,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EffectiveConfig {
  pub org: String,
  /// Repository owner; equals `org` when --repo was a bare name.
  pub owner: String,
  pub name: String,
  pub team: String,
  pub months: u32,
  pub format: Format,
  pub now_override: Option<String>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  if cli.months == 0 {
    bail!("--months must be at least 1");
  }

  let org = required(cli.org.as_deref(), "--org")?;
  let team = required(cli.team.as_deref(), "--team")?;
  let repo = required(cli.repo.as_deref(), "--repo")?;

  let (owner, name) = split_repo(&repo, &org)?;

  Ok(EffectiveConfig {
    org,
    owner,
    name,
    team,
    months: cli.months,
    format: cli.format,
    now_override: cli.now_override,
  })
}

fn required(value: Option<&str>, flag: &str) -> Result<String> {
  match value.map(str::trim) {
    Some(v) if !v.is_empty() => Ok(v.to_string()),
    _ => bail!("{} is required", flag),
  }
}

/// Split a --repo value into (owner, name); a bare name resolves under `org`.
pub fn split_repo(repo: &str, org: &str) -> Result<(String, String)> {
  static RE_REPO: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^(?:([A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)/)?([A-Za-z0-9._-]+)$").unwrap());

  let Some(caps) = RE_REPO.captures(repo) else {
    bail!("--repo must look like OWNER/NAME or NAME: got '{}'", repo)
  };

  let owner = match caps.get(1) {
    Some(m) => m.as_str().to_string(),
    None => org.to_string(),
  };
  let name = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();

  Ok((owner, name))
}
