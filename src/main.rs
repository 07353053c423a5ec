use anyhow::Result;
use clap::Parser;

use github_review_report::cli::{Cli, normalize};
use github_review_report::{present, report, util};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  // Phase 2: fetch and aggregate
  let report = report::build_report(&cfg)?;

  // Phase 3: present (table or picker)
  let mode = present::detect_mode(cfg.format);
  present::emit(&report, mode)
}
