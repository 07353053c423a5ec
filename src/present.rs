use std::fmt;

use anyhow::Result;
use inquire::{InquireError, Select};

use crate::cli::Format;
use crate::render;
use crate::report::Report;

/// Resolved output mode after `--format auto` is settled against the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Table,
  Picker,
}

/// `auto` renders the static table on an interactive stdout and switches to
/// the fuzzy picker when output is piped; explicit formats win either way.
pub fn detect_mode(format: Format) -> Mode {
  match format {
    Format::Table => Mode::Table,
    Format::Picker => Mode::Picker,
    Format::Auto => {
      if atty::is(atty::Stream::Stdout) {
        Mode::Table
      } else {
        Mode::Picker
      }
    }
  }
}

/// Single linear render pass over the already-sorted report.
pub fn emit(report: &Report, mode: Mode) -> Result<()> {
  match mode {
    Mode::Table => {
      println!("{}", render::table(&report.summaries));
      Ok(())
    }
    Mode::Picker => run_picker(report),
  }
}

struct PickerRow {
  line: String,
  login: String,
}

impl fmt::Display for PickerRow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.line)
  }
}

/// Fuzzy-filterable reviewer list; a selection prints that reviewer's
/// per-author breakdown. Cancelling with Esc is a clean exit.
fn run_picker(report: &Report) -> Result<()> {
  if report.summaries.is_empty() {
    return Ok(());
  }

  let rows: Vec<PickerRow> = report
    .summaries
    .iter()
    .map(|s| PickerRow {
      line: render::picker_line(s),
      login: s.login.clone(),
    })
    .collect();

  match Select::new("Reviewer", rows).prompt() {
    Ok(row) => {
      if let Some(authors) = report.index.reviewers.get(&row.login) {
        println!("{}", render::breakdown(&row.login, authors));
      }
      Ok(())
    }
    Err(InquireError::OperationCanceled) => Ok(()),
    Err(err) => Err(err.into()),
  }
}
