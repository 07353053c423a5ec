use anyhow::{Context, Result};
use chrono::{DateTime, Months, SecondsFormat, Utc};

/// Return `override_now` when set, otherwise the current UTC instant.
///
/// The override comes from the hidden `--now-override` flag and exists so tests
/// can pin the window.
pub fn effective_now(override_now: Option<DateTime<Utc>>) -> DateTime<Utc> {
  override_now.unwrap_or_else(Utc::now)
}

/// Parse a `--now-override` value: RFC3339 first, then a naive
/// `YYYY-MM-DDTHH:MM:SS` treated as UTC. Anything else is ignored.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Utc>> {
  s.and_then(|raw| {
    chrono::DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Utc))
      .or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .map(|ndt| ndt.and_utc())
      })
  })
}

/// Window start: `now` minus `months` calendar months, as a `YYYY-MM-DDTHH:MM:SSZ`
/// string. Day-of-month is clamped when the target month is shorter.
pub fn cutoff_timestamp(now: DateTime<Utc>, months: u32) -> Result<String> {
  let start = now
    .checked_sub_months(Months::new(months))
    .with_context(|| format!("cannot step {} months back from {}", months, now))?;

  Ok(start.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Lexicographic timestamp compare; valid because both sides use the fixed
/// `YYYY-MM-DDTHH:MM:SSZ` shape, which sorts the same as chronological order.
pub fn within_window(updated_at: &str, cutoff: &str) -> bool {
  updated_at >= cutoff
}
