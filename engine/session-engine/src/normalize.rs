//! Normalize inbound records into canonical internal EventRecord models.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::markers;
use crate::types::*;

/// Parse a raw timestamp string into a UTC instant.
///
/// Accepts RFC3339 / ISO-8601 with a trailing `Z` or a numeric offset, and a
/// naive `YYYY-MM-DDTHH:MM:SS[.frac]` form interpreted as UTC. The `"N/A"`
/// sentinel and anything unparseable yield `None`; parsing never errors.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
  if raw.is_empty() || raw == "N/A" {
    return None;
  }

  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Some(dt.with_timezone(&Utc));
  }

  // Naive form without offset, taken as UTC.
  NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
    .ok()
    .map(|naive| naive.and_utc())
}

/// Normalize one inbound record.
///
/// Idempotent: a record that already carries `parsed_time` is not re-parsed.
/// A missing `event_name` is backfilled from the known-id label table.
pub fn normalize(raw: InboundRecord) -> EventRecord {
  let parsed_time = raw
    .parsed_time
    .or_else(|| raw.raw_timestamp.as_deref().and_then(parse_timestamp));

  let event_name = match raw.event_name {
    Some(name) if !name.is_empty() => name,
    _ => markers::event_label(&raw.event_id)
      .unwrap_or_default()
      .to_string(),
  };

  EventRecord {
    event_id: raw.event_id,
    event_name,
    raw_timestamp: raw.raw_timestamp,
    parsed_time,
    source: raw.source,
    details: raw.details,
    correlation: None,
  }
}
