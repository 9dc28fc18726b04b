//! Global timeline ordering.

use crate::normalize;
use crate::types::*;

/// Stable sort by parsed time, ascending. Events without a timestamp sort
/// first; input order is preserved among equal keys. No filtering.
pub fn sort_timeline(mut events: Vec<EventRecord>) -> Vec<EventRecord> {
  events.sort_by_key(|event| event.parsed_time);
  events
}

/// Normalize a batch of inbound records and sort them into one timeline.
pub fn build_timeline(records: Vec<InboundRecord>) -> Vec<EventRecord> {
  sort_timeline(records.into_iter().map(normalize::normalize).collect())
}
