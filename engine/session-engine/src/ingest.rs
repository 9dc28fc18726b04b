//! JSON-lines ingest shared by the binary and the merge tool.

use std::io::BufRead;

use crate::error::EngineError;
use crate::types::InboundRecord;

/// Result of reading a JSON-lines stream: the records that parsed plus the
/// per-line errors for the ones that did not.
#[derive(Debug, Default)]
pub struct IngestBatch {
  pub records: Vec<InboundRecord>,
  pub rejected: Vec<EngineError>,
}

/// Read inbound records, one JSON object per line. Blank lines are skipped;
/// malformed lines are collected as errors without stopping the stream.
pub fn read_records<R: BufRead>(reader: R) -> Result<IngestBatch, EngineError> {
  let mut batch = IngestBatch::default();

  for (idx, line) in reader.lines().enumerate() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }
    match serde_json::from_str::<InboundRecord>(trimmed) {
      Ok(record) => batch.records.push(record),
      Err(e) => batch.rejected.push(EngineError::json(idx + 1, e)),
    }
  }

  Ok(batch)
}
