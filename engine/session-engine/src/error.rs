//! Structured error types for the session engine boundary.
//!
//! The reconstruction algorithm itself never fails; these errors exist only
//! at the ingest/IO edge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json (line {line}): {source}")]
  Json {
    line: usize,
    #[source]
    source: serde_json::Error,
  },
}

impl EngineError {
  pub fn json(line: usize, source: serde_json::Error) -> Self {
    Self::Json { line, source }
  }
}
