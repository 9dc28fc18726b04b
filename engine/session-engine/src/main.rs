//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is an InboundRecord. Output lines are either:
//! - A Session (one per reconstructed session)
//! - An ErrorOutput (when a line fails to parse)
//!
//! A summary of the run goes to stderr; stdout stays pure JSON.

use session_engine::types::ErrorOutput;
use session_engine::{Engine, EngineError};
use std::io::{self, Write};

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  let batch = match session_engine::ingest::read_records(stdin.lock()) {
    Ok(b) => b,
    Err(e) => {
      let _ = writeln!(io::stderr(), "session-engine: read error: {}", e);
      std::process::exit(1);
    }
  };

  for err in &batch.rejected {
    let output = match err {
      EngineError::Json { line, source } => {
        ErrorOutput::new(format!("json parse: {}", source)).with_line(*line)
      }
      _ => ErrorOutput::new(err.to_string()),
    };
    let _ = serde_json::to_writer(&mut out, &output);
    let _ = writeln!(out);
  }

  let record_count = batch.records.len();
  let engine = Engine::with_defaults();
  let result = engine.reconstruct(batch.records);

  for session in &result.sessions {
    let _ = serde_json::to_writer(&mut out, session);
    let _ = writeln!(out);
  }

  let _ = out.flush();
  let _ = writeln!(
    io::stderr(),
    "session-engine: {} records, {} sessions, {} rejected lines",
    record_count,
    result.sessions.len(),
    batch.rejected.len()
  );
}
