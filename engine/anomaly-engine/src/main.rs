//! Binary entrypoint: read Session JSON lines from stdin, write Finding
//! JSON lines to stdout.
//!
//! Sessions that parse but are not flagged produce no output line. With
//! fewer than the minimum session count the detector is a no-op (exit 0).

use anomaly_engine::Config;
use session_engine::Session;
use std::io::{self, BufRead, Write};

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  let mut sessions: Vec<Session> = Vec::new();
  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "anomaly-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    match serde_json::from_str::<Session>(trimmed) {
      Ok(session) => sessions.push(session),
      Err(e) => {
        let _ = writeln!(io::stderr(), "anomaly-engine: skipping bad line: {}", e);
      }
    }
  }

  let config = Config::default();
  if sessions.len() < config.min_sessions {
    let _ = writeln!(
      io::stderr(),
      "anomaly-engine: skipped (insufficient sessions: {})",
      sessions.len()
    );
    return;
  }

  let findings = anomaly_engine::run(&sessions, &config);
  for finding in &findings {
    let _ = serde_json::to_writer(&mut out, finding);
    let _ = writeln!(out);
  }

  let _ = out.flush();
  let _ = writeln!(
    io::stderr(),
    "anomaly-engine: {} sessions scored, {} flagged",
    sessions.len(),
    findings.len()
  );
}
