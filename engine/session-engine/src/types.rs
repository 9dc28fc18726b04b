//! Core types for the session engine (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the upstream log reader exports)
// ---------------------------------------------------------------------------

/// One inbound event record. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundRecord {
  pub event_id: String,
  #[serde(default)]
  pub event_name: Option<String>,
  /// Raw timestamp string as exported. `"N/A"` is a sentinel for absent.
  #[serde(default, alias = "timestamp")]
  pub raw_timestamp: Option<String>,
  /// Already-normalized RFC3339 timestamp, honored if present.
  #[serde(default)]
  pub parsed_time: Option<DateTime<Utc>>,
  pub source: String,
  #[serde(default)]
  pub details: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Correlation tag
// ---------------------------------------------------------------------------

/// How an event is attached to a session. Set at most once, never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correlation {
  InSession,
  GraceBefore,
  GraceAfter,
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical event record after timestamp normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
  pub event_id: String,
  pub event_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub raw_timestamp: Option<String>,
  pub parsed_time: Option<DateTime<Utc>>,
  pub source: String,
  #[serde(default)]
  pub details: HashMap<String, String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub correlation: Option<Correlation>,
}

// ---------------------------------------------------------------------------
// Session reasons (normalized vocabulary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartReason {
  LsmSessionStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
  ExplicitLogoff,
  OverlappingSessionStart,
  InactivityTimeout,
  SessionOpenAtLogEnd,
}

// ---------------------------------------------------------------------------
// Session (output contract)
// ---------------------------------------------------------------------------

/// One reconstructed remote-desktop session with its member events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  pub session_id: String,
  pub start_time: DateTime<Utc>,
  /// None only while the session is still open during the scan.
  pub end_time: Option<DateTime<Utc>>,
  pub start_reason: StartReason,
  /// None only while the session is still open during the scan.
  pub end_reason: Option<EndReason>,
  pub user: Option<String>,
  pub source_ip: Option<String>,
  /// Member events in attachment order (chronological within the builder pass).
  pub events: Vec<EventRecord>,
}

// ---------------------------------------------------------------------------
// Engine output
// ---------------------------------------------------------------------------

/// Full reconstruction result: the tagged timeline plus the session list.
#[derive(Debug, Clone, Serialize)]
pub struct Reconstruction {
  pub timeline: Vec<EventRecord>,
  pub sessions: Vec<Session>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub line: Option<usize>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      line: None,
    }
  }

  pub fn with_line(mut self, line: usize) -> Self {
    self.line = Some(line);
    self
  }
}
