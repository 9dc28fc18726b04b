//! Output types for the anomaly engine (JSON contract).

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One flagged session with its statistical explanation.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
  pub session_id: String,
  pub user: Option<String>,
  pub source_ip: Option<String>,
  pub start_time: Option<DateTime<Utc>>,
  pub end_time: Option<DateTime<Utc>>,
  pub severity: String,
  pub rule: String,
  pub description: String,
  pub explanation: String,
}
