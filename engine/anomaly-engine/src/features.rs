//! Session-level behavioral features and their explanations.

use std::collections::HashSet;

use chrono::Timelike;
use session_engine::extract::first_present;
use session_engine::Session;

use crate::config::Config;

/// Feature vector layout; order matters for z-score explanations.
pub const FEATURE_NAMES: [&str; 12] = [
  "duration",
  "failed_logons",
  "successful_logons",
  "unique_tasks",
  "unique_services",
  "admin_added",
  "user_created",
  "logs_cleared",
  "total_events",
  "off_hours",
  "ip_present",
  "user_present",
];

const TASK_NAME_KEYS: [&str; 3] = ["TaskName", "Task", "Name"];
const SERVICE_NAME_KEYS: [&str; 2] = ["ServiceName", "Service"];

/// Extract the behavioral feature vector for one session.
pub fn extract_features(session: &Session, config: &Config) -> Vec<f64> {
  let events = &session.events;

  let duration = session
    .end_time
    .map(|end| (end - session.start_time).num_seconds() as f64)
    .unwrap_or(0.0);

  let failed = count_id(session, "4625");
  let successful = events
    .iter()
    .filter(|e| e.event_id == "4624" || e.event_id == "1149")
    .count() as f64;

  // Deduplicated persistence mechanisms.
  let mut unique_tasks: HashSet<&str> = HashSet::new();
  let mut unique_services: HashSet<&str> = HashSet::new();
  for event in events {
    if event.event_id == "4698" || event.event_id == "129" {
      unique_tasks.insert(first_present(&event.details, &TASK_NAME_KEYS).unwrap_or("UnknownTask"));
    } else if event.event_id == "7045" {
      unique_services
        .insert(first_present(&event.details, &SERVICE_NAME_KEYS).unwrap_or("UnknownService"));
    }
  }

  let hour = session.start_time.hour();
  let off_hours = if hour < config.work_start_hour || hour > config.work_end_hour {
    1.0
  } else {
    0.0
  };

  vec![
    duration,
    failed,
    successful,
    unique_tasks.len() as f64,
    unique_services.len() as f64,
    count_id(session, "4732"),
    count_id(session, "4720"),
    count_id(session, "1102"),
    events.len() as f64,
    off_hours,
    if session.source_ip.is_some() { 1.0 } else { 0.0 },
    if session.user.is_some() { 1.0 } else { 0.0 },
  ]
}

fn count_id(session: &Session, event_id: &str) -> f64 {
  session
    .events
    .iter()
    .filter(|e| e.event_id == event_id)
    .count() as f64
}

/// Human-readable reason for a feature deviating from the peer group.
/// Features without a mapped reason contribute nothing.
pub fn reason_for(feature_name: &str) -> Option<&'static str> {
  match feature_name {
    "duration" => Some("Unusual session duration"),
    "unique_tasks" => Some("Unusual scheduled task activity"),
    "unique_services" => Some("Service installation behavior"),
    "admin_added" => Some("Privilege escalation activity"),
    "user_created" => Some("User account creation"),
    "logs_cleared" => Some("Anti-forensics behavior"),
    "failed_logons" => Some("Failed login anomaly"),
    "off_hours" => Some("Off-hours access pattern"),
    "total_events" => Some("High session activity volume"),
    _ => None,
  }
}
