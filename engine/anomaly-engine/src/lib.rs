//! RDPTrace Session Anomaly Engine — deterministic statistical scoring.
//! Supporting analysis over reconstructed sessions, not primary evidence.
//! Used by the binary for stdin/stdout; can also be called as a library.

pub mod config;
pub mod features;
pub mod lof;
pub mod types;

use session_engine::Session;

pub use config::Config;
pub use types::Finding;

/// Score sessions against their peer group and return one finding per
/// deviant session. With fewer sessions than the configured minimum the
/// comparison is unreliable, so the result is empty.
pub fn run(sessions: &[Session], config: &Config) -> Vec<Finding> {
  if sessions.len() < config.min_sessions {
    return Vec::new();
  }

  let points: Vec<Vec<f64>> = sessions
    .iter()
    .map(|s| features::extract_features(s, config))
    .collect();
  let k = config.max_neighbors.min(points.len() - 1);
  let scores = lof::local_outlier_factor(&points, k);

  let dims = features::FEATURE_NAMES.len();
  let n = points.len() as f64;
  let means: Vec<f64> = (0..dims)
    .map(|d| points.iter().map(|p| p[d]).sum::<f64>() / n)
    .collect();
  let stds: Vec<f64> = (0..dims)
    .map(|d| {
      let var = points.iter().map(|p| (p[d] - means[d]).powi(2)).sum::<f64>() / n;
      var.sqrt() + 1e-9
    })
    .collect();

  let mut findings = Vec::new();
  for ((session, point), score) in sessions.iter().zip(&points).zip(&scores) {
    if *score < config.lof_threshold {
      continue;
    }

    let mut reasons: Vec<&str> = Vec::new();
    for (d, name) in features::FEATURE_NAMES.iter().enumerate() {
      let z = (point[d] - means[d]) / stds[d];
      if z.abs() < config.zscore_threshold {
        continue;
      }
      if let Some(reason) = features::reason_for(name) {
        reasons.push(reason);
      }
    }
    if reasons.is_empty() {
      reasons.push("Statistically anomalous session behavior");
    }

    findings.push(Finding {
      session_id: session.session_id.clone(),
      user: session.user.clone(),
      source_ip: session.source_ip.clone(),
      start_time: Some(session.start_time),
      end_time: session.end_time,
      severity: "High".into(),
      rule: "Statistical Session Anomaly".into(),
      description: format!(
        "Session deviates from peer sessions based on statistical comparison (score={:.4})",
        score
      ),
      explanation: reasons.join(" | "),
    });
  }

  findings
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone, Utc};
  use session_engine::types::{EventRecord, StartReason};
  use std::collections::HashMap;

  fn session(idx: u32, minutes: i64, event_count: usize) -> Session {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap() + Duration::hours(idx as i64);
    let events = (0..event_count)
      .map(|_| EventRecord {
        event_id: "4624".into(),
        event_name: String::new(),
        raw_timestamp: None,
        parsed_time: None,
        source: "Security".into(),
        details: HashMap::new(),
        correlation: None,
      })
      .collect();
    Session {
      session_id: format!("ses-{:016x}", idx),
      start_time: start,
      end_time: Some(start + Duration::minutes(minutes)),
      start_reason: StartReason::LsmSessionStart,
      end_reason: None,
      user: Some("alice".into()),
      source_ip: Some("10.0.0.5".into()),
      events,
    }
  }

  #[test]
  fn fewer_than_minimum_sessions_is_a_noop() {
    let sessions: Vec<Session> = (0..4).map(|i| session(i, 30, 3)).collect();
    assert!(run(&sessions, &Config::default()).is_empty());
  }

  #[test]
  fn run_returns_valid_finding_shape() {
    let mut sessions: Vec<Session> = (0..6).map(|i| session(i, 30, 3)).collect();
    // One session far outside the peer group.
    sessions.push(session(6, 3000, 500));

    let findings = run(&sessions, &Config::default());
    assert_eq!(findings.len(), 1);
    let f = &findings[0];
    assert_eq!(f.session_id, sessions[6].session_id);
    assert_eq!(f.severity, "High");
    assert_eq!(f.rule, "Statistical Session Anomaly");
    assert!(f.description.contains("score="));
    assert!(!f.explanation.is_empty());
  }
}
