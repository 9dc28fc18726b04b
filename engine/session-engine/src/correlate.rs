//! Grace-window correlation of administratively significant events.
//!
//! Windows logging is asynchronous, so account/service/task changes tied to
//! a session can land slightly outside its observed bounds. This post-pass
//! attaches such events to the first session whose extended window contains
//! them. Tags set by the builder are never overwritten and an event joins at
//! most one session.

use chrono::Duration;

use crate::config::Config;
use crate::markers;
use crate::types::*;

/// Attach untagged admin events to sessions by extended time window.
///
/// Sessions are scanned in list order; the first match wins. Events tagged
/// `grace_before` occurred strictly before the session start, `grace_after`
/// otherwise. Unmatched events stay uncorrelated in the raw timeline.
pub fn correlate_admin_events(
  sessions: &mut [Session],
  timeline: &mut [EventRecord],
  config: &Config,
) {
  let before = Duration::minutes(config.grace_before_minutes);
  let after = Duration::minutes(config.grace_after_minutes);

  for event in timeline.iter_mut() {
    if !markers::is_admin_event(&event.event_id) || event.correlation.is_some() {
      continue;
    }
    let t = match event.parsed_time {
      Some(t) => t,
      None => continue,
    };

    for session in sessions.iter_mut() {
      let window_start = session.start_time - before;
      let window_end = session.end_time.unwrap_or(session.start_time) + after;

      if window_start <= t && t <= window_end {
        event.correlation = Some(if t < session.start_time {
          Correlation::GraceBefore
        } else {
          Correlation::GraceAfter
        });
        session.events.push(event.clone());
        break;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::normalize::parse_timestamp;
  use crate::sessions::build_sessions;
  use std::collections::HashMap;

  fn event(event_id: &str, ts: &str) -> EventRecord {
    EventRecord {
      event_id: event_id.into(),
      event_name: String::new(),
      raw_timestamp: Some(ts.into()),
      parsed_time: parse_timestamp(ts),
      source: "Security".into(),
      details: HashMap::new(),
      correlation: None,
    }
  }

  fn reconstruct(mut timeline: Vec<EventRecord>) -> (Vec<Session>, Vec<EventRecord>) {
    let config = Config::default();
    let mut sessions = build_sessions(&mut timeline, &config);
    correlate_admin_events(&mut sessions, &mut timeline, &config);
    (sessions, timeline)
  }

  #[test]
  fn admin_event_before_start_gets_grace_before() {
    let (sessions, timeline) = reconstruct(vec![
      // Account created 3 minutes before the session start marker.
      event("4720", "2026-01-01T09:57:00Z"),
      event("21", "2026-01-01T10:00:00Z"),
      event("4634", "2026-01-01T10:30:00Z"),
    ]);

    assert_eq!(timeline[0].correlation, Some(Correlation::GraceBefore));
    assert_eq!(sessions[0].events.len(), 3);
    assert_eq!(sessions[0].events[2].event_id, "4720");
  }

  #[test]
  fn admin_event_after_end_gets_grace_after() {
    let (sessions, timeline) = reconstruct(vec![
      event("21", "2026-01-01T10:00:00Z"),
      event("4634", "2026-01-01T10:30:00Z"),
      // Service installed 10 minutes after logoff.
      event("7045", "2026-01-01T10:40:00Z"),
    ]);

    assert_eq!(timeline[2].correlation, Some(Correlation::GraceAfter));
    assert_eq!(sessions[0].events.last().unwrap().event_id, "7045");
  }

  #[test]
  fn events_outside_the_window_stay_uncorrelated() {
    let (sessions, timeline) = reconstruct(vec![
      event("4720", "2026-01-01T09:00:00Z"),
      event("21", "2026-01-01T10:00:00Z"),
      event("4634", "2026-01-01T10:30:00Z"),
      event("1102", "2026-01-01T11:00:00Z"),
    ]);

    assert_eq!(timeline[0].correlation, None);
    assert_eq!(timeline[3].correlation, None);
    assert_eq!(sessions[0].events.len(), 2);
  }

  #[test]
  fn window_boundaries_are_inclusive() {
    let (_, timeline) = reconstruct(vec![
      // Exactly start - 5 minutes and end + 15 minutes.
      event("4722", "2026-01-01T09:55:00Z"),
      event("21", "2026-01-01T10:00:00Z"),
      event("4634", "2026-01-01T10:30:00Z"),
      event("4698", "2026-01-01T10:45:00Z"),
    ]);

    assert_eq!(timeline[0].correlation, Some(Correlation::GraceBefore));
    assert_eq!(timeline[3].correlation, Some(Correlation::GraceAfter));
  }

  #[test]
  fn in_session_members_are_not_retagged() {
    let (sessions, timeline) = reconstruct(vec![
      event("21", "2026-01-01T10:00:00Z"),
      // Admin event inside the active session; the builder owns it.
      event("4732", "2026-01-01T10:10:00Z"),
      event("4634", "2026-01-01T10:30:00Z"),
    ]);

    assert_eq!(timeline[1].correlation, Some(Correlation::InSession));
    // Exactly one membership.
    let count = sessions[0]
      .events
      .iter()
      .filter(|e| e.event_id == "4732")
      .count();
    assert_eq!(count, 1);
  }

  #[test]
  fn first_matching_session_wins() {
    let (sessions, timeline) = reconstruct(vec![
      event("21", "2026-01-01T10:00:00Z"),
      event("4634", "2026-01-01T10:30:00Z"),
      // Between sessions: inside session 1's after-window and session 2's
      // before-window. Session 1 comes first in list order.
      event("4698", "2026-01-01T10:40:00Z"),
      event("21", "2026-01-01T10:42:00Z"),
      event("4634", "2026-01-01T11:00:00Z"),
    ]);

    assert_eq!(timeline[2].correlation, Some(Correlation::GraceAfter));
    assert!(sessions[0].events.iter().any(|e| e.event_id == "4698"));
    assert!(!sessions[1].events.iter().any(|e| e.event_id == "4698"));
  }

  #[test]
  fn open_session_window_extends_from_start() {
    let mut timeline = vec![event("21", "2026-01-01T10:00:00Z")];
    let config = Config::default();
    let mut sessions = build_sessions(&mut timeline, &config);
    // Force an open window shape: no end_time.
    sessions[0].end_time = None;

    let mut extra = vec![event("7045", "2026-01-01T10:10:00Z")];
    correlate_admin_events(&mut sessions, &mut extra, &config);

    assert_eq!(extra[0].correlation, Some(Correlation::GraceAfter));
  }

  #[test]
  fn timestampless_admin_events_are_ignored() {
    let mut no_ts = event("1102", "N/A");
    no_ts.parsed_time = None;
    let (sessions, timeline) = reconstruct(vec![
      no_ts,
      event("21", "2026-01-01T10:00:00Z"),
      event("4634", "2026-01-01T10:30:00Z"),
    ]);

    assert_eq!(timeline[0].correlation, None);
    assert_eq!(sessions[0].events.len(), 2);
  }
}
