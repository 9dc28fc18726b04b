//! Session reconstruction: a single pass over the sorted timeline.
//!
//! State is local to the scan (one in-progress session plus the last
//! timestamp seen). Events without a timestamp are skipped here but stay in
//! the raw timeline. Event 21 is the only authoritative session start.

use chrono::{DateTime, Duration, Utc};

use crate::config::Config;
use crate::extract;
use crate::markers;
use crate::types::*;

/// Scan the sorted timeline and rebuild sessions.
///
/// Correlation tags are written onto the timeline entries as members are
/// attached, so the raw timeline and the session member lists agree.
pub fn build_sessions(timeline: &mut [EventRecord], config: &Config) -> Vec<Session> {
  let inactivity = Duration::minutes(config.inactivity_timeout_minutes);

  let mut sessions: Vec<Session> = Vec::new();
  let mut current: Option<Session> = None;
  let mut last_event_time: Option<DateTime<Utc>> = None;

  for event in timeline.iter_mut() {
    let t = match event.parsed_time {
      Some(t) => t,
      None => continue,
    };

    // Long silence suggests the session ended without a logoff record.
    // Checked before interpreting the current event.
    if let Some(last) = last_event_time {
      if t - last > inactivity {
        if let Some(mut session) = current.take() {
          session.end_time = Some(last);
          session.end_reason = Some(EndReason::InactivityTimeout);
          sessions.push(session);
        }
      }
    }

    last_event_time = Some(t);

    if event.event_id == markers::SESSION_START_ID {
      // A new start while one is open closes the previous session.
      if let Some(mut session) = current.take() {
        session.end_time = Some(t);
        session.end_reason = Some(EndReason::OverlappingSessionStart);
        sessions.push(session);
      }

      event.correlation = Some(Correlation::InSession);
      let user = extract::extract_user(&event.details);
      let source_ip = extract::extract_source_ip(&event.details);

      current = Some(Session {
        session_id: session_id(t, &event.source, user.as_deref(), source_ip.as_deref()),
        start_time: t,
        end_time: None,
        start_reason: StartReason::LsmSessionStart,
        end_reason: None,
        user,
        source_ip,
        events: vec![event.clone()],
      });
      continue;
    }

    // Attach anything that happens while a session is active.
    if let Some(mut session) = current.take() {
      event.correlation = Some(Correlation::InSession);
      session.events.push(event.clone());

      if markers::is_session_end(&event.event_id) {
        session.end_time = Some(t);
        session.end_reason = Some(EndReason::ExplicitLogoff);
        sessions.push(session);
      } else {
        current = Some(session);
      }
    }
  }

  // Close any session left open at end of logs.
  if let Some(mut session) = current.take() {
    session.end_time = last_event_time;
    session.end_reason = Some(EndReason::SessionOpenAtLogEnd);
    sessions.push(session);
  }

  sessions
}

/// Stable session id: hash of the start instant plus the identifying fields
/// observed on the start marker.
fn session_id(
  start_time: DateTime<Utc>,
  source: &str,
  user: Option<&str>,
  source_ip: Option<&str>,
) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(start_time.to_rfc3339().as_bytes());
  hasher.update(b"|");
  hasher.update(source.as_bytes());
  hasher.update(b"|");
  hasher.update(user.unwrap_or_default().as_bytes());
  hasher.update(b"|");
  hasher.update(source_ip.unwrap_or_default().as_bytes());
  let hex = hasher.finalize().to_hex();
  format!("ses-{}", &hex[..16])
}
