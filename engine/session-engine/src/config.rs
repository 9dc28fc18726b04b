//! Engine configuration with sane defaults.

/// Tunable windows for session reconstruction.
#[derive(Debug, Clone)]
pub struct Config {
  /// Minutes of silence before an open session is closed as timed out.
  pub inactivity_timeout_minutes: i64,
  /// Minutes before session start still eligible for grace correlation.
  pub grace_before_minutes: i64,
  /// Minutes after session end still eligible for grace correlation.
  pub grace_after_minutes: i64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      inactivity_timeout_minutes: 60,
      grace_before_minutes: 5,
      grace_after_minutes: 15,
    }
  }
}
