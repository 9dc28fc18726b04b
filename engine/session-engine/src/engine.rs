//! Core engine: normalize, sort, rebuild sessions, correlate.

use crate::config::Config;
use crate::correlate;
use crate::sessions;
use crate::timeline;
use crate::types::*;

/// The session reconstruction engine. Stateless across calls; each
/// reconstruction is a full batch pass.
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Reconstruct sessions from an unordered batch of inbound records.
  ///
  /// Never fails: records with unusable timestamps stay in the timeline
  /// untagged, and a small or empty session list is itself a signal about
  /// the input data.
  pub fn reconstruct(&self, records: Vec<InboundRecord>) -> Reconstruction {
    let mut timeline = timeline::build_timeline(records);
    let mut sessions = sessions::build_sessions(&mut timeline, &self.config);
    correlate::correlate_admin_events(&mut sessions, &mut timeline, &self.config);

    Reconstruction { timeline, sessions }
  }
}
