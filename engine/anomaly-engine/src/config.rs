//! Detector configuration with sane defaults.

/// Tunable thresholds for session anomaly scoring.
#[derive(Debug, Clone)]
pub struct Config {
  /// Minimum session count; below this the detector is a no-op.
  pub min_sessions: usize,
  /// Neighborhood size cap for the outlier factor (actual k = min(cap, n-1)).
  pub max_neighbors: usize,
  /// Outlier factor at or above which a session is flagged.
  pub lof_threshold: f64,
  /// Absolute z-score at or above which a feature contributes a reason.
  pub zscore_threshold: f64,
  /// Start of working hours; earlier session starts count as off-hours.
  pub work_start_hour: u32,
  /// End of working hours; later session starts count as off-hours.
  pub work_end_hour: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      min_sessions: 5,
      max_neighbors: 3,
      lof_threshold: 1.5,
      zscore_threshold: 1.5,
      work_start_hour: 7,
      work_end_hour: 21,
    }
  }
}
