use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed workout record from the activity provider.
///
/// Records are read-only input: the engine classifies and aggregates them but
/// never writes back. Telemetry fields are optional because manual entries
/// and sensor-less workouts omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
  pub id: i64,
  pub name: String,
  /// The provider uses "type" for legacy and "sport_type" for newer activities
  #[serde(rename = "type", default)]
  pub activity_type: String,
  #[serde(default)]
  pub sport_type: Option<String>,
  /// Meters
  #[serde(default)]
  pub distance: f64,
  /// Seconds
  #[serde(default)]
  pub moving_time: f64,
  /// Seconds
  #[serde(default)]
  pub elapsed_time: f64,
  #[serde(default)]
  pub total_elevation_gain: Option<f64>,
  pub start_date: DateTime<Utc>,
  #[serde(default)]
  pub average_watts: Option<f64>,
  #[serde(default)]
  pub weighted_average_watts: Option<f64>,
  #[serde(default)]
  pub max_watts: Option<f64>,
  #[serde(default)]
  pub has_heartrate: Option<bool>,
  #[serde(default)]
  pub average_heartrate: Option<f64>,
  #[serde(default)]
  pub max_heartrate: Option<f64>,
}

impl Activity {
  /// The sport label used for classification. Newer records carry
  /// `sport_type`; older ones only `type`.
  pub fn kind(&self) -> &str {
    self
      .sport_type
      .as_deref()
      .filter(|s| !s.is_empty())
      .unwrap_or(&self.activity_type)
  }

  /// Power reading for fitness metrics: weighted average preferred, plain
  /// average as fallback.
  pub fn power(&self) -> Option<f64> {
    self.weighted_average_watts.or(self.average_watts)
  }
}
