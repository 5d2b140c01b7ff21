//! Test utilities and helpers
//!
//! Mock data factories and shared assertions for the unit tests. All dates
//! are fixed so tests are reproducible regardless of when they run.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::Activity;

/// ---------------------------------------------------------------------------
/// Time Helpers
/// ---------------------------------------------------------------------------

/// Fixed UTC datetime for deterministic tests
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(year, month, day, hour, min, sec)
    .unwrap()
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Minimal activity with the given sport label and start date; telemetry
/// empty. Tests set the fields they care about directly.
pub fn mock_activity(kind: &str, start: DateTime<Utc>) -> Activity {
  Activity {
    id: 123456,
    name: format!("Morning {}", kind),
    activity_type: kind.to_string(),
    sport_type: None,
    distance: 0.0,
    moving_time: 0.0,
    elapsed_time: 0.0,
    total_elevation_gain: None,
    start_date: start,
    average_watts: None,
    weighted_average_watts: None,
    max_watts: None,
    has_heartrate: None,
    average_heartrate: None,
    max_heartrate: None,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}
