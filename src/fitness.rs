//! Fitness trend calculation
//!
//! The efficiency factor (watts per bpm) is the dashboard's fitness proxy:
//! more power at the same heart rate means better aerobic fitness. Rides are
//! aggregated per calendar week and a least-squares trendline is fit across
//! the weekly series to smooth out ride-to-ride noise.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::discipline::{self, Discipline};
use crate::models::Activity;

/// Heart rates under this are sensor noise and disqualify the ride's
/// efficiency factor.
const MIN_CREDIBLE_HR: f64 = 50.0;

/// Rides before this date predate reliable power data and are ignored.
fn fitness_data_start() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap()
}

/// One week of cycling fitness data, chart-ready.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessDataPoint {
  pub week_key: String,
  /// "MM/DD/YYYY–MM/DD/YYYY" over the Monday..Sunday span
  pub week_label: String,
  pub week_start: NaiveDate,
  /// week_start + 6 days
  pub week_end: NaiveDate,
  /// Mean of per-ride efficiency factors, rounded to one decimal
  pub efficiency_factor: f64,
  /// Watts, rounded to the nearest integer
  pub avg_power: f64,
  /// Bpm, rounded to the nearest integer
  pub avg_hr: f64,
  pub ride_count: u32,
  /// Point on the least-squares line through the weekly efficiency factors
  pub trendline: f64,
}

/// Efficiency factor = watts per bpm. `None` when the ride lacks a power or
/// heart-rate reading, or the heart rate is below the noise floor.
pub fn efficiency_factor(activity: &Activity) -> Option<f64> {
  let watts = activity.power()?;
  let hr = activity.average_heartrate?;
  if hr < MIN_CREDIBLE_HR {
    return None;
  }
  Some(watts / hr)
}

/// Cycling activities carrying both a power and a heart-rate reading.
pub fn rides_with_power_and_hr(activities: &[Activity]) -> Vec<&Activity> {
  discipline::filter_by(activities, Discipline::Cycling)
    .into_iter()
    .filter(|a| a.power().is_some() && a.average_heartrate.is_some())
    .collect()
}

struct WeekBucket<'a> {
  week_start: NaiveDate,
  rides: Vec<&'a Activity>,
}

/// Weekly fitness metrics for power+HR rides from the cutoff date forward,
/// in chronological order with the trendline filled in.
pub fn fitness_trend(activities: &[Activity]) -> Vec<FitnessDataPoint> {
  let start = fitness_data_start();

  let mut by_week: HashMap<String, WeekBucket> = HashMap::new();
  for ride in rides_with_power_and_hr(activities) {
    if ride.start_date < start {
      continue;
    }
    by_week
      .entry(calendar::week_key(ride.start_date))
      .or_insert_with(|| WeekBucket {
        week_start: calendar::week_start(ride.start_date),
        rides: Vec::new(),
      })
      .rides
      .push(ride);
  }

  let mut points: Vec<FitnessDataPoint> = by_week
    .into_iter()
    .map(|(week_key, bucket)| {
      let factors: Vec<f64> = bucket.rides.iter().filter_map(|r| efficiency_factor(r)).collect();
      let powers: Vec<f64> = bucket.rides.iter().filter_map(|r| r.power()).collect();
      let hrs: Vec<f64> = bucket.rides.iter().filter_map(|r| r.average_heartrate).collect();

      let week_end = bucket.week_start + Duration::days(6);
      FitnessDataPoint {
        week_key,
        week_label: format!(
          "{}–{}",
          bucket.week_start.format("%m/%d/%Y"),
          week_end.format("%m/%d/%Y")
        ),
        week_start: bucket.week_start,
        week_end,
        efficiency_factor: round1(mean(&factors).unwrap_or(0.0)),
        avg_power: mean(&powers).unwrap_or(0.0).round(),
        avg_hr: mean(&hrs).unwrap_or(0.0).round(),
        ride_count: bucket.rides.len() as u32,
        trendline: 0.0,
      }
    })
    .collect();

  points.sort_by(|a, b| a.week_start.cmp(&b.week_start));

  // Fit over the rounded weekly factors; a single point falls back to itself.
  let factors: Vec<f64> = points.iter().map(|p| p.efficiency_factor).collect();
  match least_squares(&factors) {
    Some((slope, intercept)) => {
      for (i, point) in points.iter_mut().enumerate() {
        point.trendline = round1(intercept + slope * i as f64);
      }
    }
    None => {
      for point in points.iter_mut() {
        point.trendline = point.efficiency_factor;
      }
    }
  }

  log::debug!(
    "fitness trend: {} weekly points from {} rides",
    points.len(),
    points.iter().map(|p| p.ride_count).sum::<u32>()
  );

  points
}

/// Ordinary least-squares fit of `values` against their indices 0, 1, 2, ...
/// Returns (slope, intercept), or `None` for fewer than two points.
pub fn least_squares(values: &[f64]) -> Option<(f64, f64)> {
  let n = values.len();
  if n < 2 {
    return None;
  }

  let n = n as f64;
  let mut sum_x = 0.0;
  let mut sum_y = 0.0;
  let mut sum_xy = 0.0;
  let mut sum_x2 = 0.0;
  for (i, y) in values.iter().enumerate() {
    let x = i as f64;
    sum_x += x;
    sum_y += y;
    sum_xy += x * y;
    sum_x2 += x * x;
  }

  let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
  let intercept = (sum_y - slope * sum_x) / n;
  Some((slope, intercept))
}

fn mean(values: &[f64]) -> Option<f64> {
  if values.is_empty() {
    None
  } else {
    Some(values.iter().sum::<f64>() / values.len() as f64)
  }
}

fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;
  use crate::test_utils::{datetime, mock_activity};
  use chrono::{DateTime, Utc};

  fn ride(start: DateTime<Utc>, watts: Option<f64>, hr: Option<f64>) -> Activity {
    let mut a = mock_activity("Ride", start);
    a.average_watts = watts;
    a.average_heartrate = hr;
    a
  }

  #[test]
  fn test_efficiency_factor_requires_power_and_hr() {
    let start = datetime(2025, 1, 6, 8, 0, 0);

    assert_eq!(efficiency_factor(&ride(start, Some(200.0), Some(100.0))), Some(2.0));
    assert_eq!(efficiency_factor(&ride(start, None, Some(100.0))), None);
    assert_eq!(efficiency_factor(&ride(start, Some(200.0), None)), None);
  }

  #[test]
  fn test_efficiency_factor_rejects_noise_floor_hr() {
    let start = datetime(2025, 1, 6, 8, 0, 0);

    assert_eq!(efficiency_factor(&ride(start, Some(200.0), Some(40.0))), None);
    // Exactly 50 bpm is credible
    assert_eq!(efficiency_factor(&ride(start, Some(200.0), Some(50.0))), Some(4.0));
  }

  #[test]
  fn test_efficiency_factor_prefers_weighted_power() {
    let mut a = ride(datetime(2025, 1, 6, 8, 0, 0), Some(180.0), Some(120.0));
    a.weighted_average_watts = Some(192.0);

    assert_approx_eq!(efficiency_factor(&a).unwrap(), 1.6, 1e-9);
  }

  #[test]
  fn test_weekly_average_skips_noise_floor_rides() {
    // Two rides the same week: one at 40 bpm (excluded), one at 100 bpm.
    // The weekly factor uses only the second ride: 200/100 = 2.0.
    let activities = vec![
      ride(datetime(2025, 1, 6, 8, 0, 0), Some(200.0), Some(40.0)),
      ride(datetime(2025, 1, 8, 8, 0, 0), Some(200.0), Some(100.0)),
    ];

    let points = fitness_trend(&activities);

    assert_eq!(points.len(), 1);
    assert_approx_eq!(points[0].efficiency_factor, 2.0, 1e-9);
    // Both rides still count toward the week and its power/HR means
    assert_eq!(points[0].ride_count, 2);
    assert_approx_eq!(points[0].avg_power, 200.0, 1e-9);
    assert_approx_eq!(points[0].avg_hr, 70.0, 1e-9);
  }

  #[test]
  fn test_rides_without_telemetry_never_reach_a_week() {
    let activities = vec![
      ride(datetime(2025, 1, 6, 8, 0, 0), None, Some(140.0)),
      ride(datetime(2025, 1, 7, 8, 0, 0), Some(180.0), None),
      mock_activity("Run", datetime(2025, 1, 8, 8, 0, 0)),
    ];

    assert!(fitness_trend(&activities).is_empty());
  }

  #[test]
  fn test_cutoff_excludes_older_rides() {
    let activities = vec![
      // November 2024: before the cutoff
      ride(datetime(2024, 11, 25, 8, 0, 0), Some(200.0), Some(100.0)),
      // Exactly at the cutoff instant: included
      ride(datetime(2024, 12, 1, 0, 0, 0), Some(210.0), Some(100.0)),
    ];

    let points = fitness_trend(&activities);

    assert_eq!(points.len(), 1);
    assert_approx_eq!(points[0].efficiency_factor, 2.1, 1e-9);
  }

  #[test]
  fn test_two_point_trendline_passes_through_both() {
    // Week factors 5.0 and 7.0 -> slope 2.0, intercept 5.0
    let activities = vec![
      ride(datetime(2025, 1, 6, 8, 0, 0), Some(500.0), Some(100.0)),
      ride(datetime(2025, 1, 13, 8, 0, 0), Some(700.0), Some(100.0)),
    ];

    let points = fitness_trend(&activities);

    assert_eq!(points.len(), 2);
    assert_approx_eq!(points[0].trendline, 5.0, 1e-9);
    assert_approx_eq!(points[1].trendline, 7.0, 1e-9);
  }

  #[test]
  fn test_single_point_trendline_is_the_raw_value() {
    let activities = vec![ride(datetime(2025, 1, 6, 8, 0, 0), Some(430.0), Some(100.0))];

    let points = fitness_trend(&activities);

    assert_eq!(points.len(), 1);
    assert_approx_eq!(points[0].efficiency_factor, 4.3, 1e-9);
    assert_approx_eq!(points[0].trendline, 4.3, 1e-9);
  }

  #[test]
  fn test_points_are_chronological_with_labels() {
    let activities = vec![
      ride(datetime(2025, 1, 13, 8, 0, 0), Some(200.0), Some(100.0)),
      ride(datetime(2025, 1, 6, 8, 0, 0), Some(180.0), Some(100.0)),
    ];

    let points = fitness_trend(&activities);

    assert_eq!(points[0].week_key, "2025-W02");
    assert_eq!(points[1].week_key, "2025-W03");
    assert_eq!(points[0].week_label, "01/06/2025–01/12/2025");
    assert_eq!(points[0].week_end, points[0].week_start + Duration::days(6));
  }

  #[test]
  fn test_least_squares_known_fit() {
    let (slope, intercept) = least_squares(&[5.0, 7.0]).unwrap();
    assert_approx_eq!(slope, 2.0, 1e-9);
    assert_approx_eq!(intercept, 5.0, 1e-9);

    // Perfectly linear series: y = 1 + 0.5x
    let (slope, intercept) = least_squares(&[1.0, 1.5, 2.0, 2.5]).unwrap();
    assert_approx_eq!(slope, 0.5, 1e-9);
    assert_approx_eq!(intercept, 1.0, 1e-9);

    assert!(least_squares(&[4.3]).is_none());
    assert!(least_squares(&[]).is_none());
  }

  #[test]
  fn test_rounding_one_decimal_and_integers() {
    // 187/121 = 1.545... -> 1.5; power 187 -> 187, hr 121 -> 121
    let activities = vec![ride(datetime(2025, 1, 6, 8, 0, 0), Some(187.0), Some(121.0))];

    let points = fitness_trend(&activities);

    assert_approx_eq!(points[0].efficiency_factor, 1.5, 1e-9);
    assert_eq!(points[0].avg_power, 187.0);
    assert_eq!(points[0].avg_hr, 121.0);
  }
}
