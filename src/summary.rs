//! Weekly summary aggregation
//!
//! Groups a discipline's activities into calendar weeks and measures each
//! week against that discipline's goal. Weeks with no qualifying activity are
//! never materialized; the output carries only the weeks that happened.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::discipline::{self, Discipline, DistanceUnit};
use crate::distance::METERS_PER_MILE;
use crate::goals::GoalRegistry;
use crate::models::Activity;

/// One calendar week of training in a single discipline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekSummary {
  /// ISO week key, unique within a discipline's summary set
  pub week_key: String,
  /// The Monday beginning the week
  pub week_start: NaiveDate,
  pub count: u32,
  /// Meters
  pub total_distance_m: f64,
  pub total_minutes: f64,
  /// Discipline-specific: minutes (cycling), meters (swimming), miles (running)
  pub avg_per_activity: f64,
  pub goal_count: u32,
  /// count >= goal count AND avg_per_activity >= the qualifying threshold
  pub goal_met: bool,
  pub distance_unit: DistanceUnit,
}

struct WeekBucket<'a> {
  week_start: NaiveDate,
  activities: Vec<&'a Activity>,
}

/// Weekly summaries for one discipline, most recent week first.
pub fn weekly_summaries(
  activities: &[Activity],
  discipline: Discipline,
  goals: &GoalRegistry,
) -> Vec<WeekSummary> {
  let filtered = discipline::filter_by(activities, discipline);
  let goal = goals.goal(discipline);

  let mut by_week: HashMap<String, WeekBucket> = HashMap::new();
  for activity in filtered {
    by_week
      .entry(calendar::week_key(activity.start_date))
      .or_insert_with(|| WeekBucket {
        week_start: calendar::week_start(activity.start_date),
        activities: Vec::new(),
      })
      .activities
      .push(activity);
  }

  let mut summaries: Vec<WeekSummary> = by_week
    .into_iter()
    .map(|(week_key, bucket)| {
      let count = bucket.activities.len() as u32;
      let total_distance_m: f64 = bucket.activities.iter().map(|a| a.distance).sum();
      let total_minutes: f64 = bucket
        .activities
        .iter()
        .map(|a| a.moving_time / 60.0)
        .sum();

      let avg_per_activity = match discipline {
        Discipline::Cycling => total_minutes / count as f64,
        Discipline::Swimming => total_distance_m / count as f64,
        Discipline::Running => total_distance_m / METERS_PER_MILE / count as f64,
      };

      let goal_met =
        count >= goal.weekly_count && avg_per_activity >= goal.min_avg_per_activity;

      WeekSummary {
        week_key,
        week_start: bucket.week_start,
        count,
        total_distance_m,
        total_minutes,
        avg_per_activity,
        goal_count: goal.weekly_count,
        goal_met,
        distance_unit: discipline.distance_unit(),
      }
    })
    .collect();

  // Map iteration order is incidental; the output order is imposed here.
  summaries.sort_by(|a, b| b.week_start.cmp(&a.week_start));

  log::debug!(
    "{}: {} weekly summaries from {} activities",
    discipline,
    summaries.len(),
    summaries.iter().map(|s| s.count).sum::<u32>()
  );

  summaries
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
