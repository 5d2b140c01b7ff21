//! Discipline classification
//!
//! Maps a raw activity's free-text sport label onto one of the three tracked
//! disciplines. The predicates are independent substring checks, evaluated
//! per caller: a label that matches more than one rule shows up in each
//! matching filtered view. Downstream consumers rely on these independent
//! views, so this is deliberately not collapsed into a mutually exclusive
//! dispatch. `classify` exists for callers that want a single label and
//! applies cycling -> swimming -> running priority.

use serde::{Deserialize, Serialize};

use crate::models::Activity;

/// The three tracked training categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
  Cycling,
  Swimming,
  Running,
}

impl Discipline {
  pub const ALL: [Discipline; 3] = [
    Discipline::Cycling,
    Discipline::Swimming,
    Discipline::Running,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Discipline::Cycling => "cycling",
      Discipline::Swimming => "swimming",
      Discipline::Running => "running",
    }
  }

  /// Unit the dashboard displays this discipline's distances in.
  pub fn distance_unit(&self) -> DistanceUnit {
    match self {
      Discipline::Cycling => DistanceUnit::Km,
      Discipline::Swimming => DistanceUnit::Meters,
      Discipline::Running => DistanceUnit::Miles,
    }
  }
}

impl std::fmt::Display for Discipline {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Display unit for a discipline's distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
  #[serde(rename = "km")]
  Km,
  #[serde(rename = "m")]
  Meters,
  #[serde(rename = "miles")]
  Miles,
}

/// ---------------------------------------------------------------------------
/// Classification predicates (case-insensitive substring containment)
/// ---------------------------------------------------------------------------

pub fn is_cycling(activity: &Activity) -> bool {
  let kind = activity.kind().to_lowercase();
  kind.contains("ride") || kind.contains("bike") || kind.contains("velomobile")
}

pub fn is_swimming(activity: &Activity) -> bool {
  activity.kind().to_lowercase().contains("swim")
}

/// Walks and hikes count as runs, but only as exact labels.
pub fn is_running(activity: &Activity) -> bool {
  let kind = activity.kind().to_lowercase();
  kind.contains("run") || kind == "walk" || kind == "hike"
}

fn matches(activity: &Activity, discipline: Discipline) -> bool {
  match discipline {
    Discipline::Cycling => is_cycling(activity),
    Discipline::Swimming => is_swimming(activity),
    Discipline::Running => is_running(activity),
  }
}

/// Single-label classification, first match wins. `None` is a valid outcome:
/// the activity is excluded from every discipline aggregate.
pub fn classify(activity: &Activity) -> Option<Discipline> {
  Discipline::ALL.into_iter().find(|d| matches(activity, *d))
}

/// The independent per-discipline view the aggregators consume.
pub fn filter_by<'a>(activities: &'a [Activity], discipline: Discipline) -> Vec<&'a Activity> {
  activities
    .iter()
    .filter(|a| matches(a, discipline))
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
