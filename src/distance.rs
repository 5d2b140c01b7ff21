//! Cumulative distance aggregation
//!
//! Lifetime meters per discipline plus the grand total, feeding the
//! progress-to-the-Moon display.

use serde::{Deserialize, Serialize};

use crate::discipline::{self, Discipline};
use crate::models::Activity;

pub const METERS_PER_MILE: f64 = 1609.34;

/// Distance from Earth to the Moon in meters
pub const MOON_DISTANCE_M: f64 = 384_400_000.0;

/// Summed distance in meters per discipline across the full activity set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceTotals {
  pub cycling: f64,
  pub swimming: f64,
  pub running: f64,
  pub total: f64,
}

/// Cumulative progress toward the Moon across all three disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonProgress {
  /// 0.0..=1.0, clamped once the Moon is reached
  pub fraction: f64,
  pub percent: f64,
  pub remaining_m: f64,
}

/// Pure fold over the activity list; no weekly bucketing.
pub fn total_distances(activities: &[Activity]) -> DistanceTotals {
  let sum_for = |d: Discipline| -> f64 {
    discipline::filter_by(activities, d)
      .iter()
      .map(|a| a.distance)
      .sum()
  };

  let cycling = sum_for(Discipline::Cycling);
  let swimming = sum_for(Discipline::Swimming);
  let running = sum_for(Discipline::Running);

  DistanceTotals {
    cycling,
    swimming,
    running,
    total: cycling + swimming + running,
  }
}

impl DistanceTotals {
  pub fn moon_progress(&self) -> MoonProgress {
    let fraction = (self.total / MOON_DISTANCE_M).min(1.0);
    MoonProgress {
      fraction,
      percent: fraction * 100.0,
      remaining_m: (MOON_DISTANCE_M - self.total).max(0.0),
    }
  }
}
