//! Goal registry
//!
//! Static per-discipline weekly targets: a session count plus a qualifying
//! per-activity average the week must also meet. The threshold unit follows
//! the discipline's average-per-activity measure: minutes for cycling,
//! meters for swimming, miles for running.

use serde::{Deserialize, Serialize};
use std::env;

use crate::discipline::Discipline;

/// ---------------------------------------------------------------------------
/// Environment variable names (optional overrides)
/// ---------------------------------------------------------------------------

const ENV_PREFIX: &str = "TRAINING_GOAL";

/// ---------------------------------------------------------------------------
/// Types
/// ---------------------------------------------------------------------------

/// Weekly target for one discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
  /// Sessions per calendar week
  pub weekly_count: u32,
  /// Qualifying average-per-activity threshold (minutes, meters, or miles)
  pub min_avg_per_activity: f64,
  /// Human-readable target shown next to the weekly table
  pub target_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRegistry {
  pub cycling: Goal,
  pub swimming: Goal,
  pub running: Goal,
}

#[derive(Debug, thiserror::Error)]
pub enum GoalConfigError {
  #[error("Invalid value for {var}: {value}")]
  Invalid { var: String, value: String },
}

/// ---------------------------------------------------------------------------
/// Registry
/// ---------------------------------------------------------------------------

impl Default for GoalRegistry {
  fn default() -> Self {
    Self::standard()
  }
}

impl GoalRegistry {
  /// The built-in targets.
  pub fn standard() -> Self {
    Self {
      cycling: Goal {
        weekly_count: 4,
        min_avg_per_activity: 50.0,
        target_label: "4 rides, ~1hr each".to_string(),
      },
      swimming: Goal {
        weekly_count: 3,
        min_avg_per_activity: 800.0,
        target_label: "3 swims, ~1000m each".to_string(),
      },
      running: Goal {
        weekly_count: 3,
        min_avg_per_activity: 2.5,
        target_label: "3 runs, ~3mi each".to_string(),
      },
    }
  }

  /// Standard targets with optional environment overrides:
  /// `TRAINING_GOAL_<DISCIPLINE>_COUNT` and `TRAINING_GOAL_<DISCIPLINE>_MIN_AVG`.
  /// Missing variables keep the defaults; unparseable values are an error.
  pub fn from_env() -> Result<Self, GoalConfigError> {
    dotenvy::dotenv().ok();

    let mut registry = Self::standard();
    for discipline in Discipline::ALL {
      let prefix = discipline.as_str().to_uppercase();

      if let Some(count) = read_var(&format!("{}_{}_COUNT", ENV_PREFIX, prefix))? {
        registry.goal_mut(discipline).weekly_count = count;
      }
      if let Some(min_avg) = read_var(&format!("{}_{}_MIN_AVG", ENV_PREFIX, prefix))? {
        registry.goal_mut(discipline).min_avg_per_activity = min_avg;
      }
    }
    Ok(registry)
  }

  pub fn goal(&self, discipline: Discipline) -> &Goal {
    match discipline {
      Discipline::Cycling => &self.cycling,
      Discipline::Swimming => &self.swimming,
      Discipline::Running => &self.running,
    }
  }

  fn goal_mut(&mut self, discipline: Discipline) -> &mut Goal {
    match discipline {
      Discipline::Cycling => &mut self.cycling,
      Discipline::Swimming => &mut self.swimming,
      Discipline::Running => &mut self.running,
    }
  }
}

fn read_var<T: std::str::FromStr>(var: &str) -> Result<Option<T>, GoalConfigError> {
  match env::var(var) {
    Ok(value) => value
      .trim()
      .parse::<T>()
      .map(Some)
      .map_err(|_| GoalConfigError::Invalid {
        var: var.to_string(),
        value,
      }),
    Err(_) => Ok(None),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
