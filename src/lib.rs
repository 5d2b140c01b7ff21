//! Training-consistency and fitness-trend metrics over an activity history.
//!
//! Data flows one way: the raw activity list is classified into disciplines,
//! then read by the weekly summary aggregator, the fitness trend calculator,
//! and the distance aggregator, with the goal registry as configuration. No
//! component mutates another's output.
//!
//! Everything here is a pure, synchronous computation over in-memory data.
//! Fetching activities, storing the training calendar, and rendering pages
//! belong to the surrounding application; this crate takes already-fetched
//! records and returns plain serializable structures.

pub mod calendar;
pub mod discipline;
pub mod distance;
pub mod fitness;
pub mod goals;
pub mod models;
pub mod summary;

#[cfg(test)]
pub mod test_utils;

pub use discipline::{classify, filter_by, Discipline, DistanceUnit};
pub use distance::{total_distances, DistanceTotals, MoonProgress, MOON_DISTANCE_M};
pub use fitness::{efficiency_factor, fitness_trend, least_squares, FitnessDataPoint};
pub use goals::{Goal, GoalConfigError, GoalRegistry};
pub use models::Activity;
pub use summary::{weekly_summaries, WeekSummary};
