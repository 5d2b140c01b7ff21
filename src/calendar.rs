//! Calendar-week indexing
//!
//! ISO-8601 week numbering: weeks run Monday through Sunday, and week 1 is
//! the week containing the year's first Thursday. Late-December and
//! early-January dates take their ISO year from the Thursday of their own
//! week, not the calendar year.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// ISO week key for grouping, e.g. "2024-W42".
pub fn week_key(date: DateTime<Utc>) -> String {
  let day = date.date_naive();

  // Shift to the Thursday of this week; its year is the ISO year.
  // Sunday counts as day 7.
  let weekday: i64 = match day.weekday().num_days_from_sunday() {
    0 => 7,
    d => d as i64,
  };
  let thursday = day + Duration::days(4 - weekday);

  // Week number = ceil(day-of-ISO-year / 7)
  let week = (thursday.ordinal() as i64 + 6) / 7;

  format!("{}-W{:02}", thursday.year(), week)
}

/// The Monday beginning the ISO week containing `date`.
pub fn week_start(date: DateTime<Utc>) -> NaiveDate {
  monday_of(date.date_naive())
}

/// Monday of the week containing `day`. Sundays map back to the preceding
/// Monday.
pub fn monday_of(day: NaiveDate) -> NaiveDate {
  day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// The 14-day planning window starting from a Monday: Monday of week one
/// through Sunday of week two.
pub fn biweekly_days(start_monday: NaiveDate) -> Vec<NaiveDate> {
  (0..14).map(|i| start_monday + Duration::days(i)).collect()
}

/// Date key in YYYY-MM-DD form, used to address calendar days.
pub fn date_key(day: NaiveDate) -> String {
  day.format("%Y-%m-%d").to_string()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
