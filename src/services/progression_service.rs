use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::estimation::{estimate_one_rep_max, MAIN_LIFTS};
use crate::models::{
    HistoricalEntry, PlannedEntry, ProgressionPoint, ProgressionReport, UpcomingProgressionPoint,
};

/// Projection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Calendar days between consecutive planned sessions
    pub days_between_sessions: i64,
    /// Trailing window for the historical moving average; `None` skips it
    pub moving_average_window: Option<usize>,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            days_between_sessions: 2,
            moving_average_window: None,
        }
    }
}

/// Merges logged history and planned sessions into one estimated-strength
/// timeline per exercise. Holds nothing but its options.
#[derive(Debug, Clone, Default)]
pub struct ProgressionService {
    options: ProjectionOptions,
}

impl ProgressionService {
    pub fn new(options: ProjectionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ProjectionOptions {
        self.options
    }

    /// Project `exercise` over its history and the full planned schedule.
    ///
    /// `upcoming` must contain every planned session of every exercise: the
    /// session calendar is built from all of them so a session lands on the
    /// same date whichever exercise is being viewed. `today` anchors the
    /// calendar when there is no history.
    pub fn project(
        &self,
        exercise: &str,
        historical: &[HistoricalEntry],
        upcoming: &[PlannedEntry],
        today: NaiveDate,
    ) -> ProgressionReport {
        let historical_points = best_per_date(exercise, historical);

        let start = historical_points
            .last()
            .map(|point| point.date + Duration::days(self.options.days_between_sessions))
            .unwrap_or(today);
        let calendar = session_calendar(upcoming, start, self.options.days_between_sessions);
        let upcoming_points = best_per_session(exercise, upcoming, &calendar);

        let historical_moving_average = self.options.moving_average_window.map(|window| {
            let values: Vec<Option<f64>> = historical_points
                .iter()
                .map(|point| Some(point.estimated_1rm))
                .collect();
            moving_average(&values, window)
        });

        info!(
            exercise,
            historical = historical_points.len(),
            upcoming = upcoming_points.len(),
            "Projected progression"
        );

        ProgressionReport {
            exercise: exercise.to_string(),
            historical: historical_points,
            upcoming: upcoming_points,
            historical_moving_average,
        }
    }

    /// Projection for squat, bench press and deadlift, keyed by exercise name
    pub fn project_main_lifts(
        &self,
        historical: &[HistoricalEntry],
        upcoming: &[PlannedEntry],
        today: NaiveDate,
    ) -> BTreeMap<String, ProgressionReport> {
        MAIN_LIFTS
            .iter()
            .map(|lift| {
                (
                    lift.to_string(),
                    self.project(lift, historical, upcoming, today),
                )
            })
            .collect()
    }
}

/// Best logged set per date for `exercise`, ascending by date. Ties keep the
/// first entry seen.
pub fn best_per_date(exercise: &str, historical: &[HistoricalEntry]) -> Vec<ProgressionPoint> {
    let mut by_date: BTreeMap<NaiveDate, ProgressionPoint> = BTreeMap::new();

    for entry in historical.iter().filter(|entry| entry.exercise == exercise) {
        let Some((weight, reps)) = entry.usable_set() else {
            continue;
        };
        let estimated_1rm = estimate_one_rep_max(weight, reps);

        let replace = match by_date.get(&entry.date) {
            Some(best) => estimated_1rm > best.estimated_1rm,
            None => true,
        };
        if replace {
            by_date.insert(
                entry.date,
                ProgressionPoint {
                    date: entry.date,
                    weight,
                    weight_unit: entry.weight_unit,
                    reps,
                    estimated_1rm,
                    comment: entry.comment.clone(),
                },
            );
        }
    }

    by_date.into_values().collect()
}

/// Assign a date to every planned session, in session order: the first gets
/// `start`, each following one `days_between` days later.
pub fn session_calendar(
    upcoming: &[PlannedEntry],
    start: NaiveDate,
    days_between: i64,
) -> BTreeMap<u32, NaiveDate> {
    let mut sessions: Vec<u32> = upcoming.iter().map(|entry| entry.session).collect();
    sessions.sort_unstable();
    sessions.dedup();

    let mut date = start;
    let mut calendar = BTreeMap::new();
    for session in sessions {
        calendar.insert(session, date);
        date += Duration::days(days_between);
    }

    debug!(sessions = calendar.len(), %start, "Built session calendar");
    calendar
}

/// Best planned set per session for `exercise`. Sets missing a non-zero
/// weight or rep count are ignored; sessions left without one are omitted.
pub fn best_per_session(
    exercise: &str,
    upcoming: &[PlannedEntry],
    calendar: &BTreeMap<u32, NaiveDate>,
) -> Vec<UpcomingProgressionPoint> {
    let mut by_session: BTreeMap<u32, UpcomingProgressionPoint> = BTreeMap::new();

    for entry in upcoming.iter().filter(|entry| entry.exercise == exercise) {
        let Some((weight, reps)) = entry.usable_set() else {
            continue;
        };
        let Some(&projected_date) = calendar.get(&entry.session) else {
            continue;
        };

        let estimated_1rm = estimate_one_rep_max(weight, reps);
        let best_so_far = by_session
            .get(&entry.session)
            .map_or(0.0, |best| best.estimated_1rm);
        if estimated_1rm > best_so_far {
            by_session.insert(
                entry.session,
                UpcomingProgressionPoint {
                    session: entry.session,
                    projected_date,
                    weight,
                    weight_unit: entry.weight_unit,
                    reps,
                    estimated_1rm,
                    comment: entry.comment.clone(),
                },
            );
        }
    }

    by_session.into_values().collect()
}

/// Trailing moving average, rounded to two decimals. Missing values stay
/// missing and are left out of their neighbours' windows.
pub fn moving_average(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            (*value)?;
            let start = (i + 1).saturating_sub(window);
            let present: Vec<f64> = values[start..=i].iter().flatten().copied().collect();
            if present.is_empty() {
                return None;
            }
            let mean = present.iter().sum::<f64>() / present.len() as f64;
            Some((mean * 100.0).round() / 100.0)
        })
        .collect()
}

/// `count` dates spaced `days_between` apart, the first one `days_between`
/// after `start`
pub fn project_future_dates(start: NaiveDate, count: usize, days_between: i64) -> Vec<NaiveDate> {
    (1..=count as i64)
        .map(|step| start + Duration::days(days_between * step))
        .collect()
}
