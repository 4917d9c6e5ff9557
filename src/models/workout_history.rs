use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::planned_workout::{RepSpec, WeightUnit};

/// A logged set, as read from the workout history store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEntry {
    pub date: NaiveDate,
    pub exercise: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub reps: Option<RepSpec>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl HistoricalEntry {
    pub fn new(date: NaiveDate, exercise: impl Into<String>, weight: f64, reps: RepSpec) -> Self {
        Self {
            date,
            exercise: exercise.into(),
            weight: Some(weight),
            weight_unit: WeightUnit::Lbs,
            reps: Some(reps),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Weight and reps when both are present and non-zero
    pub fn usable_set(&self) -> Option<(f64, RepSpec)> {
        match (self.weight, self.reps) {
            (Some(weight), Some(reps)) if weight != 0.0 && reps.base_reps() != 0 => {
                Some((weight, reps))
            }
            _ => None,
        }
    }
}

/// Best-estimate point for one calendar date of logged history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    pub date: NaiveDate,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub reps: RepSpec,
    pub estimated_1rm: f64,
    pub comment: Option<String>,
}

/// Best-estimate point for one planned session, placed on a projected date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingProgressionPoint {
    pub session: u32,
    pub projected_date: NaiveDate,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub reps: RepSpec,
    pub estimated_1rm: f64,
    pub comment: Option<String>,
}

/// Projection of one exercise's estimated strength over time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionReport {
    pub exercise: String,
    pub historical: Vec<ProgressionPoint>,
    pub upcoming: Vec<UpcomingProgressionPoint>,
    /// Trailing moving average over `historical`, aligned index by index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_moving_average: Option<Vec<Option<f64>>>,
}

/// Current estimated maxima for the three main lifts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentMaxima {
    pub squat: Option<f64>,
    pub bench: Option<f64>,
    pub deadlift: Option<f64>,
}
