// Weight notation resolution: absolute, percentage-of-max and linear progression

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::errors::{MaximumKind, MissingMaximum, ParseError, ParseResult};
use crate::models::WeightUnit;

/// Pounds per kilogram
pub const KG_TO_LBS: f64 = 2.20462;

static ABSOLUTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(lbs?|kgs?)$").expect("absolute weight pattern is valid")
});

static PERCENTAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*%$").expect("percentage pattern is valid")
});

static PROGRESSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^progress:\s*lp\(\s*(\d+(?:\.\d+)?)\s*(lbs?|kgs?)\s*\)$")
        .expect("progression pattern is valid")
});

/// Convert a value in `unit` to pounds
pub fn to_pounds(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Lbs => value,
        WeightUnit::Kg => value * KG_TO_LBS,
    }
}

/// Round to the nearest multiple of 5; exact halves go to the even multiple.
///
/// `round_to_5(142.5) == 140.0`, `round_to_5(147.5) == 150.0`
pub fn round_to_5(weight: f64) -> f64 {
    (weight / 5.0).round_ties_even() * 5.0
}

/// Plate-constrained rounding used by the periodization generator: nearest 5,
/// then 5 less when the result lands on a multiple of 10 (no 2.5 plates).
pub fn round_to_available_plates(weight: f64) -> f64 {
    let rounded = round_to_5(weight);
    if rounded > 0.0 && rounded % 10.0 == 0.0 {
        rounded - 5.0
    } else {
        rounded
    }
}

/// Weight notation attached to a set specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadToken {
    /// `135lb`, `60kg`
    Absolute { value: f64, unit: WeightUnit },
    /// `65%` of the exercise's declared 1RM
    Percentage(f64),
    /// `progress: lp(5lb)`, added once per completed cycle to the starting weight
    LinearProgression { increment: f64, unit: WeightUnit },
}

impl LoadToken {
    /// Parse a weight token; `None` if it matches none of the notations
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();

        if let Some(caps) = ABSOLUTE_PATTERN.captures(token) {
            return Some(LoadToken::Absolute {
                value: caps[1].parse().ok()?,
                unit: WeightUnit::from_suffix(&caps[2])?,
            });
        }

        if let Some(caps) = PERCENTAGE_PATTERN.captures(token) {
            return Some(LoadToken::Percentage(caps[1].parse().ok()?));
        }

        if let Some(caps) = PROGRESSION_PATTERN.captures(token) {
            return Some(LoadToken::LinearProgression {
                increment: caps[1].parse().ok()?,
                unit: WeightUnit::from_suffix(&caps[2])?,
            });
        }

        None
    }

    /// Header comment this token depends on, if any
    pub fn required_maximum(&self) -> Option<MaximumKind> {
        match self {
            LoadToken::Absolute { .. } => None,
            LoadToken::Percentage(_) => Some(MaximumKind::OneRepMax),
            LoadToken::LinearProgression { .. } => Some(MaximumKind::StartingWeight),
        }
    }

    /// Resolve to a rounded weight in pounds for the given cycle
    pub fn resolve(
        &self,
        exercise: &str,
        maxima: &RequiredMaxima,
        cycle_index: u32,
    ) -> ParseResult<f64> {
        let weight = match *self {
            LoadToken::Absolute { value, unit } => to_pounds(value, unit),
            LoadToken::Percentage(pct) => {
                let one_rm = maxima.require(exercise, MaximumKind::OneRepMax)?;
                one_rm * (pct / 100.0)
            }
            LoadToken::LinearProgression { increment, unit } => {
                let starting = maxima.require(exercise, MaximumKind::StartingWeight)?;
                starting + to_pounds(increment, unit) * f64::from(cycle_index)
            }
        };

        Ok(round_to_5(weight))
    }
}

/// Base values declared in a script's header comments, in pounds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequiredMaxima {
    one_rep_max: HashMap<String, f64>,
    starting_weight: HashMap<String, f64>,
}

impl RequiredMaxima {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declared value, replacing an earlier declaration
    pub fn insert(&mut self, exercise: impl Into<String>, kind: MaximumKind, pounds: f64) {
        let table = match kind {
            MaximumKind::OneRepMax => &mut self.one_rep_max,
            MaximumKind::StartingWeight => &mut self.starting_weight,
        };
        table.insert(exercise.into(), pounds);
    }

    pub fn get(&self, exercise: &str, kind: MaximumKind) -> Option<f64> {
        match kind {
            MaximumKind::OneRepMax => self.one_rep_max.get(exercise).copied(),
            MaximumKind::StartingWeight => self.starting_weight.get(exercise).copied(),
        }
    }

    pub fn contains(&self, exercise: &str, kind: MaximumKind) -> bool {
        self.get(exercise, kind).is_some()
    }

    fn require(&self, exercise: &str, kind: MaximumKind) -> ParseResult<f64> {
        self.get(exercise, kind)
            .ok_or_else(|| ParseError::MissingRequiredComment {
                missing: vec![MissingMaximum {
                    exercise: exercise.to_string(),
                    kind,
                }],
            })
    }
}
