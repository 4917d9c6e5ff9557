use std::fmt;
use thiserror::Error;

/// Which header comment an exercise is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaximumKind {
    /// `// <Exercise> 1RM: <N>(lb|kg)`, required by percentage loads
    OneRepMax,
    /// `// <Exercise> SW: <N>(lb|kg)`, required by linear progression
    StartingWeight,
}

impl fmt::Display for MaximumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaximumKind::OneRepMax => write!(f, "1RM"),
            MaximumKind::StartingWeight => write!(f, "SW"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMaximum {
    pub exercise: String,
    pub kind: MaximumKind,
}

impl fmt::Display for MissingMaximum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.exercise, self.kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Missing required comment(s): {}", join_missing(.missing))]
    MissingRequiredComment { missing: Vec<MissingMaximum> },
    #[error("Invalid sets/reps format in line: '{line}'")]
    InvalidSetSpec { line: String },
    #[error("Number of cycles must be at least 1")]
    InvalidCycleCount,
}

impl ParseError {
    /// Exercises named by a missing-comment error, in order of first use
    pub fn missing_exercises(&self) -> Vec<&str> {
        match self {
            ParseError::MissingRequiredComment { missing } => {
                missing.iter().map(|m| m.exercise.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn join_missing(missing: &[MissingMaximum]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type ParseResult<T> = Result<T, ParseError>;
