use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unit a weight is expressed in. Parsed and generated entries are always pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "lbs", alias = "lb")]
    Lbs,
    #[serde(rename = "kg")]
    Kg,
}

impl WeightUnit {
    /// Parse a unit suffix as written in a program script (`lb`, `lbs`, `kg`)
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "lb" | "lbs" => Some(WeightUnit::Lbs),
            "kg" | "kgs" => Some(WeightUnit::Kg),
            _ => None,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Lbs => write!(f, "lbs"),
            WeightUnit::Kg => write!(f, "kg"),
        }
    }
}

/// Rep target of a single set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepSpec {
    /// Exactly `n` reps
    Fixed(u32),
    /// As many reps as possible, with `n` as the base target
    Amrap(u32),
    /// A rep window; the lower bound is used for estimation
    Range(u32, u32),
}

impl RepSpec {
    /// Rep count used by the 1RM estimator
    pub fn base_reps(&self) -> u32 {
        match *self {
            RepSpec::Fixed(n) | RepSpec::Amrap(n) => n,
            RepSpec::Range(low, _) => low,
        }
    }

    pub fn is_amrap(&self) -> bool {
        matches!(self, RepSpec::Amrap(_))
    }
}

impl fmt::Display for RepSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepSpec::Fixed(n) => write!(f, "{}", n),
            RepSpec::Amrap(n) => write!(f, "{}+", n),
            RepSpec::Range(low, high) => write!(f, "{}-{}", low, high),
        }
    }
}

impl FromStr for RepSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || format!("Invalid rep specification: {}", s);

        if let Some(base) = s.strip_suffix('+') {
            return base.trim().parse().map(RepSpec::Amrap).map_err(|_| invalid());
        }

        if let Some((low, high)) = s.split_once('-') {
            let low = low.trim().parse().map_err(|_| invalid())?;
            let high = high.trim().parse().map_err(|_| invalid())?;
            return Ok(RepSpec::Range(low, high));
        }

        s.parse().map(RepSpec::Fixed).map_err(|_| invalid())
    }
}

// Fixed reps serialize as a bare number, the other shapes as "5+" / "8-12"
impl Serialize for RepSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RepSpec::Fixed(n) => serializer.serialize_u32(*n),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RepSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawReps {
            Count(u32),
            Text(String),
        }

        match RawReps::deserialize(deserializer)? {
            RawReps::Count(n) => Ok(RepSpec::Fixed(n)),
            RawReps::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// One planned set produced by the program parser or the periodization generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedEntry {
    pub session: u32,
    pub exercise: String,
    pub category: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub reps: Option<RepSpec>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl PlannedEntry {
    pub fn new(session: u32, exercise: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            session,
            exercise: exercise.into(),
            category: category.into(),
            weight: None,
            weight_unit: WeightUnit::Lbs,
            reps: None,
            comment: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_reps(mut self, reps: RepSpec) -> Self {
        self.reps = Some(reps);
        self
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

/// Summary of a generated or parsed plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub count: usize,
    pub sessions: usize,
    pub session_range: Option<(u32, u32)>,
}

impl PlanSummary {
    pub fn message(&self) -> String {
        if self.count == 0 {
            return "No workouts generated".to_string();
        }
        format!(
            "Generated {} workouts across {} sessions",
            self.count, self.sessions
        )
    }
}

/// Summarize a sequence of planned entries
pub fn summarize(entries: &[PlannedEntry]) -> PlanSummary {
    let mut sessions: Vec<u32> = entries.iter().map(|e| e.session).collect();
    sessions.sort_unstable();
    sessions.dedup();

    PlanSummary {
        count: entries.len(),
        sessions: sessions.len(),
        session_range: sessions.first().copied().zip(sessions.last().copied()),
    }
}

/// Session number one past the highest already planned session
pub fn next_session(existing: &[PlannedEntry]) -> u32 {
    existing.iter().map(|e| e.session).max().map_or(1, |max| max + 1)
}
