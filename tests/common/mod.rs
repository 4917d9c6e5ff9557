// Shared fixtures for unit and integration tests

use chrono::NaiveDate;
use liftlog::models::{HistoricalEntry, PlannedEntry, RepSpec};
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Route core tracing output through the test writer; honours `RUST_LOG`
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Script fixtures
pub struct Scripts;

impl Scripts {
    pub const BENCH_PERCENTAGES: &'static str = "\
// Flat Barbell Bench Press 1RM: 200lb
## Day 1
Barbell Squat / 3x5 135lb
Flat Barbell Bench Press / 3x5 75%
Pull Ups / 3x10+
";

    pub const SQUAT_LINEAR_KG: &'static str = "\
// Barbell Squat SW: 60kg
## Day 1
Barbell Squat / 3x5 progress: lp(2.5kg)
";

    pub const TWO_DAY_SPLIT: &'static str = "\
// Deadlift 1RM: 300lb
// Overhead Press SW: 95lb
## Upper
Overhead Press / 5x5 progress: lp(5lb)
Dumbbell Row / 3x8-12
## Lower
Deadlift / 1x5 65%, 1x5 75%, 1x5+ 85%
Front Squat / 3x8 135lb
";
}

/// Record builders
pub struct MockDataGenerator;

impl MockDataGenerator {
    pub fn history(exercise: &str, sets: &[(NaiveDate, f64, u32)]) -> Vec<HistoricalEntry> {
        sets.iter()
            .map(|&(date, weight, reps)| {
                HistoricalEntry::new(date, exercise, weight, RepSpec::Fixed(reps))
            })
            .collect()
    }

    pub fn planned(session: u32, exercise: &str, weight: f64, reps: RepSpec) -> PlannedEntry {
        PlannedEntry::new(session, exercise, "Other")
            .with_weight(weight)
            .with_reps(reps)
    }
}
