// Estimated one-rep maximum

use tracing::warn;

use crate::models::{CurrentMaxima, HistoricalEntry, RepSpec};

/// Main lifts tracked for current maxima
pub const SQUAT: &str = "Barbell Squat";
pub const BENCH_PRESS: &str = "Flat Barbell Bench Press";
pub const DEADLIFT: &str = "Deadlift";
pub const MAIN_LIFTS: [&str; 3] = [BENCH_PRESS, SQUAT, DEADLIFT];

/// Logged sets considered when estimating a current maximum
const RECENT_ENTRY_WINDOW: usize = 10;

const REP_COEFFICIENT: f64 = 0.033;

/// Estimated 1RM: `weight * (1 + 0.033 * reps)`, rounded to one decimal.
/// AMRAP and range sets use their base rep count. Non-finite weights give 0.
pub fn estimate_one_rep_max(weight: f64, reps: RepSpec) -> f64 {
    if !weight.is_finite() {
        return 0.0;
    }

    let reps = f64::from(reps.base_reps());
    round_to_tenth((REP_COEFFICIENT * reps * weight) + weight)
}

/// Lenient variant for raw text fields: anything that does not parse as a
/// number (weight) or rep spec (reps) yields 0 rather than an error.
///
/// `estimate_from_text("100", "5+") == 116.5`, `estimate_from_text("bad", "x") == 0.0`
pub fn estimate_from_text(weight: &str, reps: &str) -> f64 {
    match (weight.trim().parse::<f64>(), reps.parse::<RepSpec>()) {
        (Ok(weight), Ok(reps)) => estimate_one_rep_max(weight, reps),
        _ => {
            warn!(weight, reps, "Unparsable weight or reps, estimating 0");
            0.0
        }
    }
}

/// Estimate for optional record fields; a missing field yields 0
pub fn estimate_optional(weight: Option<f64>, reps: Option<RepSpec>) -> f64 {
    match (weight, reps) {
        (Some(weight), Some(reps)) => estimate_one_rep_max(weight, reps),
        _ => 0.0,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Best estimated 1RM over the most recent usable sets of `exercise`
pub fn latest_estimated_max(history: &[HistoricalEntry], exercise: &str) -> Option<f64> {
    let mut usable: Vec<&HistoricalEntry> = history
        .iter()
        .filter(|entry| entry.exercise == exercise && entry.usable_set().is_some())
        .collect();
    usable.sort_by_key(|entry| entry.date);

    let recent = &usable[usable.len().saturating_sub(RECENT_ENTRY_WINDOW)..];
    let best = recent
        .iter()
        .map(|entry| estimate_optional(entry.weight, entry.reps))
        .fold(0.0, f64::max);

    (best > 0.0).then_some(best)
}

/// Current estimated maxima for squat, bench press and deadlift
pub fn current_maxima(history: &[HistoricalEntry]) -> CurrentMaxima {
    CurrentMaxima {
        squat: latest_estimated_max(history, SQUAT),
        bench: latest_estimated_max(history, BENCH_PRESS),
        deadlift: latest_estimated_max(history, DEADLIFT),
    }
}
