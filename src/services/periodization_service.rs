// Table-driven 4-week percentage cycle (three training days per week)

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::estimation::{BENCH_PRESS, DEADLIFT, SQUAT};
use super::weight_resolver::round_to_available_plates;
use crate::models::{PlannedEntry, RepSpec};

pub const WEEKS_PER_CYCLE: u32 = 4;
pub const DAYS_PER_WEEK: u32 = 3;

/// (fraction of 1RM, reps) for the three work sets of each week
const WEEK_PERCENTAGES: [[(f64, u32); 3]; 4] = [
    [(0.65, 5), (0.75, 5), (0.85, 5)],
    [(0.70, 3), (0.80, 3), (0.90, 3)],
    [(0.75, 5), (0.85, 3), (0.95, 1)],
    // Deload
    [(0.40, 5), (0.50, 5), (0.60, 5)],
];

const DELOAD_WEEK: u32 = 4;
const BODYWEIGHT: &str = "Bodyweight";

/// 1RM added to each main lift per completed cycle
const SQUAT_INCREMENT: f64 = 10.0;
const BENCH_INCREMENT: f64 = 5.0;
const DEADLIFT_INCREMENT: f64 = 10.0;

struct Accessory {
    exercise: &'static str,
    category: &'static str,
    bodyweight: bool,
}

const fn accessory(exercise: &'static str, category: &'static str, bodyweight: bool) -> Accessory {
    Accessory {
        exercise,
        category,
        bodyweight,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrainingDay {
    Squat,
    Bench,
    Deadlift,
}

impl TrainingDay {
    const ALL: [TrainingDay; DAYS_PER_WEEK as usize] = [
        TrainingDay::Squat,
        TrainingDay::Bench,
        TrainingDay::Deadlift,
    ];

    fn main_lift(self) -> (&'static str, &'static str) {
        match self {
            TrainingDay::Squat => (SQUAT, "Legs"),
            TrainingDay::Bench => (BENCH_PRESS, "Push"),
            TrainingDay::Deadlift => (DEADLIFT, "Pull"),
        }
    }

    fn accessories(self) -> &'static [Accessory] {
        const SQUAT_DAY: [Accessory; 3] = [
            accessory("Pull Up", "Pull", true),
            accessory("Incline Dumbbell Press", "Push", false),
            accessory("Decline Crunch", "Core", false),
        ];
        const BENCH_DAY: [Accessory; 3] = [
            accessory("Front Squat", "Legs", false),
            accessory("Dumbbell Row", "Pull", false),
            accessory("Landmines", "Core", false),
        ];
        const DEADLIFT_DAY: [Accessory; 3] = [
            accessory("Parallel Bar Triceps Dip", "Push", true),
            accessory("Bulgarian Split Squat", "Legs", false),
            accessory("Cable side bend", "Core", false),
        ];

        match self {
            TrainingDay::Squat => &SQUAT_DAY,
            TrainingDay::Bench => &BENCH_DAY,
            TrainingDay::Deadlift => &DEADLIFT_DAY,
        }
    }
}

/// Starting 1RM estimates for the three main lifts, in pounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartingMaxima {
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
}

impl StartingMaxima {
    /// Maxima for the 0-based `cycle_index`, with the per-cycle overload applied
    pub fn for_cycle(&self, cycle_index: u32) -> Self {
        let cycle = f64::from(cycle_index);
        Self {
            squat: self.squat + SQUAT_INCREMENT * cycle,
            bench: self.bench + BENCH_INCREMENT * cycle,
            deadlift: self.deadlift + DEADLIFT_INCREMENT * cycle,
        }
    }

    fn for_day(&self, day: TrainingDay) -> f64 {
        match day {
            TrainingDay::Squat => self.squat,
            TrainingDay::Bench => self.bench,
            TrainingDay::Deadlift => self.deadlift,
        }
    }
}

/// Work sets for `week` (1-4) at the given 1RM. The last set of weeks 1-3 is
/// AMRAP; the deload week has none. Weeks outside 1-4 have no sets.
pub fn calculate_weights(one_rep_max: f64, week: u32) -> Vec<(f64, RepSpec)> {
    let Some(table) = week
        .checked_sub(1)
        .and_then(|index| WEEK_PERCENTAGES.get(index as usize))
    else {
        return Vec::new();
    };

    table
        .iter()
        .enumerate()
        .map(|(set_index, &(fraction, reps))| {
            let weight = round_to_available_plates(one_rep_max * fraction);
            let last_set = set_index == table.len() - 1;
            let reps = if last_set && week != DELOAD_WEEK {
                RepSpec::Amrap(reps)
            } else {
                RepSpec::Fixed(reps)
            };
            (weight, reps)
        })
        .collect()
}

fn week_label(week: u32) -> String {
    if week == DELOAD_WEEK {
        format!("Week {} Deload", week)
    } else {
        format!("Week {}", week)
    }
}

/// Generates the periodized plan. Stateless; every call starts from its
/// arguments alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodizationService;

impl PeriodizationService {
    pub fn new() -> Self {
        Self
    }

    /// Emit `num_cycles` 4-week cycles, numbering sessions from
    /// `starting_session`, one session per training day.
    pub fn generate(
        &self,
        num_cycles: u32,
        maxima: StartingMaxima,
        starting_session: u32,
    ) -> Vec<PlannedEntry> {
        let mut entries = Vec::new();
        let mut session = starting_session.max(1);

        for cycle_index in 0..num_cycles {
            let cycle_maxima = maxima.for_cycle(cycle_index);
            debug!(cycle = cycle_index, ?cycle_maxima, "Generating cycle");

            for week in 1..=WEEKS_PER_CYCLE {
                for day in TrainingDay::ALL {
                    entries.extend(training_day(session, week, day, &cycle_maxima));
                    session += 1;
                }
            }
        }

        info!(
            entries = entries.len(),
            cycles = num_cycles,
            first_session = starting_session,
            "Generated periodized plan"
        );
        entries
    }
}

/// Convenience wrapper around [`PeriodizationService::generate`]
pub fn generate(
    num_cycles: u32,
    squat_1rm: f64,
    bench_1rm: f64,
    deadlift_1rm: f64,
    starting_session: u32,
) -> Vec<PlannedEntry> {
    let maxima = StartingMaxima {
        squat: squat_1rm,
        bench: bench_1rm,
        deadlift: deadlift_1rm,
    };
    PeriodizationService::new().generate(num_cycles, maxima, starting_session)
}

fn training_day(
    session: u32,
    week: u32,
    day: TrainingDay,
    maxima: &StartingMaxima,
) -> Vec<PlannedEntry> {
    let (lift, category) = day.main_lift();
    let label = week_label(week);

    let main_sets = calculate_weights(maxima.for_day(day), week)
        .into_iter()
        .enumerate()
        .map(|(index, (weight, reps))| {
            PlannedEntry::new(session, lift, category)
                .with_weight(weight)
                .with_reps(reps)
                .with_comment(format!("{} - Set {}", label, index + 1))
        });

    let accessories = day.accessories().iter().map(|accessory| {
        let entry = PlannedEntry::new(session, accessory.exercise, accessory.category);
        if accessory.bodyweight {
            entry.with_weight(0.0).with_comment(BODYWEIGHT)
        } else {
            entry
        }
    });

    main_sets.chain(accessories).collect()
}
