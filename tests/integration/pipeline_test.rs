use liftlog::models::{next_session, summarize, ExerciseCatalog, HistoricalEntry, PlannedEntry};
use liftlog::services::periodization_service::generate;
use liftlog::services::{estimation, presets, ProgramParser, ProgressionService};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

use crate::common::{date, init_test_logging, MockDataGenerator, Scripts};

/// Parse a script, then project two exercises against the full plan
#[test]
fn test_parse_then_project_shares_session_calendar() {
    init_test_logging();

    let plan = ProgramParser::new(ExerciseCatalog::builtin())
        .parse(Scripts::TWO_DAY_SPLIT, 2)
        .unwrap();
    let mut history = MockDataGenerator::history("Deadlift", &[(date(2024, 3, 1), 250.0, 5)]);
    history.extend(MockDataGenerator::history(
        "Overhead Press",
        &[(date(2024, 3, 1), 95.0, 5)],
    ));

    let service = ProgressionService::default();
    let today = date(2024, 6, 1);
    let deadlift = service.project("Deadlift", &history, &plan, today);
    let press = service.project("Overhead Press", &history, &plan, today);

    let press_dates: BTreeMap<u32, _> = press
        .upcoming
        .iter()
        .map(|p| (p.session, p.projected_date))
        .collect();
    let deadlift_dates: BTreeMap<u32, _> = deadlift
        .upcoming
        .iter()
        .map(|p| (p.session, p.projected_date))
        .collect();

    assert_eq!(press_dates.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(deadlift_dates.keys().copied().collect::<Vec<_>>(), vec![2, 4]);
    assert_eq!(press_dates[&1], date(2024, 3, 3));
    assert_eq!(deadlift_dates[&2], date(2024, 3, 5));
    assert_eq!(press_dates[&3], date(2024, 3, 7));
    assert_eq!(deadlift_dates[&4], date(2024, 3, 9));

    // Top set of the lower day is the 85% AMRAP set
    assert_eq!(deadlift.upcoming[0].weight, 255.0);
    assert_eq!(deadlift.upcoming[0].comment.as_deref(), Some("AMRAP"));
}

/// Maxima from history feed the generator, appended after an existing plan
#[test]
fn test_history_maxima_drive_generation() {
    let history: Vec<HistoricalEntry> = [
        (estimation::SQUAT, 200.0),
        (estimation::BENCH_PRESS, 150.0),
        (estimation::DEADLIFT, 250.0),
    ]
    .iter()
    .flat_map(|&(lift, weight)| MockDataGenerator::history(lift, &[(date(2024, 1, 1), weight, 1)]))
    .collect();

    let maxima = estimation::current_maxima(&history);
    assert_eq!(maxima.squat, Some(206.6));

    let existing = ProgramParser::new(ExerciseCatalog::builtin())
        .parse(presets::get("stronglifts_5x5").unwrap(), 2)
        .unwrap();
    let start = next_session(&existing);
    assert_eq!(start, 5);

    let generated = generate(
        1,
        maxima.squat.unwrap(),
        maxima.bench.unwrap(),
        maxima.deadlift.unwrap(),
        start,
    );
    let summary = summarize(&generated);
    assert_eq!(summary.count, 72);
    assert_eq!(summary.session_range, Some((5, 16)));
    assert_eq!(summary.message(), "Generated 72 workouts across 12 sessions");
}

/// Planned entries survive the JSON collaborator format unchanged
#[test]
fn test_plan_json_round_trip_through_projection() {
    let plan = ProgramParser::new(ExerciseCatalog::builtin())
        .parse(Scripts::BENCH_PERCENTAGES, 1)
        .unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    assert!(json.contains(r#""reps":"10+""#));
    let restored: Vec<PlannedEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, plan);

    let report = ProgressionService::default().project(
        "Flat Barbell Bench Press",
        &[],
        &restored,
        date(2024, 6, 1),
    );
    assert_eq!(report.upcoming.len(), 1);
    assert_eq!(report.upcoming[0].estimated_1rm, 174.8);
}
