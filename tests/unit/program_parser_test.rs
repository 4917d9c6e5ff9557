use assert_matches::assert_matches;
use liftlog::errors::{MaximumKind, ParseError};
use liftlog::models::{ExerciseCatalog, PlannedEntry, RepSpec};
use liftlog::services::ProgramParser;
use pretty_assertions::assert_eq;

use crate::common::{init_test_logging, Scripts};

#[cfg(test)]
mod program_parser_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(script: &str, cycles: u32) -> Result<Vec<PlannedEntry>, ParseError> {
        init_test_logging();
        ProgramParser::new(ExerciseCatalog::builtin()).parse(script, cycles)
    }

    fn weights(entries: &[PlannedEntry], exercise: &str) -> Vec<Option<f64>> {
        entries
            .iter()
            .filter(|e| e.exercise == exercise)
            .map(|e| e.weight)
            .collect()
    }

    #[test]
    fn test_mixed_load_notations() {
        let entries = parse(Scripts::BENCH_PERCENTAGES, 1).unwrap();

        assert_eq!(entries.len(), 9);
        assert_eq!(weights(&entries, "Barbell Squat"), vec![Some(135.0); 3]);
        assert_eq!(
            weights(&entries, "Flat Barbell Bench Press"),
            vec![Some(150.0); 3]
        );

        let pull_ups: Vec<&PlannedEntry> =
            entries.iter().filter(|e| e.exercise == "Pull Ups").collect();
        assert_eq!(pull_ups.len(), 3);
        for entry in pull_ups {
            assert_eq!(entry.reps, Some(RepSpec::Amrap(10)));
            assert_eq!(entry.weight, None);
            assert_eq!(entry.category, "Back");
            assert_eq!(entry.comment.as_deref(), Some("AMRAP"));
        }
    }

    #[test]
    fn test_percentage_rounds_to_nearest_five() {
        let script = "// Deadlift 1RM: 203lb\n## Day 1\nDeadlift / 1x5 77%\n";
        let entries = parse(script, 1).unwrap();
        assert_eq!(entries[0].weight, Some(155.0));
    }

    #[test]
    fn test_percentages_of_larger_max() {
        let script = "// Deadlift 1RM: 315lb\n## Day 1\nDeadlift / 1x5 65%, 1x3 80%, 1x1 95%\n";
        let entries = parse(script, 1).unwrap();

        assert_eq!(
            weights(&entries, "Deadlift"),
            vec![Some(205.0), Some(250.0), Some(300.0)]
        );
        let reps: Vec<Option<RepSpec>> = entries.iter().map(|e| e.reps).collect();
        assert_eq!(
            reps,
            vec![
                Some(RepSpec::Fixed(5)),
                Some(RepSpec::Fixed(3)),
                Some(RepSpec::Fixed(1))
            ]
        );
    }

    #[test]
    fn test_kilogram_max_is_converted() {
        let script = "// Barbell Squat 1RM: 140kg\n## Day 1\nBarbell Squat / 1x5 80%\n";
        let entries = parse(script, 1).unwrap();
        assert_eq!(entries[0].weight, Some(245.0));
    }

    #[test]
    fn test_linear_progression_in_kilograms() {
        let entries = parse(Scripts::SQUAT_LINEAR_KG, 3).unwrap();

        let per_session: Vec<(u32, Option<f64>)> = entries
            .iter()
            .filter(|e| e.exercise == "Barbell Squat")
            .map(|e| (e.session, e.weight))
            .collect();
        assert_eq!(per_session.len(), 9);
        assert_eq!(per_session[0], (1, Some(130.0)));
        assert_eq!(per_session[3], (2, Some(140.0)));
        assert_eq!(per_session[6], (3, Some(145.0)));
    }

    #[test]
    fn test_linear_progression_does_not_compound() {
        let script = "// Deadlift SW: 100lb\n## Day 1\nDeadlift / 1x5 progress: lp(10lb)\n";
        let entries = parse(script, 3).unwrap();
        assert_eq!(
            weights(&entries, "Deadlift"),
            vec![Some(100.0), Some(110.0), Some(120.0)]
        );
    }

    #[test]
    fn test_sessions_continue_across_cycles() {
        let entries = parse(Scripts::TWO_DAY_SPLIT, 2).unwrap();

        let mut sessions: Vec<u32> = entries.iter().map(|e| e.session).collect();
        sessions.dedup();
        assert_eq!(sessions, vec![1, 2, 3, 4]);
        assert_eq!(
            weights(&entries, "Overhead Press")
                .into_iter()
                .step_by(5)
                .collect::<Vec<_>>(),
            vec![Some(95.0), Some(100.0)]
        );
    }

    #[test]
    fn test_range_reps_expand() {
        let entries = parse(Scripts::TWO_DAY_SPLIT, 1).unwrap();
        let rows: Vec<&PlannedEntry> = entries
            .iter()
            .filter(|e| e.exercise == "Dumbbell Row")
            .collect();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|e| e.reps == Some(RepSpec::Range(8, 12))));
        assert!(rows.iter().all(|e| e.comment.is_none()));
    }

    #[test]
    fn test_missing_comments_are_batched() {
        let script = "## Day 1\nDeadlift / 1x5 80%\nBarbell Squat / 3x5 progress: lp(5lb)\nDeadlift / 1x3 90%\n";
        let err = parse(script, 1).unwrap_err();

        assert_matches!(&err, ParseError::MissingRequiredComment { missing } => {
            assert_eq!(missing.len(), 2);
            assert_eq!(missing[0].kind, MaximumKind::OneRepMax);
            assert_eq!(missing[1].kind, MaximumKind::StartingWeight);
        });
        assert_eq!(err.missing_exercises(), vec!["Deadlift", "Barbell Squat"]);
        assert_eq!(
            err.to_string(),
            "Missing required comment(s): Deadlift (1RM), Barbell Squat (SW)"
        );
    }

    #[test]
    fn test_wrong_kind_of_header_is_still_missing() {
        let script = "// Deadlift SW: 135lb\n## Day 1\nDeadlift / 1x5 80%\n";
        let err = parse(script, 1).unwrap_err();
        assert!(err.to_string().contains("Deadlift (1RM)"));
    }

    #[test]
    fn test_invalid_set_spec_names_the_line() {
        let err = parse("## Day 1\nBarbell Squat / 3sets5reps\n", 1).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidSetSpec {
                line: "Barbell Squat / 3sets5reps".to_string()
            }
        );
        assert!(err.to_string().contains("Invalid sets/reps format"));
    }

    #[test]
    fn test_unknown_weight_token_is_invalid() {
        let err = parse("## Day 1\nBarbell Squat / 3x5 heavy\n", 1).unwrap_err();
        assert_matches!(err, ParseError::InvalidSetSpec { .. });
    }

    #[test]
    fn test_huge_set_count_is_invalid() {
        let err = parse("## Day 1\nDeadlift / 4000000000x1\n", 1).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidSetSpec {
                line: "Deadlift / 4000000000x1".to_string()
            }
        );
    }

    #[test]
    fn test_error_yields_no_partial_result() {
        let script = "// Deadlift 1RM: 300lb\n## Day 1\nDeadlift / 1x5 80%\n## Day 2\nDeadlift / five\n";
        assert!(parse(script, 1).is_err());
    }

    #[test]
    fn test_unknown_exercise_defaults_to_other() {
        let entries = parse("## Day 1\nSled Push / 4x1\n", 1).unwrap();
        assert_eq!(entries[0].category, "Other");
    }

    #[test]
    fn test_custom_catalog_overrides_category() {
        let mut catalog = ExerciseCatalog::builtin();
        catalog.insert("Deadlift", "Posterior Chain");

        let entries = ProgramParser::new(&catalog)
            .parse("## Day 1\nDeadlift / 1x5\n", 1)
            .unwrap();
        assert_eq!(entries[0].category, "Posterior Chain");
    }

    #[test]
    fn test_parser_keeps_no_state_between_calls() {
        let parser = ProgramParser::new(ExerciseCatalog::builtin());
        let first = parser.parse(Scripts::BENCH_PERCENTAGES, 1).unwrap();

        // Maxima from the first script must not leak into the second
        let err = parser
            .parse("## Day 1\nFlat Barbell Bench Press / 1x5 75%\n", 1)
            .unwrap_err();
        assert_matches!(err, ParseError::MissingRequiredComment { .. });

        let again = parser.parse(Scripts::BENCH_PERCENTAGES, 1).unwrap();
        assert_eq!(first, again);
    }
}
