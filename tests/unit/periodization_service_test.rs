use liftlog::models::{summarize, PlannedEntry, RepSpec};
use liftlog::services::periodization_service::{calculate_weights, generate};
use liftlog::services::{PeriodizationService, StartingMaxima};
use pretty_assertions::assert_eq;

use crate::common::init_test_logging;

#[cfg(test)]
mod periodization_service_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn main_sets<'a>(
        entries: &'a [PlannedEntry],
        session: u32,
        exercise: &str,
    ) -> Vec<&'a PlannedEntry> {
        entries
            .iter()
            .filter(|e| e.session == session && e.exercise == exercise)
            .collect()
    }

    #[test]
    fn test_single_cycle_shape() {
        init_test_logging();
        let entries = generate(1, 200.0, 150.0, 250.0, 1);

        assert_eq!(entries.len(), 72);
        let summary = summarize(&entries);
        assert_eq!(summary.sessions, 12);
        assert_eq!(summary.session_range, Some((1, 12)));
    }

    #[test]
    fn test_week_one_squat() {
        let entries = generate(1, 200.0, 150.0, 250.0, 1);
        let squat = main_sets(&entries, 1, "Barbell Squat");

        let weights: Vec<Option<f64>> = squat.iter().map(|e| e.weight).collect();
        let reps: Vec<Option<RepSpec>> = squat.iter().map(|e| e.reps).collect();
        assert_eq!(weights, vec![Some(125.0), Some(145.0), Some(165.0)]);
        assert_eq!(
            reps,
            vec![
                Some(RepSpec::Fixed(5)),
                Some(RepSpec::Fixed(5)),
                Some(RepSpec::Amrap(5))
            ]
        );
        assert_eq!(squat[0].category, "Legs");
    }

    #[test]
    fn test_training_day_order() {
        let entries = generate(1, 200.0, 150.0, 250.0, 1);

        let lifts: Vec<&str> = [1, 2, 3]
            .iter()
            .map(|&session| {
                entries
                    .iter()
                    .find(|e| e.session == session)
                    .map(|e| e.exercise.as_str())
                    .unwrap()
            })
            .collect();
        assert_eq!(
            lifts,
            vec!["Barbell Squat", "Flat Barbell Bench Press", "Deadlift"]
        );
    }

    #[test]
    fn test_deload_week_comments() {
        let entries = generate(1, 200.0, 150.0, 250.0, 1);
        // Week 4, day 1
        let squat = main_sets(&entries, 10, "Barbell Squat");

        let comments: Vec<Option<&str>> = squat.iter().map(|e| e.comment.as_deref()).collect();
        assert_eq!(
            comments,
            vec![
                Some("Week 4 Deload - Set 1"),
                Some("Week 4 Deload - Set 2"),
                Some("Week 4 Deload - Set 3")
            ]
        );
        assert!(squat.iter().all(|e| !e.reps.unwrap().is_amrap()));
    }

    #[test]
    fn test_second_cycle_applies_overload() {
        let entries = generate(2, 200.0, 150.0, 250.0, 1);
        assert_eq!(entries.len(), 144);

        // Cycle 2 squat max is 210
        let squat = main_sets(&entries, 13, "Barbell Squat");
        let weights: Vec<Option<f64>> = squat.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![Some(135.0), Some(155.0), Some(175.0)]);
    }

    #[test]
    fn test_starting_session_offsets_numbering() {
        let entries = generate(1, 200.0, 150.0, 250.0, 5);
        let summary = summarize(&entries);
        assert_eq!(summary.session_range, Some((5, 16)));
    }

    #[test]
    fn test_accessories_follow_main_sets() {
        let entries = generate(1, 200.0, 150.0, 250.0, 1);
        let deadlift_day: Vec<&PlannedEntry> = entries.iter().filter(|e| e.session == 3).collect();

        let names: Vec<&str> = deadlift_day.iter().map(|e| e.exercise.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Deadlift",
                "Deadlift",
                "Deadlift",
                "Parallel Bar Triceps Dip",
                "Bulgarian Split Squat",
                "Cable side bend"
            ]
        );
        assert_eq!(deadlift_day[3].weight, Some(0.0));
        assert_eq!(deadlift_day[3].comment.as_deref(), Some("Bodyweight"));
        assert_eq!(deadlift_day[4].weight, None);
        assert_eq!(deadlift_day[5].category, "Core");
    }

    #[test]
    fn test_generator_is_stateless() {
        let service = PeriodizationService::new();
        let maxima = StartingMaxima {
            squat: 300.0,
            bench: 225.0,
            deadlift: 405.0,
        };

        assert_eq!(service.generate(1, maxima, 1), service.generate(1, maxima, 1));
    }

    #[test]
    fn test_zero_max_stays_zero() {
        assert!(calculate_weights(0.0, 1).iter().all(|(w, _)| *w == 0.0));
    }
}
