// Built-in program scripts

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub script: &'static str,
}

const WENDLER_531: &str = "\
// Barbell Squat 1RM: 225lb
// Flat Barbell Bench Press 1RM: 185lb
// Deadlift 1RM: 275lb

## Week 1 Day 1
Barbell Squat / 1x5 65%, 1x5 75%, 1x5+ 85%
Pull Up / 5x10
Incline Dumbbell Press / 3x10
Decline Crunch / 3x15

## Week 1 Day 2
Flat Barbell Bench Press / 1x5 65%, 1x5 75%, 1x5+ 85%
Front Squat / 3x8
Dumbbell Row / 3x10
Landmines / 3x10

## Week 1 Day 3
Deadlift / 1x5 65%, 1x5 75%, 1x5+ 85%
Parallel Bar Triceps Dip / 3x10
Bulgarian Split Squat / 3x8
Cable side bend / 3x12

## Week 2 Day 1
Barbell Squat / 1x3 70%, 1x3 80%, 1x3+ 90%
Pull Up / 5x10
Incline Dumbbell Press / 3x10
Decline Crunch / 3x15

## Week 2 Day 2
Flat Barbell Bench Press / 1x3 70%, 1x3 80%, 1x3+ 90%
Front Squat / 3x8
Dumbbell Row / 3x10
Landmines / 3x10

## Week 2 Day 3
Deadlift / 1x3 70%, 1x3 80%, 1x3+ 90%
Parallel Bar Triceps Dip / 3x10
Bulgarian Split Squat / 3x8
Cable side bend / 3x12

## Week 3 Day 1
Barbell Squat / 1x5 75%, 1x3 85%, 1x1+ 95%
Pull Up / 5x10
Incline Dumbbell Press / 3x10
Decline Crunch / 3x15

## Week 3 Day 2
Flat Barbell Bench Press / 1x5 75%, 1x3 85%, 1x1+ 95%
Front Squat / 3x8
Dumbbell Row / 3x10
Landmines / 3x10

## Week 3 Day 3
Deadlift / 1x5 75%, 1x3 85%, 1x1+ 95%
Parallel Bar Triceps Dip / 3x10
Bulgarian Split Squat / 3x8
Cable side bend / 3x12

## Week 4 Day 1
Barbell Squat / 1x5 40%, 1x5 50%, 1x5 60%
Pull Up / 3x10
Decline Crunch / 3x15

## Week 4 Day 2
Flat Barbell Bench Press / 1x5 40%, 1x5 50%, 1x5 60%
Dumbbell Row / 3x10
Landmines / 3x10

## Week 4 Day 3
Deadlift / 1x5 40%, 1x5 50%, 1x5 60%
Bulgarian Split Squat / 3x8
Cable side bend / 3x12
";

const STRONGLIFTS_5X5: &str = "\
// Barbell Squat SW: 45lb
// Flat Barbell Bench Press SW: 45lb
// Barbell Row SW: 65lb
// Overhead Press SW: 45lb
// Deadlift SW: 95lb

## Workout A
Barbell Squat / 5x5 progress: lp(5lb)
Flat Barbell Bench Press / 5x5 progress: lp(5lb)
Barbell Row / 5x5 progress: lp(5lb)

## Workout B
Barbell Squat / 5x5 progress: lp(5lb)
Overhead Press / 5x5 progress: lp(5lb)
Deadlift / 1x5 progress: lp(10lb)
";

const PRESETS: &[Preset] = &[
    Preset {
        name: "wendler_531",
        display_name: "Wendler 5/3/1",
        description: "Four-week percentage cycle on squat, bench press and deadlift with a closing deload week",
        script: WENDLER_531,
    },
    Preset {
        name: "stronglifts_5x5",
        display_name: "StrongLifts 5x5",
        description: "Alternating A/B sessions of five sets of five, adding weight every cycle",
        script: STRONGLIFTS_5X5,
    },
];

/// Every built-in preset
pub fn list() -> &'static [Preset] {
    PRESETS
}

/// Script of the preset called `name`
pub fn get(name: &str) -> Option<&'static str> {
    find(name).map(|preset| preset.script)
}

pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}
