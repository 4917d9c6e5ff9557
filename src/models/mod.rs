// Program, history and progression records

pub mod exercise;
pub mod planned_workout;
pub mod workout_history;

pub use exercise::*;
pub use planned_workout::*;
pub use workout_history::*;
