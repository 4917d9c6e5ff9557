// Workout program interpreter and progression engine

pub mod errors;
pub mod models;
pub mod services;

pub use errors::{ParseError, ParseResult};
pub use models::{
    ExerciseCatalog, ExerciseLookup, HistoricalEntry, PlannedEntry, ProgressionReport, RepSpec,
    WeightUnit,
};
pub use services::{
    parse_program, PeriodizationService, ProgramParser, ProgressionService, ProjectionOptions,
};
