// Program parsing, generation and progression services

pub mod estimation;
pub mod periodization_service;
pub mod presets;
pub mod program_parser;
pub mod progression_service;
pub mod set_spec;
pub mod weight_resolver;

pub use estimation::{current_maxima, estimate_from_text, estimate_one_rep_max, MAIN_LIFTS};
pub use periodization_service::{PeriodizationService, StartingMaxima};
pub use presets::Preset;
pub use program_parser::{parse_program, ProgramParser};
pub use progression_service::{project_future_dates, ProgressionService, ProjectionOptions};
pub use weight_resolver::{round_to_5, round_to_available_plates, RequiredMaxima};
