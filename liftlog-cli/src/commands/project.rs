use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use liftlog::services::ProgressionService;
use std::path::PathBuf;

use crate::config::Config;
use crate::storage;

#[derive(Args)]
pub struct ProjectCommand {
    /// Exercise to project
    #[arg(required_unless_present = "main_lifts")]
    exercise: Option<String>,

    /// Project squat, bench press and deadlift together
    #[arg(long, conflicts_with = "exercise")]
    main_lifts: bool,

    /// Workout history JSON
    #[arg(long)]
    history: Option<PathBuf>,

    /// Planned workouts JSON (every exercise, every session)
    #[arg(long)]
    upcoming: Option<PathBuf>,

    /// Calendar anchor when there is no history (YYYY-MM-DD, default today)
    #[arg(long)]
    today: Option<String>,

    /// Moving average window over history; 0 disables it
    #[arg(short, long)]
    window: Option<usize>,
}

impl ProjectCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let historical = match &self.history {
            Some(path) => storage::read_history(path)?,
            None => Vec::new(),
        };
        let upcoming = match &self.upcoming {
            Some(path) => storage::read_planned(path)?,
            None => Vec::new(),
        };
        let today = match &self.today {
            Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", text))?,
            None => Local::now().date_naive(),
        };

        let service = ProgressionService::new(config.projection.options(self.window));

        match &self.exercise {
            Some(exercise) if !self.main_lifts => {
                let report = service.project(exercise, &historical, &upcoming, today);
                storage::write_json(&report, None)
            }
            _ => {
                let reports = service.project_main_lifts(&historical, &upcoming, today);
                storage::write_json(&reports, None)
            }
        }
    }
}
