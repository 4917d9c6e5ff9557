use anyhow::Result;
use clap::Args;
use colored::Colorize;
use liftlog::models::{next_session, summarize};
use liftlog::services::{current_maxima, PeriodizationService, StartingMaxima};
use std::path::PathBuf;

use crate::config::Config;
use crate::storage;

#[derive(Args)]
pub struct GenerateCommand {
    /// Number of 4-week cycles
    #[arg(short, long)]
    cycles: Option<u32>,

    /// Squat 1RM (pounds)
    #[arg(long)]
    squat: Option<f64>,

    /// Bench press 1RM (pounds)
    #[arg(long)]
    bench: Option<f64>,

    /// Deadlift 1RM (pounds)
    #[arg(long)]
    deadlift: Option<f64>,

    /// Workout history JSON used to estimate missing maxima
    #[arg(long)]
    history: Option<PathBuf>,

    /// Already planned workouts; generation continues after their last session
    #[arg(long)]
    existing: Option<PathBuf>,

    /// Write planned workouts here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let maxima = self.resolve_maxima(config)?;
        let starting_session = match &self.existing {
            Some(path) => next_session(&storage::read_planned(path)?),
            None => 1,
        };
        let cycles = self.cycles.unwrap_or(config.generator.default_cycles);

        tracing::info!(
            squat = maxima.squat,
            bench = maxima.bench,
            deadlift = maxima.deadlift,
            starting_session,
            "Generating plan"
        );
        let entries = PeriodizationService::new().generate(cycles, maxima, starting_session);

        storage::write_json(&entries, self.output.as_deref())?;
        eprintln!("{} {}", "✓".green(), summarize(&entries).message());

        Ok(())
    }

    /// Flags first, then estimates from history, then configured defaults
    fn resolve_maxima(&self, config: &Config) -> Result<StartingMaxima> {
        let estimated = match &self.history {
            Some(path) => current_maxima(&storage::read_history(path)?),
            None => Default::default(),
        };
        let fallback = config.generator.fallback_maxima();

        Ok(StartingMaxima {
            squat: self.squat.or(estimated.squat).unwrap_or(fallback.squat),
            bench: self.bench.or(estimated.bench).unwrap_or(fallback.bench),
            deadlift: self
                .deadlift
                .or(estimated.deadlift)
                .unwrap_or(fallback.deadlift),
        })
    }
}
