use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use liftlog::models::summarize;
use liftlog::services::ProgramParser;
use std::path::PathBuf;

use crate::config::Config;
use crate::storage;

#[derive(Args)]
pub struct ParseCommand {
    /// Script file, or `preset:<name>` for a built-in program
    script: String,

    /// Number of times to repeat the script
    #[arg(short, long)]
    cycles: Option<u32>,

    /// Exercise catalog TOML overriding built-in categories
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write planned workouts here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ParseCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let script = storage::read_script(&self.script)?;
        let catalog_path = self.catalog.as_deref().or(config.catalog.path.as_deref());
        let catalog = storage::load_catalog(catalog_path)?;
        let cycles = self.cycles.unwrap_or(config.program.default_cycles);

        let entries = ProgramParser::new(&catalog)
            .parse(&script, cycles)
            .with_context(|| format!("Failed to parse {}", self.script))?;

        storage::write_json(&entries, self.output.as_deref())?;
        eprintln!("{} {}", "✓".green(), summarize(&entries).message());

        Ok(())
    }
}
