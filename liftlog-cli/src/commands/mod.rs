mod config_cmd;
mod estimate;
mod generate;
mod parse;
mod presets_cmd;
mod project;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

pub use estimate::EstimateCommand;
pub use generate::GenerateCommand;
pub use parse::ParseCommand;
pub use project::ProjectCommand;

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Strength program interpreter and progression planner", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "LIFTLOG_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a program script into planned workouts
    Parse(ParseCommand),

    /// Generate a periodized squat/bench/deadlift plan
    Generate(GenerateCommand),

    /// Project estimated 1RM progression for an exercise
    Project(ProjectCommand),

    /// Estimate a one-rep max from weight and reps
    Estimate(EstimateCommand),

    /// Browse built-in program presets
    #[command(subcommand)]
    Presets(PresetsSubcommands),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum PresetsSubcommands {
    /// List available presets
    List,

    /// Print a preset's script
    Show {
        /// Preset name
        name: String,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let config_path = self.config.as_deref();

        match self.command {
            Commands::Parse(cmd) => cmd.execute(&Config::load(config_path)?),
            Commands::Generate(cmd) => cmd.execute(&Config::load(config_path)?),
            Commands::Project(cmd) => cmd.execute(&Config::load(config_path)?),
            Commands::Estimate(cmd) => cmd.execute(),
            Commands::Presets(subcmd) => match subcmd {
                PresetsSubcommands::List => presets_cmd::list_presets(),
                PresetsSubcommands::Show { name } => presets_cmd::show_preset(&name),
            },
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(config_path),
                ConfigSubcommands::Init { force } => config_cmd::init_config(config_path, force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
