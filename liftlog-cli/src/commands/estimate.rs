use anyhow::Result;
use clap::Args;
use liftlog::services::estimate_from_text;

#[derive(Args)]
pub struct EstimateCommand {
    /// Weight lifted (pounds)
    weight: String,

    /// Reps performed, e.g. "5", "5+" or "8-12"
    reps: String,
}

impl EstimateCommand {
    pub fn execute(self) -> Result<()> {
        println!("{}", estimate_from_text(&self.weight, &self.reps));
        Ok(())
    }
}
