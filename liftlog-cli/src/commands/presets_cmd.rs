use anyhow::{bail, Result};
use colored::Colorize;
use liftlog::services::presets;

pub fn list_presets() -> Result<()> {
    println!("{}", "Available Presets".bold());
    println!();

    for preset in presets::list() {
        println!("  {} ({})", preset.name.cyan(), preset.display_name);
        println!("    {}", preset.description);
    }

    println!();
    println!("Parse one with: liftlog parse preset:<name>");

    Ok(())
}

pub fn show_preset(name: &str) -> Result<()> {
    match presets::get(name) {
        Some(script) => {
            print!("{}", script);
            Ok(())
        }
        None => bail!("Unknown preset '{}'", name),
    }
}
