// File-backed collaborators: scripts, JSON record files and the exercise catalog

use anyhow::{bail, Context, Result};
use liftlog::models::{ExerciseCatalog, HistoricalEntry, PlannedEntry};
use liftlog::services::presets;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Prefix selecting a built-in preset instead of a file
pub const PRESET_PREFIX: &str = "preset:";

/// Read a program script from a file, or a built-in preset via `preset:<name>`
pub fn read_script(source: &str) -> Result<String> {
    if let Some(name) = source.strip_prefix(PRESET_PREFIX) {
        return match presets::get(name) {
            Some(script) => Ok(script.to_string()),
            None => bail!("Unknown preset '{}'", name),
        };
    }

    fs::read_to_string(source).with_context(|| format!("Failed to read script {}", source))
}

/// Read planned entries from a JSON array
pub fn read_planned(path: &Path) -> Result<Vec<PlannedEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read planned workouts {}", path.display()))?;
    let entries: Vec<PlannedEntry> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse planned workouts {}", path.display()))?;

    tracing::debug!("Read {} planned entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Read workout history from a JSON array. Records that do not deserialize
/// (bad dates, malformed reps) are skipped with a warning.
pub fn read_history(path: &Path) -> Result<Vec<HistoricalEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history {}", path.display()))?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse history {}", path.display()))?;

    let total = records.len();
    let entries: Vec<HistoricalEntry> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping history record {}: {}", index, e);
                None
            }
        })
        .collect();

    tracing::debug!("Read {}/{} history entries from {}", entries.len(), total, path.display());
    Ok(entries)
}

/// Built-in exercise library, overridden by the TOML table at `path`
pub fn load_catalog(path: Option<&Path>) -> Result<ExerciseCatalog> {
    let mut catalog = ExerciseCatalog::builtin();

    if let Some(path) = path {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read exercise catalog {}", path.display()))?;
        let custom: ExerciseCatalog = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse exercise catalog {}", path.display()))?;

        tracing::debug!("Loaded {} custom exercises", custom.len());
        catalog.merge(custom);
    }

    Ok(catalog)
}

/// Pretty JSON to `output`, or stdout when `None`
pub fn write_json<T: Serialize + ?Sized>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;

    match output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
