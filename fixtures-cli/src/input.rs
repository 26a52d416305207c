//! Shared input helpers for commands
//!
//! Level 4 - Utilities

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;

use fixtures_schedule::PlaceholderLabels;

/// Read and decode a JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{}", json);
    Ok(())
}

/// Wording for placeholder names
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Labels {
    /// "Vinner av SF2"
    #[default]
    No,
    /// "Winner of SF2"
    En,
}

impl Labels {
    pub fn placeholder_labels(self) -> PlaceholderLabels {
        match self {
            Labels::No => PlaceholderLabels::norwegian(),
            Labels::En => PlaceholderLabels::english(),
        }
    }
}
