//! Resolve command - placeholder names for stored bracket matches
//!
//! Reads rows shaped `{ "id", "bracketId"?, "metadata" }`, the way a
//! persistence layer would list them, and prints a display name for each
//! undecided side.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use fixtures_schedule::{resolve_placeholders, MatchRow, ResolveConfig};

use crate::input::{load_json, print_json, Labels};

#[derive(Args)]
pub struct ResolveArgs {
    /// JSON array of stored match rows
    #[arg(long, value_name = "FILE")]
    pub matches: PathBuf,

    /// Wording for placeholder names
    #[arg(long, value_enum, default_value_t = Labels::No)]
    pub labels: Labels,

    /// Resolve on one thread
    #[arg(long)]
    pub sequential: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let rows: Vec<MatchRow> = load_json(&args.matches)?;

    let mut config = ResolveConfig::default().with_labels(args.labels.placeholder_labels());
    if args.sequential {
        config = config.sequential();
    }

    let resolved = resolve_placeholders(&rows, &config);
    let unnamed = resolved
        .iter()
        .filter(|r| r.home.is_none() && r.away.is_none())
        .count();
    tracing::info!("Resolved {} rows ({} without placeholders)", resolved.len(), unnamed);

    if args.json {
        return print_json(&resolved);
    }

    for r in &resolved {
        println!(
            "{}: {} vs {}",
            r.id,
            r.home.as_deref().unwrap_or("-"),
            r.away.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
