//! Knockout command - build a seeded bracket from a request file
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build bracket, name placeholders, report_results()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use fixtures_core::{KnockoutMatch, MatchType};
use fixtures_schedule::{
    build_bracket, resolve_placeholders, KnockoutOptions, MatchRow, ResolveConfig,
    ResolvedPlaceholders,
};

use crate::input::{load_json, print_json, Labels};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct KnockoutArgs {
    /// Request JSON file (stageId, bracketId, seeds, thirdPlaceMatch)
    #[arg(long, value_name = "FILE")]
    pub request: PathBuf,

    /// Add a third-place match even if the request does not ask for one
    #[arg(long)]
    pub third_place: bool,

    /// Wording for placeholder names
    #[arg(long, value_enum, default_value_t = Labels::No)]
    pub labels: Labels,

    /// Output matches (with metadata) as JSON
    #[arg(long)]
    pub json: bool,
}

/// A bracket match as printed, with the blob a caller would persist
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BracketOutput<'a> {
    #[serde(flatten)]
    knockout: &'a KnockoutMatch,
    metadata: serde_json::Value,
    home_name: Option<String>,
    away_name: Option<String>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run knockout command
///
/// 1. Load the request
/// 2. Build the bracket
/// 3. Name the placeholder sides the way a match listing would
/// 4. Report results
pub fn run(args: KnockoutArgs) -> Result<()> {
    let mut options: KnockoutOptions = load_json(&args.request)?;
    if args.third_place {
        options = options.with_third_place();
    }

    tracing::info!(
        "Building bracket {} for stage {}: {} seeds{}",
        options.bracket_id,
        options.stage_id,
        options.seeds.len(),
        if options.third_place_match { " (with third place)" } else { "" }
    );

    let bracket = build_bracket(&options)
        .with_context(|| format!("Invalid request {}", args.request.display()))?;

    let rows: Vec<MatchRow> = bracket.matches.iter().map(MatchRow::from_knockout).collect();
    let config = ResolveConfig::default().with_labels(args.labels.placeholder_labels());
    let names = resolve_placeholders(&rows, &config);

    if args.json {
        let output: Vec<BracketOutput> = bracket
            .matches
            .iter()
            .zip(names)
            .map(|(m, n)| BracketOutput {
                knockout: m,
                metadata: m.metadata(),
                home_name: n.home,
                away_name: n.away,
            })
            .collect();
        print_json(&output)
    } else {
        print_text_results(&bracket.matches, &names);
        Ok(())
    }
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn print_text_results(matches: &[KnockoutMatch], names: &[ResolvedPlaceholders]) {
    println!("\n=== Knockout Bracket ===");
    println!("Matches: {}", matches.len());

    let mut current_round = 0;
    for (m, n) in matches.iter().zip(names) {
        if m.round_number != current_round {
            current_round = m.round_number;
            println!("\nRound {}", current_round);
        }
        let tag = match m.match_type {
            MatchType::Normal => "",
            MatchType::Final => " (final)",
            MatchType::ThirdPlace => " (third place)",
        };
        println!(
            "  {}{}: {} vs {}",
            m.id,
            tag,
            n.home.as_deref().unwrap_or("?"),
            n.away.as_deref().unwrap_or("?")
        );
    }
}
