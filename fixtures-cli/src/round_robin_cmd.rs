//! Round-robin command - generate group fixtures from a request file
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load request, generate, report_results()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use fixtures_schedule::{generate_round_robin, RoundRobinOptions, RoundRobinSchedule};

use crate::input::{load_json, print_json};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RoundRobinArgs {
    /// Request JSON file (stageId, groups, venues, startAt, ...)
    #[arg(long, value_name = "FILE")]
    pub request: PathBuf,

    /// Override match duration in minutes
    #[arg(long)]
    pub duration: Option<i64>,

    /// Override break between kickoffs in minutes
    #[arg(long = "break")]
    pub break_minutes: Option<i64>,

    /// Output matches as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run round-robin command
///
/// 1. Load the request (with command-line overrides)
/// 2. Generate the schedule
/// 3. Report results
pub fn run(args: RoundRobinArgs) -> Result<()> {
    let options = load_options(&args)?;

    tracing::info!(
        "Generating round-robin for stage {}: {} groups, {} venues, start {}",
        options.stage_id,
        options.groups.len(),
        options.venues.len(),
        options.start_at
    );

    let schedule = generate_round_robin(&options)
        .with_context(|| format!("Invalid request {}", args.request.display()))?;

    if args.json {
        print_json(&schedule.matches)
    } else {
        print_text_results(&schedule);
        Ok(())
    }
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_options(args: &RoundRobinArgs) -> Result<RoundRobinOptions> {
    let mut options: RoundRobinOptions = load_json(&args.request)?;
    if let Some(duration) = args.duration {
        options = options.with_duration(duration);
    }
    if let Some(minutes) = args.break_minutes {
        options = options.with_break(minutes);
    }
    Ok(options)
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn print_text_results(schedule: &RoundRobinSchedule) {
    println!("\n=== Round-Robin Schedule ===");
    println!("Matches: {}", schedule.matches.len());
    println!("Rounds:  {}", schedule.rounds());

    let mut current_round = 0;
    for m in &schedule.matches {
        if m.round_number != current_round {
            current_round = m.round_number;
            println!("\nRound {} - {}", current_round, m.kickoff_at.format("%Y-%m-%d %H:%M UTC"));
        }
        println!(
            "  [{}] {:<12} {} vs {}",
            m.group_id, m.venue_id, m.home_entry_id, m.away_entry_id
        );
    }
}
