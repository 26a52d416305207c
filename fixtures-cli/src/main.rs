//! Fixtures CLI - Command-line interface
//!
//! Commands:
//! - round-robin: Generate group fixtures from a request file
//! - knockout: Build a seeded bracket from a request file
//! - resolve: Name placeholder participants of stored bracket matches
//! - draw: Split entries into groups or seeds

mod draw_cmd;
mod input;
mod knockout_cmd;
mod resolve_cmd;
mod round_robin_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fixtures")]
#[command(about = "Tournament fixture generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate round-robin fixtures
    RoundRobin(round_robin_cmd::RoundRobinArgs),
    /// Build a knockout bracket
    Knockout(knockout_cmd::KnockoutArgs),
    /// Resolve placeholder names for stored matches
    Resolve(resolve_cmd::ResolveArgs),
    /// Draw entries into groups or seeds
    Draw(draw_cmd::DrawArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::RoundRobin(args) => round_robin_cmd::run(args),
        Commands::Knockout(args) => knockout_cmd::run(args),
        Commands::Resolve(args) => resolve_cmd::run(args),
        Commands::Draw(args) => draw_cmd::run(args),
    }
}
