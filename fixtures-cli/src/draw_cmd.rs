//! Draw command - split entries into groups or seeds

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use fixtures_core::{EntryId, GroupMode};
use fixtures_schedule::{draw_groups, draw_seeds};

use crate::input::{load_json, print_json};

#[derive(Args)]
pub struct DrawArgs {
    /// JSON array of entry ids
    #[arg(long, value_name = "FILE")]
    pub entries: PathBuf,

    /// Number of groups to draw into
    #[arg(long, conflicts_with = "seeds")]
    pub groups: Option<usize>,

    /// Play each group twice (home and away)
    #[arg(long)]
    pub double: bool,

    /// Draw a seed list instead of groups
    #[arg(long)]
    pub seeds: bool,

    /// Draw seed for reproducible results
    #[arg(long, default_value = "0")]
    pub seed: u64,
}

pub fn run(args: DrawArgs) -> Result<()> {
    let entries: Vec<EntryId> = load_json(&args.entries)?;

    if args.seeds {
        let seeds = draw_seeds(&entries, args.seed)?;
        tracing::info!("Drew {} seeds (draw seed {})", seeds.len(), args.seed);
        return print_json(&seeds);
    }

    let Some(group_count) = args.groups else {
        bail!("Pass --groups N or --seeds");
    };

    let mode = if args.double { GroupMode::Double } else { GroupMode::Single };
    let groups = draw_groups(&entries, group_count, mode, args.seed)?;
    tracing::info!("Drew {} groups (draw seed {})", groups.len(), args.seed);
    print_json(&groups)
}
