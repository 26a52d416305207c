//! Seeded draws - split entries into groups or rank them into seeds
//!
//! Level 3 - Steps
//!
//! The same entries and draw seed always give the same result, so a draw can
//! be re-run and audited.

use fixtures_core::{EntryId, Group, GroupId, GroupMode, Seed, ValidationError};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

/// Shuffle entries and number them 1..=N
pub fn draw_seeds(entries: &[EntryId], draw_seed: u64) -> Result<Vec<Seed>, ValidationError> {
    if entries.len() < 2 {
        return Err(ValidationError::TooFewSeeds { count: entries.len() });
    }
    if let Some(entry) = first_duplicate(entries) {
        return Err(ValidationError::DuplicateSeedEntry { entry: entry.clone() });
    }

    let shuffled = shuffled(entries, draw_seed);
    tracing::debug!("Drew {} seeds with draw seed {}", shuffled.len(), draw_seed);

    Ok(shuffled
        .into_iter()
        .zip(1u32..)
        .map(|(entry, seed)| Seed::new(seed, entry))
        .collect())
}

/// Shuffle entries and deal them into `group_count` groups named A, B, C...
pub fn draw_groups(
    entries: &[EntryId],
    group_count: usize,
    mode: GroupMode,
    draw_seed: u64,
) -> Result<Vec<Group>, ValidationError> {
    let too_few = group_count
        .checked_mul(2)
        .map_or(true, |needed| entries.len() < needed);
    if group_count == 0 || too_few {
        return Err(ValidationError::InvalidGroupCount {
            entries: entries.len(),
            groups: group_count,
        });
    }
    if let Some(entry) = first_duplicate(entries) {
        return Err(ValidationError::DuplicateEntry {
            group: GroupId::new("draw"),
            entry: entry.clone(),
        });
    }

    let mut groups: Vec<Group> = (0..group_count)
        .map(|i| Group::new(group_name(i), Vec::new(), mode))
        .collect();

    for (i, entry) in shuffled(entries, draw_seed).into_iter().enumerate() {
        groups[i % group_count].entry_ids.push(entry);
    }

    tracing::debug!(
        "Drew {} entries into {} groups with draw seed {}",
        entries.len(),
        group_count,
        draw_seed
    );
    Ok(groups)
}

fn shuffled(entries: &[EntryId], draw_seed: u64) -> Vec<EntryId> {
    let mut rng = ChaCha8Rng::seed_from_u64(draw_seed);
    let mut shuffled = entries.to_vec();
    shuffled.shuffle(&mut rng);
    shuffled
}

fn first_duplicate(entries: &[EntryId]) -> Option<&EntryId> {
    let mut seen = FxHashSet::default();
    entries.iter().find(|e| !seen.insert(*e))
}

/// A..Z, then AA..ZZ, then AAA, ... (spreadsheet column naming)
fn group_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}
