//! Match reference resolution - display names for undecided participants
//!
//! Level 2 - Phases and Level 3 - Steps
//!
//! Given stored bracket matches, answers what the UI should call a side that
//! is not known yet ("Seed 4", "Vinner av SF2", "Taper av F"). Malformed
//! metadata never fails the batch; it only yields `None` for that side.

use fixtures_core::{
    parse_round_number, BracketId, KnockoutMatch, MatchMetadata, MatchRef, ParticipantSource,
};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{PlaceholderLabels, ResolveConfig};

/// A stored match row as the persistence layer hands it over
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRow {
    pub id: String,
    #[serde(default)]
    pub bracket_id: Option<BracketId>,
    /// Opaque blob holding `homeSource`, `awaySource` and `roundNumber`
    #[serde(default)]
    pub metadata: Value,
}

impl MatchRow {
    /// Row as it would be stored for a freshly built bracket match
    pub fn from_knockout(m: &KnockoutMatch) -> Self {
        Self {
            id: m.id.to_string(),
            bracket_id: Some(m.bracket_id.clone()),
            metadata: m.metadata(),
        }
    }
}

/// Highest round number seen per bracket
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BracketRoundMap(FxHashMap<BracketId, u32>);

impl BracketRoundMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a round, keeping the maximum per bracket
    pub fn observe(&mut self, bracket_id: BracketId, round: u32) {
        let max = self.0.entry(bracket_id).or_insert(round);
        *max = (*max).max(round);
    }

    pub fn max_round(&self, bracket_id: &BracketId) -> Option<u32> {
        self.0.get(bracket_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(BracketId, u32)> for BracketRoundMap {
    fn from_iter<I: IntoIterator<Item = (BracketId, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (bracket_id, round) in iter {
            map.observe(bracket_id, round);
        }
        map
    }
}

/// Resolved display names for one row
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedPlaceholders {
    pub id: String,
    pub home: Option<String>,
    pub away: Option<String>,
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Maximum round per bracket. Rows without a bracket id or a valid
/// `roundNumber` are skipped.
pub fn build_bracket_round_map(rows: &[MatchRow]) -> BracketRoundMap {
    rows.iter()
        .filter_map(|row| {
            let bracket_id = row.bracket_id.clone()?;
            let round = parse_round_number(&row.metadata)?;
            Some((bracket_id, round))
        })
        .collect()
}

/// Resolve placeholder names for a batch of rows, keeping row order
pub fn resolve_placeholders(rows: &[MatchRow], config: &ResolveConfig) -> Vec<ResolvedPlaceholders> {
    let rounds = build_bracket_round_map(rows);
    tracing::debug!("Resolving {} rows across {} brackets", rows.len(), rounds.len());

    let resolve = |row: &MatchRow| {
        let metadata = MatchMetadata::parse(&row.metadata);
        ResolvedPlaceholders {
            id: row.id.clone(),
            home: derive_placeholder_name_with(metadata.home_source.as_ref(), &rounds, &config.labels),
            away: derive_placeholder_name_with(metadata.away_source.as_ref(), &rounds, &config.labels),
        }
    };

    if config.parallel {
        rows.par_iter().map(resolve).collect()
    } else {
        rows.iter().map(resolve).collect()
    }
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Display name with the default (Norwegian) wording
pub fn derive_placeholder_name(
    source: Option<&ParticipantSource>,
    rounds: &BracketRoundMap,
) -> Option<String> {
    derive_placeholder_name_with(source, rounds, &PlaceholderLabels::default())
}

/// Display name for a participant source.
///
/// Seeds render as `"{seed label} {n}"`. Winner/loser references are parsed
/// as `{bracket}-r{round}-m{index}` and render with the round code; an
/// unparseable reference is `None`.
pub fn derive_placeholder_name_with(
    source: Option<&ParticipantSource>,
    rounds: &BracketRoundMap,
    labels: &PlaceholderLabels,
) -> Option<String> {
    let (label, match_id) = match source? {
        ParticipantSource::Seed { seed, .. } => return Some(format!("{} {}", labels.seed, seed)),
        ParticipantSource::Winner { match_id } => (&labels.winner, match_id),
        ParticipantSource::Loser { match_id } => (&labels.loser, match_id),
    };

    let reference = MatchRef::parse(match_id.as_str())?;
    let code = round_code(reference.round, rounds.max_round(&reference.bracket_id));
    Some(format!("{} {}", label, code))
}

/// Short round label relative to the bracket's last round.
///
/// `F` for the last round, `SF{round}` for the one before it, `R{round}`
/// otherwise or when the bracket's last round is unknown.
pub fn round_code(round: u32, max_round: Option<u32>) -> String {
    match max_round {
        Some(max) if round == max => "F".to_string(),
        Some(max) if max.checked_sub(1) == Some(round) => format!("SF{}", round),
        _ => format!("R{}", round),
    }
}
