//! Knockout bracket construction - seeded single elimination
//!
//! Level 1 - Orchestration and Level 2 - Phases
//!
//! Knockout matches are not time-scheduled here; the caller slots them later.

use fixtures_core::{
    BracketId, KnockoutMatch, MatchId, MatchRef, MatchType, ParticipantSource, Seed, StageId,
    ValidationError,
};
use rustc_hash::FxHashSet;

use crate::config::KnockoutOptions;

/// Generated bracket, ordered by round
#[derive(Clone, Debug, Default)]
pub struct KnockoutBracket {
    pub matches: Vec<KnockoutMatch>,
}

impl KnockoutBracket {
    /// The unique final
    pub fn final_match(&self) -> Option<&KnockoutMatch> {
        self.matches.iter().find(|m| m.match_type == MatchType::Final)
    }

    pub fn third_place_match(&self) -> Option<&KnockoutMatch> {
        self.matches.iter().find(|m| m.match_type == MatchType::ThirdPlace)
    }

    /// Number of rounds (the final's round number)
    pub fn rounds(&self) -> u32 {
        self.matches.iter().map(|m| m.round_number).max().unwrap_or(0)
    }

    pub fn matches_in_round(&self, round: u32) -> Vec<&KnockoutMatch> {
        self.matches.iter().filter(|m| m.round_number == round).collect()
    }

    /// Look up a match by id
    pub fn get(&self, id: &MatchId) -> Option<&KnockoutMatch> {
        self.matches.iter().find(|m| &m.id == id)
    }
}

/// What occupies one bracket position going into a round
#[derive(Clone, Debug)]
enum BracketSlot {
    /// Nobody (a bye position)
    Empty,
    /// A participant known without playing, i.e. a seed
    Direct(ParticipantSource),
    /// Whoever wins this match
    Played(MatchId),
}

impl BracketSlot {
    fn source(&self) -> Option<ParticipantSource> {
        match self {
            BracketSlot::Empty => None,
            BracketSlot::Direct(source) => Some(source.clone()),
            BracketSlot::Played(match_id) => Some(ParticipantSource::Winner {
                match_id: match_id.clone(),
            }),
        }
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Build a complete single-elimination bracket from a seed list.
///
/// The field is padded to the next power of two; the missing bottom seeds are
/// byes. A seed facing a bye advances untouched as a `Seed` source instead of
/// playing a match. The last remaining match is the final, and an optional
/// third-place match pits the two semifinal losers against each other.
pub fn build(options: &KnockoutOptions) -> Result<KnockoutBracket, ValidationError> {
    let ranked = validate_seeds(&options.seeds)?;
    let size = ranked.len().next_power_of_two();

    let mut emitter = MatchEmitter::new(&options.stage_id, &options.bracket_id);

    let mut slots: Vec<BracketSlot> = bracket_order(size)
        .into_iter()
        .map(|rank| match ranked.get(rank - 1) {
            Some(seed) => BracketSlot::Direct(seed.source()),
            None => BracketSlot::Empty,
        })
        .collect();

    while slots.len() > 1 {
        slots = play_round(slots, &mut emitter);
    }

    let final_id = match slots.pop() {
        Some(BracketSlot::Played(id)) => id,
        _ => return Err(ValidationError::TooFewSeeds { count: ranked.len() }),
    };
    let final_sources = emitter.mark_final(&final_id);

    if options.third_place_match {
        match final_sources {
            Some((ParticipantSource::Winner { match_id: a }, ParticipantSource::Winner { match_id: b })) => {
                emitter.emit_third_place(a, b);
            }
            _ => tracing::warn!(
                "Bracket {}: third-place match requested but there are no two semifinals",
                options.bracket_id
            ),
        }
    }

    let bracket = KnockoutBracket {
        matches: emitter.finish(),
    };
    tracing::info!(
        "Built bracket {} for stage {}: {} seeds, {} byes, {} matches in {} rounds",
        options.bracket_id,
        options.stage_id,
        ranked.len(),
        size - ranked.len(),
        bracket.matches.len(),
        bracket.rounds()
    );

    Ok(bracket)
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Seeds ordered by seed number, after checking the list is playable
fn validate_seeds(seeds: &[Seed]) -> Result<Vec<&Seed>, ValidationError> {
    if seeds.len() < 2 {
        return Err(ValidationError::TooFewSeeds { count: seeds.len() });
    }

    let mut numbers = FxHashSet::default();
    let mut entries = FxHashSet::default();
    for seed in seeds {
        if seed.seed == 0 {
            return Err(ValidationError::InvalidSeedNumber { seed: seed.seed });
        }
        if !numbers.insert(seed.seed) {
            return Err(ValidationError::DuplicateSeed { seed: seed.seed });
        }
        if !entries.insert(&seed.entry_id) {
            return Err(ValidationError::DuplicateSeedEntry {
                entry: seed.entry_id.clone(),
            });
        }
    }

    let mut ranked: Vec<&Seed> = seeds.iter().collect();
    ranked.sort_by_key(|s| s.seed);
    Ok(ranked)
}

/// Pair adjacent slots into the next round's slots
fn play_round(slots: Vec<BracketSlot>, emitter: &mut MatchEmitter) -> Vec<BracketSlot> {
    emitter.start_round();

    let mut next = Vec::with_capacity(slots.len() / 2);
    let mut iter = slots.into_iter();
    while let (Some(home), Some(away)) = (iter.next(), iter.next()) {
        next.push(advance(home, away, emitter));
    }

    tracing::debug!(
        "Bracket {} round {}: {} matches",
        emitter.bracket_id,
        emitter.round,
        emitter.index
    );
    next
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// One bracket position of the next round from two of this round
fn advance(home: BracketSlot, away: BracketSlot, emitter: &mut MatchEmitter) -> BracketSlot {
    match (home.source(), away.source()) {
        (Some(home), Some(away)) => BracketSlot::Played(emitter.emit(home, away)),
        (Some(_), None) => home,
        (None, Some(_)) => away,
        (None, None) => BracketSlot::Empty,
    }
}

/// Standard seed ordering for a power-of-two bracket.
///
/// Keeps top seeds apart as long as possible: 4 gives `[1, 4, 2, 3]`,
/// 8 gives `[1, 8, 4, 5, 2, 7, 3, 6]`. Consecutive pairs meet in round one.
pub fn bracket_order(size: usize) -> Vec<usize> {
    let mut order = vec![1];
    while order.len() < size {
        let mirror = order.len() * 2 + 1;
        order = order.iter().flat_map(|&s| [s, mirror - s]).collect();
    }
    order
}

/// Accumulates matches and hands out `{bracket}-r{round}-m{index}` ids.
///
/// A round number is only consumed once a match is emitted in it, so round
/// numbers stay contiguous.
struct MatchEmitter<'a> {
    stage_id: &'a StageId,
    bracket_id: &'a BracketId,
    round: u32,
    index: u32,
    matches: Vec<KnockoutMatch>,
}

impl<'a> MatchEmitter<'a> {
    fn new(stage_id: &'a StageId, bracket_id: &'a BracketId) -> Self {
        Self {
            stage_id,
            bracket_id,
            round: 0,
            index: 0,
            matches: Vec::new(),
        }
    }

    fn start_round(&mut self) {
        if self.index > 0 || self.round == 0 {
            self.round += 1;
        }
        self.index = 0;
    }

    fn emit_typed(
        &mut self,
        match_type: MatchType,
        home: ParticipantSource,
        away: ParticipantSource,
    ) -> MatchId {
        self.index += 1;
        let id: MatchId = MatchRef::new(self.bracket_id.clone(), self.round, self.index).into();
        self.matches.push(KnockoutMatch {
            id: id.clone(),
            stage_id: self.stage_id.clone(),
            bracket_id: self.bracket_id.clone(),
            round_number: self.round,
            match_type,
            home,
            away,
        });
        id
    }

    fn emit(&mut self, home: ParticipantSource, away: ParticipantSource) -> MatchId {
        self.emit_typed(MatchType::Normal, home, away)
    }

    /// Mark the final and return its two sources
    fn mark_final(&mut self, id: &MatchId) -> Option<(ParticipantSource, ParticipantSource)> {
        let m = self.matches.iter_mut().find(|m| &m.id == id)?;
        m.match_type = MatchType::Final;
        Some((m.home.clone(), m.away.clone()))
    }

    /// Third-place match in the final's round, between the semifinal losers
    fn emit_third_place(&mut self, semi_a: MatchId, semi_b: MatchId) -> MatchId {
        self.emit_typed(
            MatchType::ThirdPlace,
            ParticipantSource::Loser { match_id: semi_a },
            ParticipantSource::Loser { match_id: semi_b },
        )
    }

    fn finish(self) -> Vec<KnockoutMatch> {
        self.matches
    }
}
