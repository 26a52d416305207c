//! Round-robin fixture generation - circle method with shared slots
//!
//! Level 1 - Orchestration and Level 2 - Phases

use chrono::{DateTime, Utc};
use fixtures_core::{EntryId, Group, GroupMode, PlannedMatch, ValidationError};
use rustc_hash::FxHashSet;

use crate::config::{RoundRobinOptions, MAX_BREAK_MINUTES, MIN_MATCH_DURATION_MINUTES};
use crate::slots::{parse_start_time, SlotAllocator};

/// One home/away pairing before it gets a slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pairing {
    pub home: EntryId,
    pub away: EntryId,
}

impl Pairing {
    /// Same pairing with sides swapped
    pub fn reversed(&self) -> Self {
        Self {
            home: self.away.clone(),
            away: self.home.clone(),
        }
    }
}

/// Generated round-robin schedule, ordered by kickoff
#[derive(Clone, Debug, Default)]
pub struct RoundRobinSchedule {
    pub matches: Vec<PlannedMatch>,
}

impl RoundRobinSchedule {
    /// Number of global rounds (distinct kickoff times)
    pub fn rounds(&self) -> u32 {
        self.matches.iter().map(|m| m.round_number).max().unwrap_or(0)
    }

    /// Distinct kickoff times in order
    pub fn kickoff_slots(&self) -> Vec<DateTime<Utc>> {
        let mut slots: Vec<DateTime<Utc>> = self.matches.iter().map(|m| m.kickoff_at).collect();
        slots.dedup();
        slots
    }

    /// All matches an entry plays in
    pub fn matches_for(&self, entry: &EntryId) -> Vec<&PlannedMatch> {
        self.matches.iter().filter(|m| m.involves(entry)).collect()
    }

    /// All matches sharing a global round number
    pub fn matches_in_round(&self, round: u32) -> Vec<&PlannedMatch> {
        self.matches.iter().filter(|m| m.round_number == round).collect()
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Generate round-robin fixtures for every group of a stage.
///
/// Groups are paired with the circle method and all pairings draw from one
/// shared slot sequence, group by group, so groups sharing venues compete for
/// the same kickoff times. Round numbers are then assigned from the actual
/// kickoff order across all groups.
pub fn generate(options: &RoundRobinOptions) -> Result<RoundRobinSchedule, ValidationError> {
    let start = validate(options)?;

    let mut slots = SlotAllocator::new(
        start,
        options.match_duration_minutes,
        options.break_minutes,
        &options.venues,
    );

    let mut matches = Vec::new();
    for group in &options.groups {
        let pairings = group_pairings(group);
        tracing::debug!(
            "Group {}: {} entries, {} matches ({:?})",
            group.id,
            group.entry_ids.len(),
            pairings.len(),
            group.mode
        );

        for pairing in pairings {
            let slot = slots.next().ok_or(ValidationError::CalendarOverflow)?;
            matches.push(PlannedMatch {
                stage_id: options.stage_id.clone(),
                group_id: group.id.clone(),
                round_number: 0,
                home_entry_id: pairing.home,
                away_entry_id: pairing.away,
                kickoff_at: slot.kickoff_at,
                venue_id: slot.venue_id,
            });
        }
    }

    assign_round_numbers(&mut matches);

    let schedule = RoundRobinSchedule { matches };
    tracing::info!(
        "Generated {} round-robin matches for stage {} across {} groups in {} rounds",
        schedule.matches.len(),
        options.stage_id,
        options.groups.len(),
        schedule.rounds()
    );

    Ok(schedule)
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Check every precondition before anything is generated
fn validate(options: &RoundRobinOptions) -> Result<DateTime<Utc>, ValidationError> {
    if options.groups.is_empty() {
        return Err(ValidationError::NoGroups);
    }
    if options.venues.is_empty() {
        return Err(ValidationError::NoVenues);
    }
    if options.match_duration_minutes < MIN_MATCH_DURATION_MINUTES {
        return Err(ValidationError::MatchDurationTooShort {
            minutes: options.match_duration_minutes,
            min: MIN_MATCH_DURATION_MINUTES,
        });
    }
    if !(0..=MAX_BREAK_MINUTES).contains(&options.break_minutes) {
        return Err(ValidationError::BreakOutOfRange {
            minutes: options.break_minutes,
            max: MAX_BREAK_MINUTES,
        });
    }

    let start = parse_start_time(&options.start_at)?;

    for group in &options.groups {
        validate_group(group)?;
    }

    Ok(start)
}

/// All pairings of a group in play order; a double group repeats the
/// first pass mirrored, after it
pub fn group_pairings(group: &Group) -> Vec<Pairing> {
    let first_pass: Vec<Pairing> = circle_rounds(&group.entry_ids).into_iter().flatten().collect();

    match group.mode {
        GroupMode::Single => first_pass,
        GroupMode::Double => {
            let second_pass: Vec<Pairing> = first_pass.iter().map(Pairing::reversed).collect();
            first_pass.into_iter().chain(second_pass).collect()
        }
    }
}

/// Number matches by kickoff: equal instants share a round, each later instant
/// starts the next one
fn assign_round_numbers(matches: &mut [PlannedMatch]) {
    matches.sort_by_key(|m| m.kickoff_at);

    let mut round = 0;
    let mut current: Option<DateTime<Utc>> = None;
    for m in matches.iter_mut() {
        if current != Some(m.kickoff_at) {
            round += 1;
            current = Some(m.kickoff_at);
        }
        m.round_number = round;
    }
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

fn validate_group(group: &Group) -> Result<(), ValidationError> {
    let mut seen = FxHashSet::default();
    for entry in &group.entry_ids {
        if !seen.insert(entry) {
            return Err(ValidationError::DuplicateEntry {
                group: group.id.clone(),
                entry: entry.clone(),
            });
        }
    }

    if group.entry_ids.len() < 2 {
        return Err(ValidationError::GroupTooSmall {
            group: group.id.clone(),
            entries: group.entry_ids.len(),
        });
    }

    Ok(())
}

/// Circle-method rounds for one pass over `entries`.
///
/// An odd field gets a bye placeholder; pairings touching it are dropped. The
/// first team stays fixed while the rest rotate one step per round. Home side
/// alternates on `round % 2 == slot % 2`.
pub fn circle_rounds(entries: &[EntryId]) -> Vec<Vec<Pairing>> {
    let mut teams: Vec<Option<&EntryId>> = entries.iter().map(Some).collect();
    if teams.len() % 2 == 1 {
        teams.push(None);
    }

    let n = teams.len();
    if n < 2 {
        return Vec::new();
    }

    let fixed = teams[0];
    let mut rotating: Vec<Option<&EntryId>> = teams[1..].to_vec();
    let mut rounds = Vec::with_capacity(n - 1);

    for r in 0..n - 1 {
        let round_teams: Vec<Option<&EntryId>> =
            std::iter::once(fixed).chain(rotating.iter().copied()).collect();

        let mut round = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            let (Some(a), Some(b)) = (round_teams[i], round_teams[n - 1 - i]) else {
                continue;
            };
            let (home, away) = if r % 2 == i % 2 { (a, b) } else { (b, a) };
            round.push(Pairing {
                home: home.clone(),
                away: away.clone(),
            });
        }
        rounds.push(round);

        rotating.rotate_right(1);
    }

    rounds
}
