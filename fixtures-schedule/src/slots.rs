//! Slot allocation - (kickoff, venue) pairs for round-robin matches
//!
//! Level 3 - Steps

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use fixtures_core::{ValidationError, Venue, VenueId};

/// One (kickoff time, venue) pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub kickoff_at: DateTime<Utc>,
    pub venue_id: VenueId,
}

/// Endless, deterministic sequence of slots.
///
/// All venues are used in input order at one kickoff time before the kickoff
/// advances by `duration + break`. Owned by a single generation run and not
/// restartable.
#[derive(Clone, Debug)]
pub struct SlotAllocator {
    start: DateTime<Utc>,
    step_minutes: i64,
    venues: Vec<VenueId>,
    cursor: u64,
}

impl SlotAllocator {
    pub fn new(
        start: DateTime<Utc>,
        duration_minutes: i64,
        break_minutes: i64,
        venues: &[Venue],
    ) -> Self {
        Self {
            start,
            step_minutes: duration_minutes.saturating_add(break_minutes),
            venues: venues.iter().map(|v| v.id.clone()).collect(),
            cursor: 0,
        }
    }

    /// Slots handed out so far
    pub fn allocated(&self) -> u64 {
        self.cursor
    }

    fn slot_at(&self, cursor: u64) -> Option<Slot> {
        let venue_count = self.venues.len() as u64;
        if venue_count == 0 {
            return None;
        }

        let time_index = i64::try_from(cursor / venue_count).ok()?;
        let venue_index = (cursor % venue_count) as usize;
        let offset = Duration::try_minutes(self.step_minutes.checked_mul(time_index)?)?;

        Some(Slot {
            kickoff_at: self.start.checked_add_signed(offset)?,
            venue_id: self.venues[venue_index].clone(),
        })
    }
}

impl Iterator for SlotAllocator {
    type Item = Slot;

    /// Next slot; `None` only without venues or past the end of the calendar
    fn next(&mut self) -> Option<Slot> {
        let slot = self.slot_at(self.cursor)?;
        self.cursor += 1;
        Some(slot)
    }
}

/// Parse a start instant.
///
/// Accepts RFC 3339 with or without seconds (`2025-05-01T09:00Z`), date-times
/// without an offset (taken as UTC) and bare dates (UTC midnight).
pub fn parse_start_time(input: &str) -> Result<DateTime<Utc>, ValidationError> {
    let s = input.trim();
    let invalid = || ValidationError::InvalidStartTime(input.to_string());

    if s.is_empty() {
        return Err(invalid());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    let naive = s.strip_suffix(['Z', 'z']).unwrap_or(s);
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Ok(dt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(invalid())
}
