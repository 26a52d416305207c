//! Validation errors
//!
//! Raised before any output is produced: a failed request never yields a partial schedule.

use crate::ids::{EntryId, GroupId};

/// A rejected generation request
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("At least one group is required")]
    NoGroups,

    #[error("At least one venue is required")]
    NoVenues,

    #[error("Match duration must be at least {min} minutes (got {minutes})")]
    MatchDurationTooShort { minutes: i64, min: i64 },

    #[error("Break between matches must be between 0 and {max} minutes (got {minutes})")]
    BreakOutOfRange { minutes: i64, max: i64 },

    #[error("Start time is not a valid date-time: {0:?}")]
    InvalidStartTime(String),

    #[error("Group {group} needs at least 2 entries (got {entries})")]
    GroupTooSmall { group: GroupId, entries: usize },

    #[error("Group {group} lists entry {entry} more than once")]
    DuplicateEntry { group: GroupId, entry: EntryId },

    #[error("A knockout bracket needs at least 2 seeds (got {count})")]
    TooFewSeeds { count: usize },

    #[error("Seed numbers must be positive (got {seed})")]
    InvalidSeedNumber { seed: u32 },

    #[error("Seed {seed} is assigned more than once")]
    DuplicateSeed { seed: u32 },

    #[error("Entry {entry} is seeded more than once")]
    DuplicateSeedEntry { entry: EntryId },

    #[error("Cannot split {entries} entries into {groups} groups of at least 2")]
    InvalidGroupCount { entries: usize, groups: usize },

    #[error("Kickoff time overflows the calendar")]
    CalendarOverflow,
}
