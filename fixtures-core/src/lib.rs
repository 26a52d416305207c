//! Fixtures Core - Data model for fixture generation
//!
//! This crate provides the values shared by the scheduling engine and its callers:
//! - Opaque identifiers (entries, venues, groups, stages, brackets, matches)
//! - Round-robin and knockout match records
//! - Participant sources ("seed 3", "winner of b1-r2-m1") and their metadata codec
//! - The `{bracket}-r{round}-m{index}` match-id convention
//! - Validation errors

pub mod error;
pub mod ids;
pub mod match_ref;
pub mod model;
pub mod source;

// Re-exports for convenient access
pub use error::ValidationError;
pub use ids::{BracketId, EntryId, GroupId, MatchId, StageId, VenueId};
pub use match_ref::MatchRef;
pub use model::{Group, GroupMode, KnockoutMatch, MatchType, PlannedMatch, Seed, Venue};
pub use source::{parse_round_number, MatchMetadata, ParticipantSource};
