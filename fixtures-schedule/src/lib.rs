//! Fixtures Schedule - Fixture generation and bracket resolution
//!
//! This crate turns competing entries into concrete matches:
//! - Round-robin fixtures (circle method) on shared venues and kickoff slots
//! - Seeded single-elimination brackets with byes and a third-place match
//! - Display names for not-yet-known participants ("Vinner av SF2")
//! - Seeded draws into groups or seed lists
//!
//! Everything here is synchronous and deterministic: the same request always
//! yields the same matches, so callers may retry a generation freely.
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: round_robin::generate, knockout::build (orchestration)
//! - Level 2: validation, pairing passes, round numbering, batch resolution (phases)
//! - Level 3: slot allocation, circle rounds, seed ordering, round codes (steps)
//! - Level 4: configuration

mod config;
mod draw;
mod knockout;
mod resolver;
mod round_robin;
mod slots;

pub use config::{
    KnockoutOptions, PlaceholderLabels, ResolveConfig, RoundRobinOptions,
    DEFAULT_BREAK_MINUTES, DEFAULT_MATCH_DURATION_MINUTES, MAX_BREAK_MINUTES,
    MIN_MATCH_DURATION_MINUTES,
};
pub use draw::{draw_groups, draw_seeds};
pub use knockout::{bracket_order, build as build_bracket, KnockoutBracket};
pub use resolver::{
    build_bracket_round_map, derive_placeholder_name, derive_placeholder_name_with,
    resolve_placeholders, round_code, BracketRoundMap, MatchRow, ResolvedPlaceholders,
};
pub use round_robin::{
    circle_rounds, generate as generate_round_robin, group_pairings, Pairing, RoundRobinSchedule,
};
pub use slots::{parse_start_time, Slot, SlotAllocator};
