//! Configuration types for fixture generation
//!
//! Level 4 - Utilities and configuration

use fixtures_core::{BracketId, Group, Seed, StageId, Venue};
use serde::{Deserialize, Serialize};

/// Shortest match a schedule may contain
pub const MIN_MATCH_DURATION_MINUTES: i64 = 10;
/// Longest break allowed between consecutive kickoffs on a venue
pub const MAX_BREAK_MINUTES: i64 = 180;

pub const DEFAULT_MATCH_DURATION_MINUTES: i64 = 60;
pub const DEFAULT_BREAK_MINUTES: i64 = 15;

fn default_match_duration() -> i64 {
    DEFAULT_MATCH_DURATION_MINUTES
}

fn default_break() -> i64 {
    DEFAULT_BREAK_MINUTES
}

/// Round-robin generation request
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRobinOptions {
    pub stage_id: StageId,
    pub groups: Vec<Group>,
    /// Cycled in this order within each kickoff time
    pub venues: Vec<Venue>,
    /// First kickoff, e.g. `2025-05-01T09:00Z`
    pub start_at: String,
    #[serde(default = "default_match_duration")]
    pub match_duration_minutes: i64,
    #[serde(default = "default_break")]
    pub break_minutes: i64,
}

impl RoundRobinOptions {
    /// Create a request with default match duration and break
    pub fn new(stage_id: impl Into<StageId>, start_at: impl Into<String>) -> Self {
        Self {
            stage_id: stage_id.into(),
            groups: Vec::new(),
            venues: Vec::new(),
            start_at: start_at.into(),
            match_duration_minutes: DEFAULT_MATCH_DURATION_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }

    /// Add a group
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Append venues by id, keeping order
    pub fn with_venues(mut self, venues: &[&str]) -> Self {
        self.venues.extend(venues.iter().map(|&v| Venue::new(v)));
        self
    }

    /// Set match duration in minutes
    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.match_duration_minutes = minutes;
        self
    }

    /// Set break between kickoffs in minutes
    pub fn with_break(mut self, minutes: i64) -> Self {
        self.break_minutes = minutes;
        self
    }
}

/// Knockout bracket request
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnockoutOptions {
    pub stage_id: StageId,
    pub bracket_id: BracketId,
    pub seeds: Vec<Seed>,
    #[serde(default)]
    pub third_place_match: bool,
}

impl KnockoutOptions {
    pub fn new(stage_id: impl Into<StageId>, bracket_id: impl Into<BracketId>, seeds: Vec<Seed>) -> Self {
        Self {
            stage_id: stage_id.into(),
            bracket_id: bracket_id.into(),
            seeds,
            third_place_match: false,
        }
    }

    /// Request a third-place match between the semifinal losers
    pub fn with_third_place(mut self) -> Self {
        self.third_place_match = true;
        self
    }
}

/// Wording used when rendering placeholder participants.
///
/// Only the round code (`R1`, `SF2`, `F`) is fixed; the surrounding words are
/// a display choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderLabels {
    pub seed: String,
    pub winner: String,
    pub loser: String,
}

impl Default for PlaceholderLabels {
    fn default() -> Self {
        Self::norwegian()
    }
}

impl PlaceholderLabels {
    pub fn norwegian() -> Self {
        Self {
            seed: "Seed".to_string(),
            winner: "Vinner av".to_string(),
            loser: "Taper av".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            seed: "Seed".to_string(),
            winner: "Winner of".to_string(),
            loser: "Loser of".to_string(),
        }
    }
}

/// Batch resolution settings
#[derive(Clone, Debug)]
pub struct ResolveConfig {
    /// Wording for rendered names
    pub labels: PlaceholderLabels,
    /// Whether to resolve rows in parallel
    pub parallel: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            labels: PlaceholderLabels::default(),
            parallel: true,
        }
    }
}

impl ResolveConfig {
    /// Set labels
    pub fn with_labels(mut self, labels: PlaceholderLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Resolve on the calling thread only
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
