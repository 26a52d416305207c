//! Match and group records
//!
//! Pure values computed in a single pass from caller input. Persisting them is
//! the caller's business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{BracketId, EntryId, GroupId, MatchId, StageId, VenueId};
use crate::source::{MatchMetadata, ParticipantSource};

/// Whether a group meets once or twice (home and away)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupMode {
    #[default]
    Single,
    Double,
}

/// A closed round-robin group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub entry_ids: Vec<EntryId>,
    #[serde(default)]
    pub mode: GroupMode,
}

impl Group {
    pub fn new(id: impl Into<GroupId>, entry_ids: Vec<EntryId>, mode: GroupMode) -> Self {
        Self {
            id: id.into(),
            entry_ids,
            mode,
        }
    }

    /// Single round-robin group from plain entry names
    pub fn single(id: &str, entries: &[&str]) -> Self {
        Self::new(id, entries.iter().map(|&e| EntryId::from(e)).collect(), GroupMode::Single)
    }

    /// Double round-robin group from plain entry names
    pub fn double(id: &str, entries: &[&str]) -> Self {
        Self::new(id, entries.iter().map(|&e| EntryId::from(e)).collect(), GroupMode::Double)
    }
}

/// A playing field; list order defines the cycling order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
}

impl Venue {
    pub fn new(id: impl Into<VenueId>) -> Self {
        Self { id: id.into() }
    }
}

/// A scheduled round-robin match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMatch {
    pub stage_id: StageId,
    pub group_id: GroupId,
    /// Position of this match's kickoff among all distinct kickoffs of the run (1-based)
    pub round_number: u32,
    pub home_entry_id: EntryId,
    pub away_entry_id: EntryId,
    pub kickoff_at: DateTime<Utc>,
    pub venue_id: VenueId,
}

impl PlannedMatch {
    /// Whether the entry plays in this match (either side)
    pub fn involves(&self, entry: &EntryId) -> bool {
        &self.home_entry_id == entry || &self.away_entry_id == entry
    }
}

/// A knockout seed (1 is the top seed)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub seed: u32,
    pub entry_id: EntryId,
}

impl Seed {
    pub fn new(seed: u32, entry_id: impl Into<EntryId>) -> Self {
        Self {
            seed,
            entry_id: entry_id.into(),
        }
    }

    /// Source referring to this seed directly
    pub fn source(&self) -> ParticipantSource {
        ParticipantSource::Seed {
            seed: self.seed,
            entry_id: Some(self.entry_id.clone()),
        }
    }
}

/// Knockout match kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    #[default]
    Normal,
    Final,
    ThirdPlace,
}

/// A bracket match whose participants may not be known yet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnockoutMatch {
    pub id: MatchId,
    pub stage_id: StageId,
    pub bracket_id: BracketId,
    pub round_number: u32,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub home: ParticipantSource,
    pub away: ParticipantSource,
}

impl KnockoutMatch {
    /// Metadata blob to persist alongside the match row
    pub fn metadata(&self) -> serde_json::Value {
        MatchMetadata {
            home_source: Some(self.home.clone()),
            away_source: Some(self.away.clone()),
            round_number: Some(self.round_number),
        }
        .to_value()
    }

    pub fn is_final(&self) -> bool {
        self.match_type == MatchType::Final
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_deserializes_with_default_mode() {
        let json = r#"{"id": "A", "entryIds": ["x", "y", "z"]}"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.mode, GroupMode::Single);
        assert_eq!(group.entry_ids.len(), 3);
    }

    #[test]
    fn test_group_mode_double() {
        let json = r#"{"id": "B", "entryIds": ["x", "y"], "mode": "double"}"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.mode, GroupMode::Double);
    }

    #[test]
    fn test_match_type_serializes_snake_case() {
        let json = serde_json::to_string(&MatchType::ThirdPlace).unwrap();
        assert_eq!(json, "\"third_place\"");
    }

    #[test]
    fn test_knockout_metadata_carries_round_and_sources() {
        let m = KnockoutMatch {
            id: MatchId::new("b1-r2-m1"),
            stage_id: StageId::new("s1"),
            bracket_id: BracketId::new("b1"),
            round_number: 2,
            match_type: MatchType::Final,
            home: ParticipantSource::Winner {
                match_id: MatchId::new("b1-r1-m1"),
            },
            away: Seed::new(1, "lions").source(),
        };

        let meta = m.metadata();
        assert_eq!(meta["roundNumber"], 2);
        assert_eq!(meta["homeSource"]["type"], "winner");
        assert_eq!(meta["homeSource"]["matchId"], "b1-r1-m1");
        assert_eq!(meta["awaySource"]["seed"], 1);
    }
}
