//! Participant sources and the stored match metadata codec
//!
//! A knockout match whose participants are not decided yet stores where each
//! side comes from. The JSON shape is shared with whatever persists the matches:
//!
//! ```json
//! {
//!   "homeSource": { "type": "winner", "matchId": "b1-r1-m1" },
//!   "awaySource": { "type": "seed", "seed": 1, "entryId": "lions" },
//!   "roundNumber": 2
//! }
//! ```
//!
//! Decoding is lenient at the blob level and strict at the field level: an
//! invalid source becomes `None` as a whole, it is never partially accepted.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::ids::{EntryId, MatchId};

/// Where one side of a knockout match comes from
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParticipantSource {
    /// A known (or to-be-assigned) seed
    Seed {
        seed: u32,
        #[serde(rename = "entryId", default, skip_serializing_if = "Option::is_none")]
        entry_id: Option<EntryId>,
    },
    /// The winner of another bracket match
    Winner {
        #[serde(rename = "matchId")]
        match_id: MatchId,
    },
    /// The loser of another bracket match
    Loser {
        #[serde(rename = "matchId")]
        match_id: MatchId,
    },
}

impl ParticipantSource {
    /// Decode a source object from stored metadata.
    ///
    /// Returns `None` unless `type` is `seed`, `winner` or `loser`, a seed is a
    /// finite number >= 1, and a winner/loser `matchId` is a non-empty string.
    pub fn from_metadata(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        match obj.get("type")?.as_str()? {
            "seed" => {
                let seed = positive_integer(obj.get("seed")?, 1.0)?;
                let entry_id = obj
                    .get("entryId")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(EntryId::from);
                Some(ParticipantSource::Seed { seed, entry_id })
            }
            "winner" => Some(ParticipantSource::Winner {
                match_id: non_empty_match_id(obj.get("matchId")?)?,
            }),
            "loser" => Some(ParticipantSource::Loser {
                match_id: non_empty_match_id(obj.get("matchId")?)?,
            }),
            _ => None,
        }
    }

    /// Encode as a metadata source object
    pub fn to_value(&self) -> Value {
        match self {
            ParticipantSource::Seed { seed, entry_id: Some(entry) } => {
                json!({ "type": "seed", "seed": seed, "entryId": entry.as_str() })
            }
            ParticipantSource::Seed { seed, entry_id: None } => {
                json!({ "type": "seed", "seed": seed })
            }
            ParticipantSource::Winner { match_id } => {
                json!({ "type": "winner", "matchId": match_id.as_str() })
            }
            ParticipantSource::Loser { match_id } => {
                json!({ "type": "loser", "matchId": match_id.as_str() })
            }
        }
    }

    /// Referenced match id for winner/loser sources
    pub fn match_id(&self) -> Option<&MatchId> {
        match self {
            ParticipantSource::Seed { .. } => None,
            ParticipantSource::Winner { match_id } | ParticipantSource::Loser { match_id } => {
                Some(match_id)
            }
        }
    }
}

/// Decode `roundNumber` from a metadata blob.
///
/// Valid only for a finite number > 0, truncated toward zero. Anything that
/// would truncate to zero is invalid.
pub fn parse_round_number(metadata: &Value) -> Option<u32> {
    positive_integer(metadata.get("roundNumber")?, f64::MIN_POSITIVE)
}

/// The decoded metadata blob of one stored match
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchMetadata {
    pub home_source: Option<ParticipantSource>,
    pub away_source: Option<ParticipantSource>,
    pub round_number: Option<u32>,
}

impl MatchMetadata {
    /// Decode a stored blob; unknown or malformed fields decode to `None`
    pub fn parse(value: &Value) -> Self {
        Self {
            home_source: value
                .get("homeSource")
                .and_then(ParticipantSource::from_metadata),
            away_source: value
                .get("awaySource")
                .and_then(ParticipantSource::from_metadata),
            round_number: parse_round_number(value),
        }
    }

    /// Encode, omitting absent fields
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(source) = &self.home_source {
            map.insert("homeSource".to_string(), source.to_value());
        }
        if let Some(source) = &self.away_source {
            map.insert("awaySource".to_string(), source.to_value());
        }
        if let Some(round) = self.round_number {
            map.insert("roundNumber".to_string(), json!(round));
        }
        Value::Object(map)
    }
}

/// Finite number at or above `min`, truncated toward zero, that fits a positive u32
fn positive_integer(value: &Value, min: f64) -> Option<u32> {
    let n = value.as_f64()?;
    if !n.is_finite() || n < min {
        return None;
    }
    let truncated = n.trunc();
    if truncated < 1.0 || truncated > f64::from(u32::MAX) {
        return None;
    }
    Some(truncated as u32)
}

fn non_empty_match_id(value: &Value) -> Option<MatchId> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(MatchId::from)
}
