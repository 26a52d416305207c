//! Knockout match-id convention: `{bracketId}-r{roundNumber}-m{index}`
//!
//! This is the only id format winner/loser references can be resolved from.
//! Bracket ids may themselves contain dashes; the round and index suffixes are
//! matched from the right.

use std::fmt;

use crate::ids::{BracketId, MatchId};

/// Structured form of a knockout match id
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatchRef {
    pub bracket_id: BracketId,
    pub round: u32,
    pub index: u32,
}

impl MatchRef {
    pub fn new(bracket_id: BracketId, round: u32, index: u32) -> Self {
        Self {
            bracket_id,
            round,
            index,
        }
    }

    /// Parse `{bracket}-r{round}-m{index}`; any other shape is `None`
    pub fn parse(id: &str) -> Option<Self> {
        let (rest, index) = split_numeric_suffix(id, "-m")?;
        let (bracket, round) = split_numeric_suffix(rest, "-r")?;
        if bracket.is_empty() {
            return None;
        }

        Some(Self {
            bracket_id: BracketId::from(bracket),
            round,
            index,
        })
    }

    pub fn to_match_id(&self) -> MatchId {
        MatchId::new(self.to_string())
    }
}

impl fmt::Display for MatchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-r{}-m{}", self.bracket_id, self.round, self.index)
    }
}

impl From<MatchRef> for MatchId {
    fn from(r: MatchRef) -> Self {
        r.to_match_id()
    }
}

/// Split `"{head}{marker}{digits}"` at the last `marker`
fn split_numeric_suffix<'a>(s: &'a str, marker: &str) -> Option<(&'a str, u32)> {
    let pos = s.rfind(marker)?;
    let digits = &s[pos + marker.len()..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&s[..pos], digits.parse().ok()?))
}
