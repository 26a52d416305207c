//! Opaque identifiers
//!
//! Every id the engine handles is a comparison-only token. Each id space gets
//! its own newtype so an entry id can never be passed where a venue id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

opaque_id!(
    /// A competing side (team) within one group or bracket
    EntryId
);
opaque_id!(
    /// A playing field; order within a venue list defines cycling order
    VenueId
);
opaque_id!(
    /// A round-robin group within a stage
    GroupId
);
opaque_id!(
    /// The competition stage that owns generated matches
    StageId
);
opaque_id!(
    /// A single-elimination bracket within a stage
    BracketId
);
opaque_id!(
    /// A knockout match id, normally `{bracket}-r{round}-m{index}`
    MatchId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner() {
        let id = EntryId::new("team-7");
        assert_eq!(id.to_string(), "team-7");
        assert_eq!(id.as_str(), "team-7");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = VenueId::from("pitch-2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"pitch-2\"");

        let back: VenueId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
