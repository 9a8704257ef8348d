//! Branded ID newtypes for type safety.
//!
//! Every entity in the Gavel system has a distinct ID type implemented as
//! a newtype wrapper around `String`, so a team ID can never be passed
//! where a trial ID is expected.
//!
//! All IDs are UUID v7 (time-ordered) generated via [`uuid::Uuid::now_v7`].

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generate a new UUID v7 string (time-ordered).
fn new_v7() -> String {
    Uuid::now_v7().to_string()
}

macro_rules! branded_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID (UUID v7, time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(new_v7())
            }

            /// Return the inner string as a slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume self and return the inner `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

branded_id! {
    /// Unique identifier for a trial.
    TrialId
}

branded_id! {
    /// Unique identifier for a tournament.
    TournamentId
}

branded_id! {
    /// Unique identifier for a school team.
    TeamId
}

branded_id! {
    /// Unique identifier for a dismissible promo card.
    PromoId
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_id_new_is_uuid_v7() {
        let id = TrialId::new();
        let parsed = Uuid::parse_str(id.as_str()).expect("should be valid UUID");
        assert_eq!(parsed.get_version(), Some(uuid::Version::SortRand));
    }

    #[test]
    fn ids_are_unique() {
        let a = TrialId::new();
        let b = TrialId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn from_str_ref() {
        let id = TeamId::from("team-42");
        assert_eq!(id.as_str(), "team-42");
    }

    #[test]
    fn display() {
        let id = TournamentId::from("t-2026");
        assert_eq!(format!("{id}"), "t-2026");
    }

    #[test]
    fn into_string() {
        let id = PromoId::from("promo-1");
        let s: String = id.into();
        assert_eq!(s, "promo-1");
    }

    #[test]
    fn serde_roundtrip_is_transparent() {
        let id = TrialId::from("serde-test");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"serde-test\"");
        let back: TrialId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn default_creates_new() {
        let a = TrialId::default();
        let b = TrialId::default();
        assert_ne!(a, b, "default should create unique IDs");
    }

    #[test]
    fn into_inner() {
        let id = TeamId::from("inner");
        assert_eq!(id.into_inner(), "inner");
    }
}
