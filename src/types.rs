//! Identifier newtypes.
//!
//! Regions, artists and songs are all keyed by short strings (`"1"`, `"a6"`,
//! `"s11"`). Wrapping them keeps a song id from being passed where an artist
//! id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "` from a string.")]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string value.
            pub fn as_str(&self) -> &str {
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
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Geographic region identifier.
    RegionId
);

string_id!(
    /// Artist (author or composer) identifier.
    ArtistId
);

string_id!(
    /// Song identifier.
    SongId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_and_compare() {
        let id = SongId::new("s11");
        assert_eq!(id.to_string(), "s11");
        assert_eq!(id, SongId::from("s11"));
        assert_eq!(id.as_str(), "s11");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&RegionId::new("3")).unwrap_or_default();
        assert_eq!(json, "\"3\"");
    }
}
