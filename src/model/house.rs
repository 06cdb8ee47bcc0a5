//! The two sorting categories ("arcana") a member can be assigned to.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Sorting category. Serialized as the lowercase tags `"light"` and `"dark"`, which are
/// also the values stored in the database and in the persisted allocator bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum House {
    Light,
    Dark,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown house tag '{0}'")]
pub struct UnknownHouse(pub String);

impl House {
    /// Storage tag of the house.
    pub fn as_str(&self) -> &'static str {
        match self {
            House::Light => "light",
            House::Dark => "dark",
        }
    }

    /// Human readable name used in embeds and replies.
    pub fn display_name(&self) -> &'static str {
        match self {
            House::Light => "✨ Light Arcana",
            House::Dark => "🌙 Dark Arcana",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for House {
    type Err = UnknownHouse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(House::Light),
            "dark" => Ok(House::Dark),
            other => Err(UnknownHouse(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_tags() {
        for house in [House::Light, House::Dark] {
            assert_eq!(house.as_str().parse::<House>(), Ok(house));
        }
        assert_eq!(
            "Light".parse::<House>(),
            Err(UnknownHouse("Light".to_string()))
        );
    }

    #[test]
    fn serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&[House::Light, House::Dark]).unwrap();
        assert_eq!(json, r#"["light","dark"]"#);
    }
}
