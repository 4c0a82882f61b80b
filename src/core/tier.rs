//! Word list difficulty tiers

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three fixed word list difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Error returned when a tier name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tier '{0}' (expected easy, medium or hard)")]
pub struct TierParseError(pub String);

impl Tier {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Self::Easy),
            "medium" | "m" | "2" => Ok(Self::Medium),
            "hard" | "h" | "3" => Ok(Self::Hard),
            _ => Err(TierParseError(s.to_string())),
        }
    }
}
