//! Competitive ranks and their progression order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Competitive rank, declared in progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Champion,
    #[serde(rename = "Grand Champion")]
    GrandChampion,
    #[serde(rename = "Supersonic Legend")]
    SupersonicLegend,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown rank: {0}")]
pub struct UnknownRank(pub String);

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 8] = [
        Rank::Bronze,
        Rank::Silver,
        Rank::Gold,
        Rank::Platinum,
        Rank::Diamond,
        Rank::Champion,
        Rank::GrandChampion,
        Rank::SupersonicLegend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
            Rank::Diamond => "Diamond",
            Rank::Champion => "Champion",
            Rank::GrandChampion => "Grand Champion",
            Rank::SupersonicLegend => "Supersonic Legend",
        }
    }

    /// Parse a rank name, returning `None` for anything unrecognized.
    pub fn parse(name: &str) -> Option<Rank> {
        name.parse().ok()
    }
}

impl FromStr for Rank {
    type Err = UnknownRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRank(s.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
