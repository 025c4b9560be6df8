//! Tracked per-game statistics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tracked stat, declared in benchmark-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Score,
    Goals,
    Assists,
    Saves,
    Shots,
    ShootingPercentage,
    BoostUsage,
    AvgSpeed,
    TimeSupersonic,
    /// Time spent with 0-25 boost
    #[serde(rename = "time_boost_0_25")]
    TimeLowBoost,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown stat: {0}")]
pub struct UnknownStat(pub String);

impl Stat {
    pub const ALL: [Stat; 10] = [
        Stat::Score,
        Stat::Goals,
        Stat::Assists,
        Stat::Saves,
        Stat::Shots,
        Stat::ShootingPercentage,
        Stat::BoostUsage,
        Stat::AvgSpeed,
        Stat::TimeSupersonic,
        Stat::TimeLowBoost,
    ];

    /// Wire name, as used in request and response bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Score => "score",
            Stat::Goals => "goals",
            Stat::Assists => "assists",
            Stat::Saves => "saves",
            Stat::Shots => "shots",
            Stat::ShootingPercentage => "shooting_percentage",
            Stat::BoostUsage => "boost_usage",
            Stat::AvgSpeed => "avg_speed",
            Stat::TimeSupersonic => "time_supersonic",
            Stat::TimeLowBoost => "time_boost_0_25",
        }
    }
}

impl FromStr for Stat {
    type Err = UnknownStat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| UnknownStat(s.to_string()))
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
