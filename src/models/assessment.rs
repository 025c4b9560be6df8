//! Overall performance bands.

use serde::{Deserialize, Serialize};

/// Overall standing derived from the mean relative gap to the target rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    /// No overlapping stats to judge
    Unassessable,
    AtRank,
    CloseToNextRank,
    RoomForImprovement,
    SignificantImprovementNeeded,
}

impl Assessment {
    /// Band for a mean absolute gap percentage.
    pub fn from_mean_gap(mean_gap: f64) -> Self {
        if mean_gap < 10.0 {
            Assessment::AtRank
        } else if mean_gap < 25.0 {
            Assessment::CloseToNextRank
        } else if mean_gap < 40.0 {
            Assessment::RoomForImprovement
        } else {
            Assessment::SignificantImprovementNeeded
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Assessment::Unassessable => "Unable to assess performance with current data.",
            Assessment::AtRank => {
                "You're performing at or above your rank level! Focus on consistency and you'll rank up soon."
            }
            Assessment::CloseToNextRank => {
                "You're close to the next rank. Focus on the key areas below to push through."
            }
            Assessment::RoomForImprovement => {
                "There's room for improvement. Concentrate on the priority areas to advance your rank."
            }
            Assessment::SignificantImprovementNeeded => {
                "Significant improvement needed. Focus on fundamentals in the priority areas below - you've got this!"
            }
        }
    }
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
