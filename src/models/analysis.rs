//! Per-request analysis results.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{AdviceTemplate, Rank, Stat};

/// Player stats as submitted: stat name to per-game value.
/// Names outside the tracked set are carried but ignored.
pub type PlayerStats = HashMap<String, f64>;

/// Percentile score per stat against the current rank.
pub type Percentiles = BTreeMap<Stat, f64>;

/// Difference between a player's stat and the target rank's benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatGap {
    pub stat: Stat,
    pub player_value: f64,
    pub target_value: f64,
    /// target - player; negative when the player is ahead
    pub gap: f64,
    pub gap_percentage: f64,
}

/// A prioritized piece of coaching tied to one gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceItem {
    /// 1-based, contiguous
    pub priority: u32,
    pub stat: Stat,
    pub gap_info: StatGap,
    #[serde(flatten)]
    pub template: AdviceTemplate,
}

/// Full analysis of one set of player stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_assessment: String,
    pub advice: Vec<AdviceItem>,
    pub all_gaps: Vec<StatGap>,
    pub percentiles: Percentiles,
    /// Echoed as submitted, recognized or not
    pub current_rank: String,
    /// The rank the gaps were measured against
    pub target_rank: Rank,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_advice_item_flattens_template() {
        let item = AdviceItem {
            priority: 1,
            stat: Stat::Saves,
            gap_info: StatGap {
                stat: Stat::Saves,
                player_value: 1.0,
                target_value: 1.5,
                gap: 0.5,
                gap_percentage: 33.33,
            },
            template: AdviceTemplate::new("Defense", "Stay goal side.", &["Shadow drill"]),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["priority"], json!(1));
        assert_eq!(value["stat"], json!("saves"));
        assert_eq!(value["title"], json!("Defense"));
        assert_eq!(value["drills"], json!(["Shadow drill"]));
        assert_eq!(value["gap_info"]["gap_percentage"], json!(33.33));
        assert!(value.get("template").is_none());
    }

    #[test]
    fn test_percentiles_serialize_by_stat_name() {
        let mut percentiles = Percentiles::new();
        percentiles.insert(Stat::TimeLowBoost, 50.0);
        let value = serde_json::to_value(&percentiles).unwrap();
        assert_eq!(value, json!({ "time_boost_0_25": 50.0 }));
    }
}
