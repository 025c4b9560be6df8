//! Coaching content attached to a stat.

use serde::{Deserialize, Serialize};

/// Human-readable coaching for one stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceTemplate {
    pub title: String,
    pub advice: String,
    /// Suggested training, most useful first
    pub drills: Vec<String>,
}

impl AdviceTemplate {
    pub fn new(title: &str, advice: &str, drills: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            advice: advice.to_string(),
            drills: drills.iter().map(|d| d.to_string()).collect(),
        }
    }
}
