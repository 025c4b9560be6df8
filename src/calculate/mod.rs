//! Stats analysis engine.
//!
//! Compares a player's per-game stats against the benchmark table:
//! - Gaps to a target rank, most severe first
//! - Percentile scores against the current rank
//! - Prioritized advice for the largest gaps
//! - An overall assessment band

use std::cmp::Ordering;
use std::sync::Arc;

use crate::data::{AdviceCatalog, BenchmarkTable};
use crate::models::{
    AdviceItem, AnalysisResult, Assessment, Percentiles, PlayerStats, Rank, StatGap,
};

/// Advice items returned when the caller does not ask for a count.
pub const DEFAULT_ADVICE_COUNT: usize = 3;

/// Number of leading gaps averaged for the overall assessment.
pub const ASSESSMENT_WINDOW: usize = 5;

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value, ties to even, so `31.25` becomes `31.2`
/// and `2.675` becomes `2.67`. Never scales, so huge values survive.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Relative gap in percent, 0 when the target is 0.
pub fn calculate_gap_percentage(gap: f64, target: f64) -> f64 {
    if target == 0.0 {
        0.0
    } else {
        (gap / target) * 100.0
    }
}

/// Percentile-style score: 50 at the benchmark, saturating at 0 and 100.
/// A zero benchmark counts as at par.
pub fn calculate_percentile(player_value: f64, benchmark: f64) -> f64 {
    let raw = if benchmark == 0.0 {
        50.0
    } else {
        (player_value / benchmark) * 50.0
    };
    round_to(raw.clamp(0.0, 100.0), 1)
}

/// Overall assessment message from gaps sorted by severity.
pub fn get_overall_assessment(gaps: &[StatGap]) -> String {
    assess(gaps).message().to_string()
}

/// Assessment band over the leading [`ASSESSMENT_WINDOW`] gaps.
pub fn assess(gaps: &[StatGap]) -> Assessment {
    if gaps.is_empty() {
        return Assessment::Unassessable;
    }

    let window = &gaps[..gaps.len().min(ASSESSMENT_WINDOW)];
    let mean = window.iter().map(|g| g.gap_percentage.abs()).sum::<f64>() / window.len() as f64;
    Assessment::from_mean_gap(mean)
}

/// Pure analyzer over shared, read-only reference tables.
#[derive(Debug, Clone)]
pub struct StatsAnalyzer {
    benchmarks: Arc<BenchmarkTable>,
    advice: Arc<AdviceCatalog>,
}

impl StatsAnalyzer {
    pub fn new(benchmarks: Arc<BenchmarkTable>, advice: Arc<AdviceCatalog>) -> Self {
        Self { benchmarks, advice }
    }

    /// Analyzer over the shipped benchmark table and advice catalog.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(BenchmarkTable::builtin()),
            Arc::new(AdviceCatalog::builtin()),
        )
    }

    pub fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    pub fn advice_catalog(&self) -> &AdviceCatalog {
        &self.advice
    }

    /// The rank gaps are measured against.
    ///
    /// A recognized `target_rank` wins; otherwise the rank after
    /// `current_rank`, where an unrecognized current rank counts as the
    /// lowest one and the top rank stays put.
    pub fn resolve_target_rank(&self, current_rank: &str, target_rank: Option<&str>) -> Rank {
        if let Some(target) = target_rank
            .and_then(Rank::parse)
            .filter(|r| self.benchmarks.contains(*r))
        {
            return target;
        }
        let current = Rank::parse(current_rank).filter(|r| self.benchmarks.contains(*r));
        self.benchmarks.next_rank(current)
    }

    /// Gaps between `player_stats` and the resolved target rank, sorted by
    /// descending absolute gap percentage.
    pub fn calculate_stat_gaps(
        &self,
        player_stats: &PlayerStats,
        current_rank: &str,
        target_rank: Option<&str>,
    ) -> Vec<StatGap> {
        let target = self.resolve_target_rank(current_rank, target_rank);
        self.gaps_against(player_stats, target)
    }

    fn gaps_against(&self, player_stats: &PlayerStats, target: Rank) -> Vec<StatGap> {
        let Some(line) = self.benchmarks.for_rank(target) else {
            return Vec::new();
        };

        let mut gaps: Vec<StatGap> = line
            .iter()
            .filter_map(|(stat, target_value)| {
                let player_value = *player_stats.get(stat.as_str())?;
                let gap = target_value - player_value;
                Some(StatGap {
                    stat,
                    player_value: round_to(player_value, 2),
                    target_value: round_to(target_value, 2),
                    gap: round_to(gap, 2),
                    gap_percentage: round_to(calculate_gap_percentage(gap, target_value), 2),
                })
            })
            .collect();

        // Stable, so equal magnitudes keep table order
        gaps.sort_by(|a, b| {
            b.gap_percentage
                .abs()
                .partial_cmp(&a.gap_percentage.abs())
                .unwrap_or(Ordering::Equal)
        });
        gaps
    }

    /// Advice for the first `top_n` gaps. Gaps whose stat has no catalog
    /// entry are skipped; priorities stay contiguous.
    pub fn generate_advice(&self, gaps: &[StatGap], top_n: usize) -> Vec<AdviceItem> {
        gaps.iter()
            .take(top_n)
            .filter_map(|gap| {
                let template = self.advice.get(gap.stat)?;
                Some((gap, template))
            })
            .enumerate()
            .map(|(i, (gap, template))| AdviceItem {
                priority: i as u32 + 1,
                stat: gap.stat,
                gap_info: gap.clone(),
                template: template.clone(),
            })
            .collect()
    }

    /// Percentile scores against the current rank. Empty when the rank is
    /// unrecognized.
    pub fn calculate_percentiles(&self, player_stats: &PlayerStats, current_rank: &str) -> Percentiles {
        let Some(line) = Rank::parse(current_rank).and_then(|r| self.benchmarks.for_rank(r)) else {
            return Percentiles::new();
        };

        line.iter()
            .filter_map(|(stat, benchmark)| {
                let player_value = *player_stats.get(stat.as_str())?;
                Some((stat, calculate_percentile(player_value, benchmark)))
            })
            .collect()
    }

    /// Full pipeline: gaps, advice, percentiles, assessment.
    pub fn analyze_player(
        &self,
        player_stats: &PlayerStats,
        current_rank: &str,
        target_rank: Option<&str>,
        advice_count: usize,
    ) -> AnalysisResult {
        let target = self.resolve_target_rank(current_rank, target_rank);
        let gaps = self.gaps_against(player_stats, target);
        let advice = self.generate_advice(&gaps, advice_count);
        let percentiles = self.calculate_percentiles(player_stats, current_rank);
        let overall_assessment = get_overall_assessment(&gaps);

        tracing::debug!(
            "Analyzed {} stats for {} -> {}: {} gaps, {} advice items",
            player_stats.len(),
            current_rank,
            target,
            gaps.len(),
            advice.len()
        );

        AnalysisResult {
            overall_assessment,
            advice,
            all_gaps: gaps,
            percentiles,
            current_rank: current_rank.to_string(),
            target_rank: target,
        }
    }
}

impl Default for StatsAnalyzer {
    fn default() -> Self {
        Self::builtin()
    }
}
