use std::sync::Arc;

use crate::calculate::StatsAnalyzer;
use crate::config::AnalysisConfig;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<StatsAnalyzer>,
    pub analysis: Arc<AnalysisConfig>,
}

impl AppState {
    pub fn new(analyzer: StatsAnalyzer, analysis: AnalysisConfig) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            analysis: Arc::new(analysis),
        }
    }

    /// State over the shipped tables and default analysis settings.
    pub fn builtin() -> Self {
        Self::new(StatsAnalyzer::builtin(), AnalysisConfig::default())
    }
}
