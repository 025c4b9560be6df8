use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{AnalysisResult, PlayerStats};

// ── Types ────────────────────────────────────────────────────────

/// One set of stats to analyze.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: PlayerStats,
    pub current_rank: Option<String>,
    pub target_rank: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub games: Vec<AnalyzeRequest>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResponse {
    pub success: bool,
    pub count: usize,
    pub results: Vec<AnalyzeResponse>,
}

// ── Helpers ──────────────────────────────────────────────────────

/// An explicit `null` reads as the field's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether a JSON value counts as "no data": null, false, zero, or an
/// empty string, array or object.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Parse a raw JSON body. `None` for an empty body or a blank value.
fn parse_body(body: &[u8]) -> Result<Option<Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {}", e)))?;

    if is_blank(&value) {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

fn run_analysis(state: &AppState, request: &AnalyzeRequest) -> AnalyzeResponse {
    let current_rank = request
        .current_rank
        .as_deref()
        .unwrap_or(state.analysis.default_rank.as_str());

    let result = state.analyzer.analyze_player(
        &request.stats,
        current_rank,
        request.target_rank.as_deref(),
        state.analysis.advice_count,
    );

    AnalyzeResponse {
        success: true,
        result,
    }
}

// ── Handlers ─────────────────────────────────────────────────────

pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let value = parse_body(&body)?
        .ok_or_else(|| ApiError::BadRequest("No data provided".to_string()))?;

    let request: AnalyzeRequest = serde_json::from_value(value)
        .map_err(|e| ApiError::Internal(format!("Analysis failed: {}", e)))?;

    if request.stats.is_empty() {
        return Err(ApiError::BadRequest(
            "Stats dictionary is required".to_string(),
        ));
    }

    let response = run_analysis(&state, &request);
    tracing::debug!(
        "Analyzed {} stats at {} (target {})",
        request.stats.len(),
        response.result.current_rank,
        response.result.target_rank
    );

    Ok(Json(response))
}

/// Analyze several games. A malformed game fails the whole batch.
pub async fn batch_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BatchAnalyzeResponse>, ApiError> {
    let Some(value) = parse_body(&body)? else {
        return Err(ApiError::BadRequest("No games provided".to_string()));
    };

    let request: BatchAnalyzeRequest = serde_json::from_value(value)
        .map_err(|e| ApiError::Internal(format!("Batch analysis failed: {}", e)))?;

    if request.games.is_empty() {
        return Err(ApiError::BadRequest("No games provided".to_string()));
    }

    let results: Vec<AnalyzeResponse> = request
        .games
        .iter()
        .map(|game| run_analysis(&state, game))
        .collect();

    tracing::debug!("Batch analyzed {} games", results.len());

    Ok(Json(BatchAnalyzeResponse {
        success: true,
        count: results.len(),
        results,
    }))
}
