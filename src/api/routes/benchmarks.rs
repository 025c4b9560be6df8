use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::data::{BenchmarkTable, StatLine};
use crate::models::{AdviceTemplate, Rank};

// ── Benchmarks Endpoint ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BenchmarkParams {
    pub rank: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RankBenchmarksResponse {
    pub success: bool,
    pub rank: Rank,
    pub benchmarks: StatLine,
}

#[derive(Debug, Serialize)]
pub struct AllBenchmarksResponse {
    pub success: bool,
    pub benchmarks: BenchmarkTable,
}

pub async fn get_benchmarks(
    State(state): State<AppState>,
    Query(params): Query<BenchmarkParams>,
) -> Result<Response, ApiError> {
    let table = state.analyzer.benchmarks();

    // An empty `?rank=` means no filter.
    let Some(name) = params.rank.filter(|r| !r.is_empty()) else {
        return Ok(Json(AllBenchmarksResponse {
            success: true,
            benchmarks: table.clone(),
        })
        .into_response());
    };

    let (rank, line) = Rank::parse(&name)
        .and_then(|r| table.for_rank(r).map(|line| (r, line)))
        .ok_or_else(|| ApiError::NotFound(format!("Rank '{}' not found", name)))?;

    Ok(Json(RankBenchmarksResponse {
        success: true,
        rank,
        benchmarks: line.clone(),
    })
    .into_response())
}

// ── Advice Endpoint ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub success: bool,
    pub stat: String,
    pub template: AdviceTemplate,
}

/// Advice template for a stat name; unknown stats get the generic template.
pub async fn get_advice(
    State(state): State<AppState>,
    Path(stat): Path<String>,
) -> Json<AdviceResponse> {
    let template = state.analyzer.advice_catalog().template_for(&stat).clone();
    Json(AdviceResponse {
        success: true,
        stat,
        template,
    })
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{app, get_json};
    use crate::models::Stat;
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_benchmarks_for_diamond() {
        let (status, body) = get_json(app(), "/api/analysis/benchmarks?rank=Diamond").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["rank"], json!("Diamond"));
        assert_eq!(
            body["benchmarks"],
            json!({
                "score": 650.0,
                "goals": 1.6,
                "assists": 1.2,
                "saves": 2.3,
                "shots": 6.5,
                "shooting_percentage": 38.0,
                "boost_usage": 65.0,
                "avg_speed": 1300.0,
                "time_supersonic": 35.0,
                "time_boost_0_25": 12.0
            })
        );
    }

    #[tokio::test]
    async fn test_benchmarks_rank_with_space() {
        let (status, body) =
            get_json(app(), "/api/analysis/benchmarks?rank=Grand%20Champion").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["benchmarks"]["score"], json!(850.0));
    }

    #[tokio::test]
    async fn test_benchmarks_unknown_rank() {
        let (status, body) = get_json(app(), "/api/analysis/benchmarks?rank=Unranked").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"success": false, "error": "Rank 'Unranked' not found"})
        );
    }

    #[tokio::test]
    async fn test_benchmarks_full_table() {
        let (status, body) = get_json(app(), "/api/analysis/benchmarks").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("rank").is_none());

        let table = body["benchmarks"].as_object().unwrap();
        assert_eq!(table.len(), 8);
        for (rank, stats) in table {
            let keys: Vec<&String> = stats.as_object().unwrap().keys().collect();
            assert_eq!(keys.len(), Stat::ALL.len(), "stats for {}", rank);
        }
        assert_eq!(body["benchmarks"]["Bronze"]["score"], json!(250.0));
    }

    #[tokio::test]
    async fn test_benchmarks_empty_rank_returns_full_table() {
        let (status, body) = get_json(app(), "/api/analysis/benchmarks?rank=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert!(body.get("rank").is_none());
        assert_eq!(body["benchmarks"].as_object().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_advice_for_known_stat() {
        let (status, body) = get_json(app(), "/api/analysis/advice/saves").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stat"], json!("saves"));
        assert_eq!(body["template"]["title"], json!("Defensive Positioning & Saves"));
        assert_eq!(body["template"]["drills"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_advice_falls_back_for_unknown_stat() {
        let (status, body) = get_json(app(), "/api/analysis/advice/demos").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stat"], json!("demos"));
        assert_eq!(body["template"]["title"], json!("General Improvement"));
    }
}
