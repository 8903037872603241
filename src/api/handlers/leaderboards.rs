/// Leaderboard handlers over the persisted score table
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::types::*;
use crate::models::Leaderboard;

async fn leaderboard(
    state: &AppState,
    board: Leaderboard,
    limit: i64,
) -> Result<Json<ApiResponse<Vec<GameSummary>>>, StatusCode> {
    let games = state
        .database
        .list_leaderboard(board, limit)
        .await
        .map_err(|e| {
            error!("Failed to load leaderboard {:?}: {}", board, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let summaries = games
        .into_iter()
        .map(|g| GameSummary {
            id: g.id,
            name: g.name,
            slug: g.slug,
            rage_score: g.rage_score,
        })
        .collect();

    Ok(Json(ApiResponse::success(summaries)))
}

/// GET /api/leaderboards/most-rage
pub async fn leaderboard_most_rage(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<GameSummary>>>, StatusCode> {
    info!("GET /api/leaderboards/most-rage");
    leaderboard(&state, Leaderboard::MostRage, page.limit).await
}

/// GET /api/leaderboards/difficulty
pub async fn leaderboard_difficulty(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<GameSummary>>>, StatusCode> {
    info!("GET /api/leaderboards/difficulty");
    leaderboard(&state, Leaderboard::Difficulty, page.limit).await
}

/// GET /api/leaderboards/technical
pub async fn leaderboard_technical(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<GameSummary>>>, StatusCode> {
    info!("GET /api/leaderboards/technical");
    leaderboard(&state, Leaderboard::Technical, page.limit).await
}

/// GET /api/leaderboards/toxicity
pub async fn leaderboard_toxicity(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<GameSummary>>>, StatusCode> {
    info!("GET /api/leaderboards/toxicity");
    leaderboard(&state, Leaderboard::Toxicity, page.limit).await
}

/// GET /api/leaderboards/cozy
pub async fn leaderboard_cozy(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<GameSummary>>>, StatusCode> {
    info!("GET /api/leaderboards/cozy");
    leaderboard(&state, Leaderboard::Cozy, page.limit).await
}
