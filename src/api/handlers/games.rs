/// Game listing, detail, and comparison handlers
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::types::*;
use crate::database::Database;
use crate::models::Game;

/// Load a game plus its persisted breakdown, or None if either is missing
async fn load_game_detail(
    database: &Database,
    game: Option<Game>,
) -> crate::Result<Option<GameDetail>> {
    let Some(game) = game else {
        return Ok(None);
    };
    let Some(score) = database.get_rage_score(game.id).await? else {
        return Ok(None);
    };
    Ok(Some(GameDetail {
        id: game.id,
        name: game.name,
        slug: game.slug,
        rage: score.into(),
    }))
}

/// List games with scores (GET /api/games)
pub async fn list_games(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<GameSummary>>>, StatusCode> {
    info!("GET /api/games limit={} offset={}", page.limit, page.offset);

    let games = state
        .database
        .list_games_with_scores(page.limit, page.offset)
        .await
        .map_err(|e| {
            error!("Failed to list games: {}", e);
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

/// Get one game with its breakdown (GET /api/games/:id)
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<ApiResponse<GameDetail>>, StatusCode> {
    info!("GET /api/games/{}", game_id);

    let game = state.database.get_game(game_id).await.map_err(|e| {
        error!("Failed to load game {}: {}", game_id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let detail = load_game_detail(&state.database, game)
        .await
        .map_err(|e| {
            error!("Failed to load score for game {}: {}", game_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(ApiResponse::success(detail)))
}

/// Get one game by slug (GET /api/games/slug/:slug)
pub async fn get_game_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<GameDetail>>, StatusCode> {
    info!("GET /api/games/slug/{}", slug);

    let game = state.database.get_game_by_slug(&slug).await.map_err(|e| {
        error!("Failed to load game {}: {}", slug, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let detail = load_game_detail(&state.database, game)
        .await
        .map_err(|e| {
            error!("Failed to load score for game {}: {}", slug, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(ApiResponse::success(detail)))
}

/// Compare two games side by side (GET /api/compare?a=&b=)
pub async fn compare_games(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<ApiResponse<GameComparison>>, StatusCode> {
    info!("GET /api/compare a={} b={}", query.a, query.b);

    let mut sides = Vec::with_capacity(2);
    for game_id in [query.a, query.b] {
        let game = state.database.get_game(game_id).await.map_err(|e| {
            error!("Failed to load game {}: {}", game_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        let detail = load_game_detail(&state.database, game)
            .await
            .map_err(|e| {
                error!("Failed to load score for game {}: {}", game_id, e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::NOT_FOUND)?;
        sides.push(detail);
    }

    let right = sides.pop().ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    let left = sides.pop().ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(ApiResponse::success(GameComparison { left, right })))
}
