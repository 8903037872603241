/// Request-scoped rage views: word cloud, timeline, and raw feeds.
/// These are computed fresh per request and never persisted.
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::types::*;
use crate::scoring;
use crate::scoring::RageTimelinePoint;
use crate::scoring::RageWord;
use crate::scoring::TimelineEntry;

/// Rage word cloud (GET /api/games/:id/rage-words)
pub async fn get_rage_words(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
    Query(query): Query<WordCloudQuery>,
) -> Result<Json<ApiResponse<Vec<RageWord>>>, StatusCode> {
    info!("GET /api/games/{}/rage-words limit={}", game_id, query.limit);

    let reviews = state.database.list_reviews(game_id).await.map_err(|e| {
        error!("Failed to load reviews for game {}: {}", game_id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let posts = state
        .database
        .list_reddit_posts(game_id)
        .await
        .map_err(|e| {
            error!("Failed to load reddit posts for game {}: {}", game_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let mut texts: Vec<String> = Vec::new();
    for review in reviews {
        if let Some(text) = review.review_text {
            texts.push(text);
        }
    }
    for post in posts {
        let mut chunk = String::new();
        if let Some(title) = post.title {
            chunk.push_str(&title);
            chunk.push(' ');
        }
        if let Some(body) = post.body {
            chunk.push_str(&body);
        }
        if !chunk.is_empty() {
            texts.push(chunk);
        }
    }

    let words = scoring::extract_rage_words(texts.iter().map(String::as_str), query.limit);

    Ok(Json(ApiResponse::success(words)))
}

/// Daily rage timeline (GET /api/games/:id/rage-timeline)
pub async fn get_rage_timeline(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<RageTimelinePoint>>>, StatusCode> {
    info!("GET /api/games/{}/rage-timeline", game_id);

    let reviews = state.database.list_reviews(game_id).await.map_err(|e| {
        error!("Failed to load reviews for game {}: {}", game_id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let entries: Vec<TimelineEntry> = reviews
        .into_iter()
        .map(|r| TimelineEntry {
            is_positive: r.is_positive,
            created_at: r.created_at_steam,
            ingested_at: Some(r.ingested_at),
        })
        .collect();

    let points = scoring::build_rage_timeline(&entries);

    Ok(Json(ApiResponse::success(points)))
}

/// Recent review feed (GET /api/games/:id/reviews)
pub async fn get_reviews(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ApiResponse<Vec<ReviewOut>>>, StatusCode> {
    info!("GET /api/games/{}/reviews limit={}", game_id, query.limit);

    let reviews = state
        .database
        .list_recent_reviews(game_id, query.limit)
        .await
        .map_err(|e| {
            error!("Failed to load reviews for game {}: {}", game_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let out = reviews
        .into_iter()
        .map(|r| ReviewOut {
            is_positive: r.is_positive,
            language: r.language,
            review_text: r.review_text.unwrap_or_default(),
            created_at_steam: r.created_at_steam,
        })
        .collect();

    Ok(Json(ApiResponse::success(out)))
}

/// Top Reddit post feed (GET /api/games/:id/reddit)
pub async fn get_reddit_posts(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ApiResponse<Vec<RedditPostOut>>>, StatusCode> {
    info!("GET /api/games/{}/reddit limit={}", game_id, query.limit);

    let posts = state
        .database
        .list_top_reddit_posts(game_id, query.limit)
        .await
        .map_err(|e| {
            error!("Failed to load reddit posts for game {}: {}", game_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let out = posts
        .into_iter()
        .map(|p| RedditPostOut {
            title: p.title.unwrap_or_default(),
            body: p.body.unwrap_or_default(),
            upvotes: p.upvotes,
            num_comments: p.num_comments,
            created_utc: p.created_utc,
        })
        .collect();

    Ok(Json(ApiResponse::success(out)))
}
