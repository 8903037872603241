//! API route definitions

use axum::routing::get;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Game endpoints
        .route("/games", get(handlers::list_games))
        .route("/games/:id", get(handlers::get_game))
        .route("/games/slug/:slug", get(handlers::get_game_by_slug))
        // Request-scoped rage views
        .route("/games/:id/rage-words", get(handlers::get_rage_words))
        .route("/games/:id/rage-timeline", get(handlers::get_rage_timeline))
        .route("/games/:id/reviews", get(handlers::get_reviews))
        .route("/games/:id/reddit", get(handlers::get_reddit_posts))
        // Leaderboards
        .route(
            "/leaderboards/most-rage",
            get(handlers::leaderboard_most_rage),
        )
        .route(
            "/leaderboards/difficulty",
            get(handlers::leaderboard_difficulty),
        )
        .route(
            "/leaderboards/technical",
            get(handlers::leaderboard_technical),
        )
        .route(
            "/leaderboards/toxicity",
            get(handlers::leaderboard_toxicity),
        )
        .route("/leaderboards/cozy", get(handlers::leaderboard_cozy))
        // Comparison
        .route("/compare", get(handlers::compare_games))
        .with_state(state)
}
