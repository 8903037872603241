//! HTTP server implementation

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::database::Database;
use crate::Result;

/// Start the API server
pub async fn serve_api(config: &AppConfig, host: String, port: u16, enable_cors: bool) -> Result<()> {
    info!("Starting RageQuit API server...");

    // Initialize services
    let database = Arc::new(Database::from_config(config).await?);
    database.init_schema().await?;

    let state = AppState { database };

    // Build API routes
    let api_router = routes::api_routes(state);

    let mut app = Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    // Add CORS if enabled
    if enable_cors {
        info!("CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET /api/health                   - Health check");
    info!("  GET /api/games                    - List games with scores");
    info!("  GET /api/games/:id                - Game detail with breakdown");
    info!("  GET /api/games/slug/:slug         - Game detail by slug");
    info!("  GET /api/games/:id/rage-words     - Rage word cloud");
    info!("  GET /api/games/:id/rage-timeline  - Daily rage timeline");
    info!("  GET /api/games/:id/reviews        - Recent review feed");
    info!("  GET /api/games/:id/reddit         - Top Reddit posts");
    info!("  GET /api/leaderboards/*           - Leaderboards");
    info!("  GET /api/compare?a=&b=            - Compare two games");

    axum::serve(listener, app).await?;

    Ok(())
}
