use chrono::Utc;

use super::Database;
use crate::models::*;
use crate::RageQuitError;
use crate::Result;

impl Database {
    /// Insert or update a tracked game, keyed by Steam app id
    pub async fn upsert_game(&self, request: &UpsertGameRequest) -> Result<Game> {
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO games (steam_app_id, name, slug, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT (steam_app_id) DO UPDATE
             SET name = excluded.name, slug = excluded.slug, updated_at = excluded.updated_at",
        )
        .bind(request.steam_app_id)
        .bind(&request.name)
        .bind(&request.slug)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        let game = sqlx::query_as("SELECT * FROM games WHERE steam_app_id = ?")
            .bind(request.steam_app_id)
            .fetch_optional(self.pool())
            .await?;

        game.ok_or_else(|| RageQuitError::GameNotFound(request.slug.clone()))
    }

    /// Get a game by primary key
    pub async fn get_game(&self, game_id: i64) -> Result<Option<Game>> {
        let game = sqlx::query_as("SELECT * FROM games WHERE id = ?")
            .bind(game_id)
            .fetch_optional(self.pool())
            .await?;

        Ok(game)
    }

    /// Get a game by slug
    pub async fn get_game_by_slug(&self, slug: &str) -> Result<Option<Game>> {
        let game = sqlx::query_as("SELECT * FROM games WHERE slug = ?")
            .bind(slug)
            .fetch_optional(self.pool())
            .await?;

        Ok(game)
    }

    /// List all tracked games (recompute pass iterates this)
    pub async fn list_games(&self) -> Result<Vec<Game>> {
        let games = sqlx::query_as("SELECT * FROM games ORDER BY id")
            .fetch_all(self.pool())
            .await?;

        Ok(games)
    }

    /// List games joined with their composite score, highest rage first
    pub async fn list_games_with_scores(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<GameWithScore>> {
        let games = sqlx::query_as(
            "SELECT g.id, g.name, g.slug, s.rage_score
             FROM games g
             JOIN game_rage_scores s ON s.game_id = g.id
             ORDER BY s.rage_score DESC
             LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool())
        .await?;

        Ok(games)
    }

    /// List games ordered by one of the leaderboard criteria
    pub async fn list_leaderboard(
        &self,
        board: Leaderboard,
        limit: i64,
    ) -> Result<Vec<GameWithScore>> {
        // order_by comes from a fixed enum, never from user input
        let sql = format!(
            "SELECT g.id, g.name, g.slug, s.rage_score
             FROM games g
             JOIN game_rage_scores s ON s.game_id = g.id
             ORDER BY {}
             LIMIT ?",
            board.order_by()
        );

        let games = sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(self.pool())
            .await?;

        Ok(games)
    }
}
