use chrono::Utc;

use super::Database;
use crate::models::*;
use crate::Result;

impl Database {
    /// Insert a raw review, skipping duplicates. Returns true if a row was added.
    pub async fn insert_review(&self, request: &InsertReviewRequest) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO steam_reviews_raw
             (game_id, steam_review_id, is_positive, language, review_text, created_at_steam, ingested_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (game_id, steam_review_id) DO NOTHING",
        )
        .bind(request.game_id)
        .bind(&request.steam_review_id)
        .bind(request.is_positive)
        .bind(&request.language)
        .bind(&request.review_text)
        .bind(request.created_at_steam)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All raw reviews for a game (classifier and timeline input)
    pub async fn list_reviews(&self, game_id: i64) -> Result<Vec<SteamReviewRaw>> {
        let reviews = sqlx::query_as("SELECT * FROM steam_reviews_raw WHERE game_id = ?")
            .bind(game_id)
            .fetch_all(self.pool())
            .await?;

        Ok(reviews)
    }

    /// Most recent reviews for the feed endpoint
    pub async fn list_recent_reviews(
        &self,
        game_id: i64,
        limit: i64,
    ) -> Result<Vec<SteamReviewRaw>> {
        let reviews = sqlx::query_as(
            "SELECT * FROM steam_reviews_raw
             WHERE game_id = ?
             ORDER BY created_at_steam DESC
             LIMIT ?",
        )
        .bind(game_id)
        .bind(limit)
        .fetch_all(self.pool())
        .await?;

        Ok(reviews)
    }
}
