use chrono::Utc;

use super::Database;
use crate::models::*;
use crate::Result;

impl Database {
    /// Insert a raw Reddit post, skipping duplicates. Returns true if a row was added.
    pub async fn insert_reddit_post(&self, request: &InsertRedditPostRequest) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO reddit_posts_raw
             (game_id, reddit_id, title, body, upvotes, num_comments, created_utc, ingested_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (reddit_id) DO NOTHING",
        )
        .bind(request.game_id)
        .bind(&request.reddit_id)
        .bind(&request.title)
        .bind(&request.body)
        .bind(request.upvotes)
        .bind(request.num_comments)
        .bind(request.created_utc)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All raw Reddit posts for a game (classifier and word cloud input)
    pub async fn list_reddit_posts(&self, game_id: i64) -> Result<Vec<RedditPostRaw>> {
        let posts = sqlx::query_as("SELECT * FROM reddit_posts_raw WHERE game_id = ?")
            .bind(game_id)
            .fetch_all(self.pool())
            .await?;

        Ok(posts)
    }

    /// Most upvoted posts for the feed endpoint
    pub async fn list_top_reddit_posts(
        &self,
        game_id: i64,
        limit: i64,
    ) -> Result<Vec<RedditPostRaw>> {
        let posts = sqlx::query_as(
            "SELECT * FROM reddit_posts_raw
             WHERE game_id = ?
             ORDER BY upvotes DESC
             LIMIT ?",
        )
        .bind(game_id)
        .bind(limit)
        .fetch_all(self.pool())
        .await?;

        Ok(posts)
    }
}
