use chrono::Utc;

use super::Database;
use crate::models::*;
use crate::Result;

impl Database {
    /// Insert or refresh a global achievement percentage
    pub async fn upsert_achievement(&self, request: &InsertAchievementRequest) -> Result<()> {
        sqlx::query(
            "INSERT INTO steam_achievements_raw
             (game_id, api_name, display_name, description, percent, ingested_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT (game_id, api_name) DO UPDATE
             SET display_name = excluded.display_name,
                 description = excluded.description,
                 percent = excluded.percent,
                 ingested_at = excluded.ingested_at",
        )
        .bind(request.game_id)
        .bind(&request.api_name)
        .bind(&request.display_name)
        .bind(&request.description)
        .bind(request.percent)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// All achievement percentages for a game (dropoff detector input)
    pub async fn list_achievements(&self, game_id: i64) -> Result<Vec<SteamAchievementRaw>> {
        let achievements =
            sqlx::query_as("SELECT * FROM steam_achievements_raw WHERE game_id = ?")
                .bind(game_id)
                .fetch_all(self.pool())
                .await?;

        Ok(achievements)
    }
}
