use chrono::Utc;

use super::Database;
use crate::models::*;
use crate::scoring::RageBreakdown;
use crate::Result;

impl Database {
    /// Persist a freshly computed breakdown, replacing the previous record
    /// wholesale. The score row is never partially updated.
    pub async fn upsert_rage_score(
        &self,
        game_id: i64,
        breakdown: &RageBreakdown,
    ) -> Result<()> {
        let drop = breakdown.drop.as_ref();

        sqlx::query(
            "INSERT INTO game_rage_scores
             (game_id, rage_score, difficulty_rage, technical_rage, social_toxicity_rage,
              ui_design_rage, max_achievement_drop, max_drop_from, max_drop_to,
              max_drop_achievement, last_computed_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (game_id) DO UPDATE
             SET rage_score = excluded.rage_score,
                 difficulty_rage = excluded.difficulty_rage,
                 technical_rage = excluded.technical_rage,
                 social_toxicity_rage = excluded.social_toxicity_rage,
                 ui_design_rage = excluded.ui_design_rage,
                 max_achievement_drop = excluded.max_achievement_drop,
                 max_drop_from = excluded.max_drop_from,
                 max_drop_to = excluded.max_drop_to,
                 max_drop_achievement = excluded.max_drop_achievement,
                 last_computed_at = excluded.last_computed_at",
        )
        .bind(game_id)
        .bind(breakdown.rage_score)
        .bind(breakdown.difficulty_rage)
        .bind(breakdown.technical_rage)
        .bind(breakdown.social_toxicity_rage)
        .bind(breakdown.ui_design_rage)
        .bind(drop.map(|d| d.magnitude))
        .bind(drop.map(|d| d.from_percent))
        .bind(drop.map(|d| d.to_percent))
        .bind(drop.map(|d| d.achievement_name.clone()))
        .bind(Utc::now())
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Get the persisted score record for a game
    pub async fn get_rage_score(&self, game_id: i64) -> Result<Option<GameRageScore>> {
        let score = sqlx::query_as("SELECT * FROM game_rage_scores WHERE game_id = ?")
            .bind(game_id)
            .fetch_optional(self.pool())
            .await?;

        Ok(score)
    }
}
