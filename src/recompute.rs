//! Batch rage-score recompute pass
//!
//! Runs the scoring pipeline once per game over whatever raw rows exist
//! at that moment and overwrites each game's persisted score record
//! wholesale. Games are processed sequentially; each game's computation
//! is independent.

use tracing::info;

use crate::database::Database;
use crate::scoring;
use crate::scoring::AchievementEntry;
use crate::scoring::ReviewEntry;
use crate::Result;

/// Recompute and persist rage scores for every tracked game.
pub async fn compute_all_scores(db: &Database) -> Result<()> {
    let games = db.list_games().await?;
    info!("Recomputing rage scores for {} games", games.len());

    for game in games {
        let breakdown = compute_game_score(db, game.id).await?;
        db.upsert_rage_score(game.id, &breakdown).await?;
        info!(
            "  {}: rage={:.1} difficulty={:.1} technical={:.1} toxicity={:.1} ui={:.1}",
            game.name,
            breakdown.rage_score,
            breakdown.difficulty_rage,
            breakdown.technical_rage,
            breakdown.social_toxicity_rage,
            breakdown.ui_design_rage
        );
    }

    Ok(())
}

/// Assemble one game's classifier/detector input and run the pipeline.
async fn compute_game_score(db: &Database, game_id: i64) -> Result<scoring::RageBreakdown> {
    let mut entries: Vec<ReviewEntry> = db
        .list_reviews(game_id)
        .await?
        .into_iter()
        .map(|r| ReviewEntry {
            is_positive: r.is_positive,
            text: r.review_text,
        })
        .collect();

    // Reddit posts came from a rage-focused search, so they enter the
    // classifier as negative-leaning entries.
    for post in db.list_reddit_posts(game_id).await? {
        let text = format!(
            "{}\n{}",
            post.title.as_deref().unwrap_or(""),
            post.body.as_deref().unwrap_or("")
        );
        entries.push(ReviewEntry {
            is_positive: false,
            text: Some(text),
        });
    }

    let achievements: Vec<AchievementEntry> = db
        .list_achievements(game_id)
        .await?
        .into_iter()
        .map(|a| AchievementEntry {
            api_name: a.api_name,
            display_name: a.display_name,
            percent: a.percent,
        })
        .collect();

    Ok(scoring::compute_breakdown(&entries, &achievements))
}
