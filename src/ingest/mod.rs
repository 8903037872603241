//! Ingestion collaborators: external-site scrapers and the pass that
//! materializes their output into the raw tables.
//!
//! Fetch failures are tolerated per page: log, stop paginating, keep
//! whatever was collected. A partial fetch never aborts the run.

mod reddit;
mod steam;

pub use reddit::RedditClient;
pub use steam::SteamClient;

use chrono::DateTime;
use chrono::Utc;
use tracing::info;
use tracing::warn;

use crate::config::AppConfig;
use crate::database::Database;
use crate::models::*;
use crate::Result;

/// User-Agent sent to all upstream endpoints
pub(crate) const USER_AGENT: &str = "RageQuit.io (local dev)";

/// Very simple slugify helper
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn unix_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

/// Fetch reviews, achievements, and Reddit posts for every tracked game
/// and store them, skipping duplicates.
pub async fn run_ingest(db: &Database, config: &AppConfig) -> Result<()> {
    let steam = SteamClient::new()?;
    let reddit = RedditClient::new()?;
    let ingest = &config.ingest;

    for tracked in config.tracked_games() {
        let slug = tracked
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&tracked.name));
        let game = db
            .upsert_game(&UpsertGameRequest {
                steam_app_id: tracked.steam_app_id,
                name: tracked.name.clone(),
                slug,
            })
            .await?;
        info!("Ingesting data for {} (id={})", game.name, game.id);

        // Steam reviews
        let reviews = steam
            .fetch_reviews(
                tracked.steam_app_id,
                ingest.review_pages,
                ingest.reviews_per_page,
                ingest.page_pause_ms,
            )
            .await;
        let mut new_reviews = 0u32;
        for review in reviews {
            let inserted = db
                .insert_review(&InsertReviewRequest {
                    game_id: game.id,
                    steam_review_id: review.recommendationid.clone(),
                    is_positive: review.voted_up,
                    language: review.language.clone(),
                    review_text: review.review.clone(),
                    created_at_steam: review.timestamp_created.and_then(unix_to_datetime),
                })
                .await?;
            if inserted {
                new_reviews += 1;
            }
        }
        info!("  {} new reviews for {}", new_reviews, game.name);

        // Global achievement percentages
        let achievements = steam.fetch_global_achievements(tracked.steam_app_id).await;
        if achievements.is_empty() {
            warn!("  No achievements returned for {}", game.name);
        }
        for achievement in &achievements {
            db.upsert_achievement(&InsertAchievementRequest {
                game_id: game.id,
                api_name: achievement.name.clone(),
                display_name: None,
                description: None,
                percent: achievement.percent,
            })
            .await?;
        }
        info!("  {} achievements for {}", achievements.len(), game.name);

        // Reddit rage posts
        let posts = reddit
            .fetch_posts_for_game(
                &game.name,
                ingest.reddit_pages,
                ingest.reddit_posts_per_page,
                ingest.page_pause_ms,
            )
            .await;
        let mut new_posts = 0u32;
        for post in posts {
            let inserted = db
                .insert_reddit_post(&InsertRedditPostRequest {
                    game_id: game.id,
                    reddit_id: post.id.clone(),
                    title: post.title.clone(),
                    body: post.selftext.clone(),
                    upvotes: post.ups,
                    num_comments: post.num_comments,
                    created_utc: post
                        .created_utc
                        .and_then(|secs| unix_to_datetime(secs as i64)),
                })
                .await?;
            if inserted {
                new_posts += 1;
            }
        }
        info!("  {} new reddit posts for {}", new_posts, game.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("ELDEN RING"), "elden-ring");
        assert_eq!(slugify("Dark Souls III"), "dark-souls-iii");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Cyberpunk -- 2077!"), "cyberpunk-2077");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
    }
}
