use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tracked game (one row per Steam title)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: i64,
    pub steam_app_id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw Steam review as stored by the ingestion pass
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SteamReviewRaw {
    pub id: i64,
    pub game_id: i64,
    pub steam_review_id: String,
    pub is_positive: bool,
    pub language: Option<String>,
    pub review_text: Option<String>,
    pub created_at_steam: Option<DateTime<Utc>>,
    pub ingested_at: DateTime<Utc>,
}

/// Raw global achievement unlock percentage as stored by the ingestion pass
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SteamAchievementRaw {
    pub id: i64,
    pub game_id: i64,
    pub api_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub percent: f64,
    pub ingested_at: DateTime<Utc>,
}

/// Raw Reddit post collected by the rage-focused search scraper
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RedditPostRaw {
    pub id: i64,
    pub game_id: i64,
    pub reddit_id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub upvotes: Option<i64>,
    pub num_comments: Option<i64>,
    pub created_utc: Option<DateTime<Utc>>,
    pub ingested_at: DateTime<Utc>,
}

/// Persisted rage score record, one per game, overwritten wholesale on recompute
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameRageScore {
    pub game_id: i64,
    pub rage_score: f64,
    pub difficulty_rage: f64,
    pub technical_rage: f64,
    pub social_toxicity_rage: f64,
    pub ui_design_rage: f64,
    pub max_achievement_drop: Option<f64>,
    pub max_drop_from: Option<f64>,
    pub max_drop_to: Option<f64>,
    pub max_drop_achievement: Option<String>,
    pub last_computed_at: DateTime<Utc>,
}

/// Create-or-update request for a tracked game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertGameRequest {
    pub steam_app_id: i64,
    pub name: String,
    pub slug: String,
}

/// Insert request for a raw Steam review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertReviewRequest {
    pub game_id: i64,
    pub steam_review_id: String,
    pub is_positive: bool,
    pub language: Option<String>,
    pub review_text: Option<String>,
    pub created_at_steam: Option<DateTime<Utc>>,
}

/// Insert request for a raw achievement percentage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertAchievementRequest {
    pub game_id: i64,
    pub api_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub percent: f64,
}

/// Insert request for a raw Reddit post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertRedditPostRequest {
    pub game_id: i64,
    pub reddit_id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub upvotes: Option<i64>,
    pub num_comments: Option<i64>,
    pub created_utc: Option<DateTime<Utc>>,
}

/// Game joined with its rage score, for list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameWithScore {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub rage_score: f64,
}

/// Leaderboard orderings over the score table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaderboard {
    /// Highest composite rage first
    MostRage,
    /// Highest difficulty rage first
    Difficulty,
    /// Highest technical rage first
    Technical,
    /// Highest social toxicity first
    Toxicity,
    /// Lowest composite rage first
    Cozy,
}

impl Leaderboard {
    /// SQL ORDER BY clause for this leaderboard
    pub fn order_by(self) -> &'static str {
        match self {
            Leaderboard::MostRage => "s.rage_score DESC",
            Leaderboard::Difficulty => "s.difficulty_rage DESC",
            Leaderboard::Technical => "s.technical_rage DESC",
            Leaderboard::Toxicity => "s.social_toxicity_rage DESC",
            Leaderboard::Cozy => "s.rage_score ASC",
        }
    }
}
