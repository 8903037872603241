//! API request and response types

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;

use crate::models::GameRageScore;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_list_limit() -> i64 {
    50
}

/// Limit-only query parameters (feeds, word cloud)
#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    #[serde(default = "default_feed_limit")]
    pub limit: i64,
}

fn default_feed_limit() -> i64 {
    20
}

/// Word cloud query parameters
#[derive(Debug, Deserialize)]
pub struct WordCloudQuery {
    #[serde(default = "default_word_limit")]
    pub limit: usize,
}

fn default_word_limit() -> usize {
    50
}

/// Comparison query parameters
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub a: i64,
    pub b: i64,
}

/// Persisted rage breakdown as exposed over the API
#[derive(Debug, Clone, Serialize)]
pub struct RageBreakdownOut {
    pub rage_score: f64,
    pub difficulty_rage: f64,
    pub technical_rage: f64,
    pub social_toxicity_rage: f64,
    pub ui_design_rage: f64,
    pub max_achievement_drop: Option<f64>,
    pub max_drop_from: Option<f64>,
    pub max_drop_to: Option<f64>,
    pub max_drop_achievement: Option<String>,
}

impl From<GameRageScore> for RageBreakdownOut {
    fn from(score: GameRageScore) -> Self {
        Self {
            rage_score: score.rage_score,
            difficulty_rage: score.difficulty_rage,
            technical_rage: score.technical_rage,
            social_toxicity_rage: score.social_toxicity_rage,
            ui_design_rage: score.ui_design_rage,
            max_achievement_drop: score.max_achievement_drop,
            max_drop_from: score.max_drop_from,
            max_drop_to: score.max_drop_to,
            max_drop_achievement: score.max_drop_achievement,
        }
    }
}

/// Game with composite score only, for list endpoints
#[derive(Debug, Serialize)]
pub struct GameSummary {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub rage_score: f64,
}

/// Game with its full breakdown
#[derive(Debug, Serialize)]
pub struct GameDetail {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub rage: RageBreakdownOut,
}

/// Side-by-side comparison of two games
#[derive(Debug, Serialize)]
pub struct GameComparison {
    pub left: GameDetail,
    pub right: GameDetail,
}

/// One review in the rage feed
#[derive(Debug, Serialize)]
pub struct ReviewOut {
    pub is_positive: bool,
    pub language: Option<String>,
    pub review_text: String,
    pub created_at_steam: Option<DateTime<Utc>>,
}

/// One Reddit post in the rage feed
#[derive(Debug, Serialize)]
pub struct RedditPostOut {
    pub title: String,
    pub body: String,
    pub upvotes: Option<i64>,
    pub num_comments: Option<i64>,
    pub created_utc: Option<DateTime<Utc>>,
}
