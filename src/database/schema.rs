use super::Database;
use crate::Result;

/// Idempotent schema bootstrap, run at startup
const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS games (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        steam_app_id INTEGER UNIQUE,
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS steam_reviews_raw (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        game_id INTEGER NOT NULL REFERENCES games(id),
        steam_review_id TEXT NOT NULL,
        is_positive INTEGER NOT NULL,
        language TEXT,
        review_text TEXT,
        created_at_steam TEXT,
        ingested_at TEXT NOT NULL,
        UNIQUE (game_id, steam_review_id)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS steam_achievements_raw (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        game_id INTEGER NOT NULL REFERENCES games(id),
        api_name TEXT NOT NULL,
        display_name TEXT,
        description TEXT,
        percent REAL NOT NULL,
        ingested_at TEXT NOT NULL,
        UNIQUE (game_id, api_name)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS reddit_posts_raw (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        game_id INTEGER NOT NULL REFERENCES games(id),
        reddit_id TEXT NOT NULL UNIQUE,
        title TEXT,
        body TEXT,
        upvotes INTEGER,
        num_comments INTEGER,
        created_utc TEXT,
        ingested_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS game_rage_scores (
        game_id INTEGER PRIMARY KEY REFERENCES games(id),
        rage_score REAL NOT NULL,
        difficulty_rage REAL NOT NULL,
        technical_rage REAL NOT NULL,
        social_toxicity_rage REAL NOT NULL,
        ui_design_rage REAL NOT NULL,
        max_achievement_drop REAL,
        max_drop_from REAL,
        max_drop_to REAL,
        max_drop_achievement TEXT,
        last_computed_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_reviews_game ON steam_reviews_raw (game_id)",
    "CREATE INDEX IF NOT EXISTS idx_achievements_game ON steam_achievements_raw (game_id)",
    "CREATE INDEX IF NOT EXISTS idx_reddit_game ON reddit_posts_raw (game_id)",
];

impl Database {
    /// Create all tables and indexes if they do not exist yet
    pub async fn init_schema(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(self.pool()).await?;
        }
        tracing::debug!("Database schema initialized ({} statements)", SCHEMA.len());
        Ok(())
    }
}
