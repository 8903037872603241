use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

/// One game tracked by the ingestion pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedGame {
    pub steam_app_id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Games to fetch reviews/achievements for
    pub games: Vec<TrackedGame>,
    #[serde(default = "default_review_pages")]
    pub review_pages: u32,
    #[serde(default = "default_reviews_per_page")]
    pub reviews_per_page: u32,
    #[serde(default = "default_reddit_pages")]
    pub reddit_pages: u32,
    #[serde(default = "default_reddit_posts_per_page")]
    pub reddit_posts_per_page: u32,
    /// Pause between upstream requests, in milliseconds
    #[serde(default = "default_page_pause_ms")]
    pub page_pause_ms: u64,
}

fn default_review_pages() -> u32 {
    15
}

fn default_reviews_per_page() -> u32 {
    100
}

fn default_reddit_pages() -> u32 {
    3
}

fn default_reddit_posts_per_page() -> u32 {
    25
}

fn default_page_pause_ms() -> u64 {
    1500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub ingest: IngestConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            println!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Err(crate::RageQuitError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config file found. Please create config.toml or config.example.toml",
            )))
        }
    }

    /// Get database URL
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Get max connections for database pool
    pub fn max_connections(&self) -> u32 {
        self.database.max_connections
    }

    /// Get connection timeout in seconds
    pub fn connection_timeout(&self) -> u64 {
        self.database.connection_timeout
    }

    /// Get tracked games for ingestion
    pub fn tracked_games(&self) -> &[TrackedGame] {
        &self.ingest.games
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite://ragequit.db?mode=rwc".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: true,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                enable_cors: true,
            },
            ingest: IngestConfig {
                games: vec![
                    TrackedGame {
                        steam_app_id: 1245620,
                        name: "ELDEN RING".to_string(),
                        slug: Some("elden-ring".to_string()),
                    },
                    TrackedGame {
                        steam_app_id: 268910,
                        name: "Cuphead".to_string(),
                        slug: Some("cuphead".to_string()),
                    },
                    TrackedGame {
                        steam_app_id: 413150,
                        name: "Stardew Valley".to_string(),
                        slug: Some("stardew-valley".to_string()),
                    },
                    TrackedGame {
                        steam_app_id: 374320,
                        name: "Dark Souls III".to_string(),
                        slug: Some("dark-souls-3".to_string()),
                    },
                    TrackedGame {
                        steam_app_id: 1091500,
                        name: "Cyberpunk 2077".to_string(),
                        slug: Some("cyberpunk-2077".to_string()),
                    },
                ],
                review_pages: default_review_pages(),
                reviews_per_page: default_reviews_per_page(),
                reddit_pages: default_reddit_pages(),
                reddit_posts_per_page: default_reddit_posts_per_page(),
                page_pause_ms: default_page_pause_ms(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_tracked_games() {
        let config = AppConfig::default();
        assert!(!config.tracked_games().is_empty());
        assert_eq!(config.tracked_games()[0].steam_app_id, 1245620);
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.database.url, config.database.url);
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.ingest.games.len(), config.ingest.games.len());
    }

    #[test]
    fn test_ingest_defaults_applied_when_omitted() {
        let toml_str = r#"
            [database]
            url = "sqlite://test.db"
            max_connections = 2
            connection_timeout = 10

            [logging]
            level = "debug"
            backtrace = false

            [server]
            host = "0.0.0.0"
            port = 9000
            enable_cors = false

            [ingest]
            games = []
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ingest.review_pages, 15);
        assert_eq!(config.ingest.page_pause_ms, 1500);
    }
}
