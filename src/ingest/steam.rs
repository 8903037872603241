//! Steam public API client
//!
//! Uses the keyless store review endpoint and the keyless global
//! achievement percentage endpoint.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use tracing::error;
use tracing::warn;

use crate::Result;

/// One review from the store appreviews endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SteamReview {
    pub recommendationid: String,
    pub voted_up: bool,
    pub language: Option<String>,
    pub review: Option<String>,
    pub timestamp_created: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    success: i64,
    #[serde(default)]
    reviews: Vec<SteamReview>,
    cursor: Option<String>,
}

/// One entry from the global achievement percentages endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalAchievement {
    pub name: String,
    pub percent: f64,
}

#[derive(Debug, Deserialize)]
struct AchievementPercentagesRoot {
    #[serde(default)]
    achievementpercentages: AchievementPercentages,
}

#[derive(Debug, Default, Deserialize)]
struct AchievementPercentages {
    #[serde(default)]
    achievements: Vec<GlobalAchievement>,
}

/// Client for the keyless Steam endpoints
pub struct SteamClient {
    http: reqwest::Client,
}

impl SteamClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(super::USER_AGENT)
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { http })
    }

    /// Fetch up to `max_pages` of reviews for an app, following the cursor.
    /// Stops (keeping what it has) on the first failed page.
    pub async fn fetch_reviews(
        &self,
        app_id: i64,
        max_pages: u32,
        per_page: u32,
        pause_ms: u64,
    ) -> Vec<SteamReview> {
        let url = format!("https://store.steampowered.com/appreviews/{app_id}");
        let mut cursor = "*".to_string();
        let mut collected: Vec<SteamReview> = Vec::new();

        for page in 0..max_pages {
            let response = self
                .http
                .get(&url)
                .query(&[
                    ("json", "1"),
                    ("filter", "all"),
                    ("language", "all"),
                    ("purchase_type", "all"),
                    ("num_per_page", &per_page.to_string()),
                    ("cursor", &cursor),
                ])
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    error!("Failed to fetch reviews for app {}: {}", app_id, e);
                    break;
                }
            };

            if !response.status().is_success() {
                error!(
                    "Reviews HTTP {} for app {}",
                    response.status(),
                    app_id
                );
                break;
            }

            let payload: ReviewsResponse = match response.json().await {
                Ok(p) => p,
                Err(e) => {
                    error!("Malformed review payload for app {}: {}", app_id, e);
                    break;
                }
            };

            if payload.success != 1 {
                warn!(
                    "Reviews response not successful for app {}: {}",
                    app_id, payload.success
                );
                break;
            }

            if payload.reviews.is_empty() {
                break;
            }
            collected.extend(payload.reviews);

            cursor = match payload.cursor {
                Some(c) if !c.is_empty() => c,
                _ => break,
            };

            debug!(
                "Page {}: total {} reviews for app {}",
                page + 1,
                collected.len(),
                app_id
            );
            tokio::time::sleep(Duration::from_millis(pause_ms)).await;
        }

        debug!("Collected {} reviews for app {}", collected.len(), app_id);
        collected
    }

    /// Fetch global achievement unlock percentages. Returns an empty list
    /// on any failure.
    pub async fn fetch_global_achievements(&self, app_id: i64) -> Vec<GlobalAchievement> {
        let url = "https://api.steampowered.com/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v0002/";

        let response = self
            .http
            .get(url)
            .query(&[("gameid", app_id.to_string()), ("format", "json".to_string())])
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to fetch achievements for app {}: {}", app_id, e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            error!(
                "Achievements HTTP {} for app {}",
                response.status(),
                app_id
            );
            return Vec::new();
        }

        match response.json::<AchievementPercentagesRoot>().await {
            Ok(root) => root.achievementpercentages.achievements,
            Err(e) => {
                error!("Malformed achievement payload for app {}: {}", app_id, e);
                Vec::new()
            }
        }
    }
}
