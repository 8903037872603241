//! Reddit public search scraper
//!
//! Uses the unauthenticated search.json endpoint with a rage-flavored
//! query. Not the official API, but enough for basic rage mining.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use tracing::error;

use crate::Result;

/// One post from the search listing
#[derive(Debug, Clone, Deserialize)]
pub struct RedditPost {
    pub id: String,
    pub title: Option<String>,
    pub selftext: Option<String>,
    pub ups: Option<i64>,
    pub num_comments: Option<i64>,
    pub created_utc: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
    after: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: RedditPost,
}

/// Client for the public Reddit search endpoint
pub struct RedditClient {
    http: reqwest::Client,
}

impl RedditClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(super::USER_AGENT)
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self { http })
    }

    /// Search for rage posts about a game, following `after` pagination.
    /// Stops (keeping what it has) on the first failed page.
    pub async fn fetch_posts_for_game(
        &self,
        game_name: &str,
        max_pages: u32,
        per_page: u32,
        pause_ms: u64,
    ) -> Vec<RedditPost> {
        let query = format!(
            "{game_name} rage OR unfair OR bullshit OR broken OR uninstall OR lag OR toxic OR cheater"
        );
        let mut collected: Vec<RedditPost> = Vec::new();
        let mut after: Option<String> = None;

        for page in 0..max_pages {
            let mut request = self
                .http
                .get("https://www.reddit.com/search.json")
                .query(&[
                    ("q", query.as_str()),
                    ("sort", "relevance"),
                    ("restrict_sr", "false"),
                    ("t", "all"),
                ])
                .query(&[("limit", per_page)]);
            if let Some(after) = &after {
                request = request.query(&[("after", after.as_str())]);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    error!("Reddit fetch failed for {}: {}", game_name, e);
                    break;
                }
            };

            if !response.status().is_success() {
                error!("Reddit HTTP {} for {}", response.status(), game_name);
                break;
            }

            let listing: Listing = match response.json().await {
                Ok(l) => l,
                Err(e) => {
                    error!("Malformed Reddit payload for {}: {}", game_name, e);
                    break;
                }
            };

            if listing.data.children.is_empty() {
                break;
            }
            collected.extend(listing.data.children.into_iter().map(|c| c.data));

            debug!(
                "Reddit page {} collected {} posts for {}",
                page + 1,
                collected.len(),
                game_name
            );

            after = listing.data.after;
            if after.is_none() {
                break;
            }

            tokio::time::sleep(Duration::from_millis(pause_ms)).await;
        }

        collected
    }
}
