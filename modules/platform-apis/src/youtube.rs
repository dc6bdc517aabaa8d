//! YouTube Data API v3 search.

use serde::Deserialize;

use crate::{http_client, read_json, trim_base, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

pub const MAX_RESULTS: u32 = 50;

pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = trim_base(base_url);
        self
    }

    /// `search.list` scoped to one channel. Results may include playlists and
    /// the channel itself, not only videos.
    pub async fn search_channel(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<SearchListResponse> {
        let max_results = max_results.min(MAX_RESULTS).to_string();
        tracing::debug!(channel_id, max_results = %max_results, "GET youtube/v3/search");

        let resp = self
            .client
            .get(format!("{}/youtube/v3/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("channelId", channel_id),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        read_json(resp).await
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: ResourceId,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: String,
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub published_at: String,
    pub channel_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
}
