//! X (Twitter) API v2 recent search.

use serde::Deserialize;

use crate::{http_client, read_json, trim_base, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

const TWEET_FIELDS: &str = "author_id,created_at,lang,entities";

/// The recent-search endpoint rejects `max_results` outside 10..=100.
pub const MIN_RESULTS: u32 = 10;
pub const MAX_RESULTS: u32 = 100;

pub struct XClient {
    client: reqwest::Client,
    bearer_token: String,
    base_url: String,
}

impl XClient {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            bearer_token: bearer_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = trim_base(base_url);
        self
    }

    /// Search tweets from the last seven days matching `query`.
    pub async fn search_recent_tweets(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<TweetSearchResponse> {
        let max_results = max_results.clamp(MIN_RESULTS, MAX_RESULTS).to_string();
        tracing::debug!(query, max_results = %max_results, "GET tweets/search/recent");

        let resp = self
            .client
            .get(format!("{}/2/tweets/search/recent", self.base_url))
            .bearer_auth(&self.bearer_token)
            .query(&[
                ("query", query),
                ("max_results", max_results.as_str()),
                ("tweet.fields", TWEET_FIELDS),
            ])
            .send()
            .await?;

        read_json(resp).await
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TweetSearchResponse {
    /// Absent when the search matched nothing.
    #[serde(default)]
    pub data: Vec<Tweet>,
    pub meta: Option<SearchMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchMeta {
    pub result_count: Option<u32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub author_id: Option<String>,
    pub created_at: Option<String>,
    pub lang: Option<String>,
    pub entities: Option<TweetEntities>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TweetEntities {
    #[serde(default)]
    pub hashtags: Vec<HashtagEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashtagEntity {
    pub tag: String,
}

impl Tweet {
    pub fn hashtags(&self) -> Vec<String> {
        self.entities
            .as_ref()
            .map(|e| e.hashtags.iter().map(|h| h.tag.clone()).collect())
            .unwrap_or_default()
    }
}
