//! TikTok Research API video query.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{http_client, read_json, trim_base, PlatformError, PlatformId, Result};

pub const DEFAULT_BASE_URL: &str = "https://open.tiktokapis.com";

const VIDEO_FIELDS: &str = "id,video_description,create_time,username,like_count";

pub const MAX_COUNT: u32 = 100;

/// The API refuses date windows longer than 30 days (both ends inclusive).
pub const MAX_WINDOW_DAYS: u64 = 30;

pub struct TikTokClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl TikTokClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = trim_base(base_url);
        self
    }

    pub async fn query_videos(&self, query: &VideoQuery) -> Result<VideoQueryData> {
        tracing::debug!(
            max_count = query.max_count,
            start_date = %query.start_date,
            end_date = %query.end_date,
            "POST research/video/query"
        );

        let resp = self
            .client
            .post(format!("{}/v2/research/video/query/", self.base_url))
            .bearer_auth(&self.access_token)
            .query(&[("fields", VIDEO_FIELDS)])
            .json(query)
            .send()
            .await?;

        let envelope: ResearchResponse = read_json(resp).await?;
        envelope.into_result()
    }
}

/// Request body for `/v2/research/video/query/`.
#[derive(Debug, Clone, Serialize)]
pub struct VideoQuery {
    pub query: QueryFilter,
    pub max_count: u32,
    /// `YYYYMMDD`
    pub start_date: String,
    /// `YYYYMMDD`
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryFilter {
    pub and: Vec<Condition>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Condition {
    pub operation: String,
    pub field_name: String,
    pub field_values: Vec<String>,
}

impl VideoQuery {
    /// Keyword search over the widest window the API allows, ending on `end`.
    pub fn keyword(keyword: &str, max_count: u32, end: NaiveDate) -> Self {
        let start = end
            .checked_sub_days(Days::new(MAX_WINDOW_DAYS - 1))
            .unwrap_or(end);
        Self {
            query: QueryFilter {
                and: vec![Condition {
                    operation: "IN".to_string(),
                    field_name: "keyword".to_string(),
                    field_values: vec![keyword.to_string()],
                }],
            },
            max_count: max_count.clamp(1, MAX_COUNT),
            start_date: start.format("%Y%m%d").to_string(),
            end_date: end.format("%Y%m%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchResponse {
    pub data: Option<VideoQueryData>,
    pub error: ResearchError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchError {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ResearchResponse {
    pub fn into_result(self) -> Result<VideoQueryData> {
        if self.error.code != "ok" {
            return Err(PlatformError::Rejected {
                code: self.error.code,
                message: self.error.message,
            });
        }
        Ok(self.data.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoQueryData {
    #[serde(default)]
    pub videos: Vec<Video>,
    pub cursor: Option<i64>,
    pub has_more: Option<bool>,
    pub search_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: PlatformId,
    pub username: Option<String>,
    pub video_description: Option<String>,
    /// Unix seconds.
    pub create_time: Option<i64>,
    pub like_count: Option<i64>,
}
