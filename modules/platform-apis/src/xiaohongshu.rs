//! Xiaohongshu note search through a partner API gateway.
//!
//! Xiaohongshu has no public endpoint, so the base URL is always supplied by
//! the caller.

use serde::Deserialize;

use crate::{http_client, read_json, trim_base, PlatformId, Result};

pub struct XiaohongshuClient {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl XiaohongshuClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: http_client(),
            base_url: trim_base(base_url),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub async fn search_notes(&self, keyword: &str, page_size: u32) -> Result<Vec<Note>> {
        let page_size = page_size.to_string();
        tracing::debug!(keyword, page_size = %page_size, "GET notes/search");

        let mut req = self
            .client
            .get(format!("{}/notes/search", self.base_url))
            .query(&[("keyword", keyword), ("page_size", page_size.as_str())]);
        if let Some(ref token) = self.access_token {
            req = req.bearer_auth(token);
        }

        let resp: NoteSearchResponse = read_json(req.send().await?).await?;
        Ok(resp.data)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteSearchResponse {
    #[serde(default)]
    pub data: Vec<Note>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub id: PlatformId,
    pub user_id: PlatformId,
    pub title: Option<String>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
}
