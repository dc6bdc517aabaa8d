//! Bilibili uploader video listing.

use serde::Deserialize;
use serde_json::Value;

use crate::{http_client, read_json, trim_base, PlatformError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.bilibili.com";

/// Requests without a browser user agent are answered with risk-control errors.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub const MAX_PAGE_SIZE: u32 = 50;

pub struct BilibiliClient {
    client: reqwest::Client,
    base_url: String,
    sessdata: Option<String>,
}

impl BilibiliClient {
    pub fn new() -> Self {
        Self {
            client: http_client(),
            base_url: DEFAULT_BASE_URL.to_string(),
            sessdata: None,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = trim_base(base_url);
        self
    }

    /// Logged-in session cookie, which lifts most anonymous rate limits.
    pub fn with_sessdata(mut self, sessdata: impl Into<String>) -> Self {
        self.sessdata = Some(sessdata.into());
        self
    }

    /// One page of videos uploaded by `mid`.
    pub async fn uploaded_videos(
        &self,
        mid: &str,
        page_size: u32,
        page: u32,
    ) -> Result<Vec<UploadedVideo>> {
        let ps = page_size.clamp(1, MAX_PAGE_SIZE).to_string();
        let pn = page.max(1).to_string();
        tracing::debug!(mid, ps = %ps, pn = %pn, "GET x/space/arc/search");

        let mut req = self
            .client
            .get(format!("{}/x/space/arc/search", self.base_url))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[("mid", mid), ("ps", ps.as_str()), ("pn", pn.as_str())]);
        if let Some(ref sessdata) = self.sessdata {
            req = req.header(reqwest::header::COOKIE, format!("SESSDATA={sessdata}"));
        }

        let envelope: BiliResponse<ArcSearchData> = read_json(req.send().await?).await?;
        Ok(envelope.into_result()?.list.vlist)
    }
}

impl Default for BilibiliClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BiliResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T: Default> BiliResponse<T> {
    /// A zero code with no `data` (uploader without videos) is an empty result.
    pub fn into_result(self) -> Result<T> {
        if self.code != 0 {
            return Err(PlatformError::Rejected {
                code: self.code.to_string(),
                message: self.message,
            });
        }
        Ok(self.data.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArcSearchData {
    pub list: ArcList,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArcList {
    #[serde(default)]
    pub vlist: Vec<UploadedVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadedVideo {
    pub bvid: String,
    pub title: String,
    /// A number, or the string `"--"` when hidden.
    pub play: Option<Value>,
    pub like: Option<Value>,
    /// Danmaku count.
    pub video_review: Option<i64>,
    pub created: Option<i64>,
    pub mid: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_code_is_rejected() {
        let resp: BiliResponse<ArcSearchData> =
            serde_json::from_str(r#"{"code": -352, "message": "风控校验失败", "ttl": 1}"#).unwrap();
        match resp.into_result() {
            Err(PlatformError::Rejected { code, .. }) => assert_eq!(code, "-352"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn zero_code_without_data_is_empty() {
        let resp: BiliResponse<ArcSearchData> =
            serde_json::from_str(r#"{"code": 0, "message": "0", "data": null}"#).unwrap();
        assert!(resp.into_result().unwrap().list.vlist.is_empty());
    }

    #[test]
    fn hidden_play_count_decodes() {
        let v: UploadedVideo = serde_json::from_str(
            r#"{"bvid": "BV1ab411c7", "title": "t", "play": "--", "video_review": 3}"#,
        )
        .unwrap();
        assert_eq!(v.play, Some(Value::String("--".into())));
        assert!(v.like.is_none());
    }
}
