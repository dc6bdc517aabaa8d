pub mod bilibili;
pub mod error;
pub mod telegram;
pub mod tiktok;
pub mod x;
pub mod xiaohongshu;
pub mod youtube;

pub use bilibili::BilibiliClient;
pub use error::{PlatformError, Result};
pub use telegram::TelegramClient;
pub use tiktok::TikTokClient;
pub use x::XClient;
pub use xiaohongshu::XiaohongshuClient;
pub use youtube::YouTubeClient;

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Identifier that some APIs send as a JSON string and others as a number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PlatformId {
    Text(String),
    Number(i64),
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformId::Text(s) => f.write_str(s),
            PlatformId::Number(n) => write!(f, "{n}"),
        }
    }
}

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

pub(crate) fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Turn a non-2xx response into `PlatformError::Api`, otherwise decode the body.
pub(crate) async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(PlatformError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_id_accepts_strings_and_numbers() {
        let ids: Vec<PlatformId> = serde_json::from_str(r#"["abc", 7312345678901234567]"#).unwrap();
        assert_eq!(ids[0].to_string(), "abc");
        assert_eq!(ids[1].to_string(), "7312345678901234567");
    }

    #[test]
    fn trims_trailing_slash() {
        assert_eq!(trim_base("http://localhost:1234/"), "http://localhost:1234");
    }
}
