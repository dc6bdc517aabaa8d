use anyhow::{anyhow, Result};

/// Credentials loaded from environment variables (and `.env` if present).
/// Every key is optional at load time; a platform asks for its own keys only
/// when it is used.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    // X
    pub x_bearer_token: Option<String>,

    // Telegram
    pub telegram_bot_token: Option<String>,

    // YouTube
    pub youtube_api_key: Option<String>,

    // TikTok
    pub tiktok_access_token: Option<String>,

    // Xiaohongshu
    pub xiaohongshu_api_base: Option<String>,
    pub xiaohongshu_access_token: Option<String>,

    // Bilibili
    pub bilibili_sessdata: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let config = Self {
            x_bearer_token: non_empty_env("X_BEARER_TOKEN"),
            telegram_bot_token: non_empty_env("TELEGRAM_BOT_TOKEN"),
            youtube_api_key: non_empty_env("YOUTUBE_API_KEY"),
            tiktok_access_token: non_empty_env("TIKTOK_ACCESS_TOKEN"),
            xiaohongshu_api_base: non_empty_env("XIAOHONGSHU_API_BASE"),
            xiaohongshu_access_token: non_empty_env("XIAOHONGSHU_ACCESS_TOKEN"),
            bilibili_sessdata: non_empty_env("BILIBILI_SESSDATA"),
        };

        config.log_keys();
        config
    }

    pub fn x_bearer_token(&self) -> Result<&str> {
        required(&self.x_bearer_token, "X_BEARER_TOKEN")
    }

    pub fn telegram_bot_token(&self) -> Result<&str> {
        required(&self.telegram_bot_token, "TELEGRAM_BOT_TOKEN")
    }

    pub fn youtube_api_key(&self) -> Result<&str> {
        required(&self.youtube_api_key, "YOUTUBE_API_KEY")
    }

    pub fn tiktok_access_token(&self) -> Result<&str> {
        required(&self.tiktok_access_token, "TIKTOK_ACCESS_TOKEN")
    }

    pub fn xiaohongshu_api_base(&self) -> Result<&str> {
        required(&self.xiaohongshu_api_base, "XIAOHONGSHU_API_BASE")
    }

    fn log_keys(&self) {
        tracing::debug!("Config loaded:");
        tracing::debug!("  X_BEARER_TOKEN: {}", preview_opt(&self.x_bearer_token));
        tracing::debug!("  TELEGRAM_BOT_TOKEN: {}", preview_opt(&self.telegram_bot_token));
        tracing::debug!("  YOUTUBE_API_KEY: {}", preview_opt(&self.youtube_api_key));
        tracing::debug!("  TIKTOK_ACCESS_TOKEN: {}", preview_opt(&self.tiktok_access_token));
        tracing::debug!(
            "  XIAOHONGSHU_API_BASE: {}",
            self.xiaohongshu_api_base.as_deref().unwrap_or("<not set>")
        );
        tracing::debug!(
            "  XIAOHONGSHU_ACCESS_TOKEN: {}",
            preview_opt(&self.xiaohongshu_access_token)
        );
        tracing::debug!("  BILIBILI_SESSDATA: {}", preview_opt(&self.bilibili_sessdata));
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| anyhow!("{key} environment variable is required"))
}

fn preview(val: &str) -> String {
    let n = val.char_indices().nth(5).map(|(i, _)| i).unwrap_or(val.len());
    format!("{}...({} chars)", &val[..n], val.chars().count())
}

fn preview_opt(val: &Option<String>) -> String {
    match val {
        Some(v) if !v.is_empty() => preview(v),
        _ => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_names_the_variable() {
        let config = AppConfig::default();
        let err = config.youtube_api_key().unwrap_err();
        assert_eq!(err.to_string(), "YOUTUBE_API_KEY environment variable is required");
    }

    #[test]
    fn present_key_is_returned() {
        let config = AppConfig {
            x_bearer_token: Some("AAAA-token".to_string()),
            ..Default::default()
        };
        assert_eq!(config.x_bearer_token().unwrap(), "AAAA-token");
    }

    #[test]
    fn preview_never_shows_whole_secret() {
        assert_eq!(preview("abcdefghij"), "abcde...(10 chars)");
        assert_eq!(preview("abc"), "abc...(3 chars)");
        assert_eq!(preview("令牌令牌令牌令"), "令牌令牌令...(7 chars)");
        assert_eq!(preview_opt(&None), "<not set>");
    }
}
