//! Telegram Bot API: pending updates (group messages and channel posts).

use serde::Deserialize;

use crate::{http_client, read_json, trim_base, PlatformError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

const ALLOWED_UPDATES: &str = r#"["message","channel_post"]"#;

/// `getUpdates` accepts a limit of 1..=100.
pub const MAX_UPDATES: u32 = 100;

pub struct TelegramClient {
    client: reqwest::Client,
    bot_token: String,
    base_url: String,
}

impl TelegramClient {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            bot_token: bot_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = trim_base(base_url);
        self
    }

    /// Fetch pending updates. Only message and channel post updates are requested.
    pub async fn get_updates(&self, limit: u32) -> Result<Vec<Update>> {
        let limit = limit.clamp(1, MAX_UPDATES).to_string();
        tracing::debug!(limit = %limit, "GET getUpdates");

        let resp = self
            .client
            .get(format!("{}/bot{}/getUpdates", self.base_url, self.bot_token))
            .query(&[
                ("limit", limit.as_str()),
                ("allowed_updates", ALLOWED_UPDATES),
            ])
            .send()
            .await?;

        let envelope: BotResponse<Vec<Update>> = read_json(resp).await?;
        envelope.into_result()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub error_code: Option<i64>,
    pub description: Option<String>,
}

impl<T> BotResponse<T> {
    pub fn into_result(self) -> Result<T> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(PlatformError::Rejected {
                code: self
                    .error_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                message: self.description.unwrap_or_default(),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub channel_post: Option<Message>,
}

impl Update {
    pub fn into_message(self) -> Option<Message> {
        self.message.or(self.channel_post)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    /// Set for channel posts and anonymous group admins.
    pub sender_chat: Option<Chat>,
    pub chat: Chat,
    /// Unix seconds.
    pub date: i64,
    pub text: Option<String>,
    pub caption: Option<String>,
}

impl Message {
    pub fn sender_id(&self) -> Option<i64> {
        self.from
            .as_ref()
            .map(|u| u.id)
            .or_else(|| self.sender_chat.as_ref().map(|c| c.id))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub username: Option<String>,
}

impl Chat {
    /// Match a channel given as a numeric id or a username, `@` optional.
    pub fn matches(&self, channel: &str) -> bool {
        let channel = channel.trim();
        if let Ok(id) = channel.parse::<i64>() {
            return self.id == id;
        }
        let wanted = channel.trim_start_matches('@');
        self.username
            .as_deref()
            .is_some_and(|u| u.eq_ignore_ascii_case(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(id: i64, username: Option<&str>) -> Chat {
        Chat {
            id,
            kind: "channel".to_string(),
            title: None,
            username: username.map(String::from),
        }
    }

    #[test]
    fn chat_matches_username_and_id() {
        let c = chat(-1001234, Some("RustNews"));
        assert!(c.matches("@rustnews"));
        assert!(c.matches("RustNews"));
        assert!(c.matches("-1001234"));
        assert!(!c.matches("other"));
        assert!(!c.matches("-1"));
    }

    #[test]
    fn chat_without_username_only_matches_id() {
        let c = chat(42, None);
        assert!(c.matches("42"));
        assert!(!c.matches("@42x"));
    }

    #[test]
    fn sender_falls_back_to_sender_chat() {
        let msg: Message = serde_json::from_str(
            r#"{
                "message_id": 5,
                "sender_chat": {"id": -100, "type": "channel"},
                "chat": {"id": -100, "type": "channel"},
                "date": 1735732800
            }"#,
        )
        .unwrap();
        assert_eq!(msg.sender_id(), Some(-100));
    }

    #[test]
    fn not_ok_envelope_is_rejected() {
        let resp: BotResponse<Vec<Update>> = serde_json::from_str(
            r#"{"ok": false, "error_code": 409, "description": "Conflict: webhook is active"}"#,
        )
        .unwrap();
        match resp.into_result() {
            Err(PlatformError::Rejected { code, message }) => {
                assert_eq!(code, "409");
                assert!(message.contains("webhook"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
