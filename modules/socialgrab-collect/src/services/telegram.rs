// Telegram service: channel/group messages grouped by sender.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat};
use platform_apis::telegram::{Message, Update};
use platform_apis::TelegramClient;
use socialgrab_common::{group_by_user, Platform, Post, PostsByUser};
use tracing::info;

/// Fetch pending bot updates and keep the messages posted in `channel`
/// (username or numeric chat id). Messages without a sender are dropped.
pub async fn collect_from_telegram(
    client: &TelegramClient,
    channel: &str,
    limit: u32,
) -> Result<PostsByUser> {
    info!(channel, limit, "telegram: fetching updates");

    let updates = client
        .get_updates(limit)
        .await
        .context("Telegram getUpdates request failed")?;

    let fetched = updates.len();
    let posts = updates
        .into_iter()
        .take(limit as usize)
        .filter_map(Update::into_message)
        .filter(|m| m.chat.matches(channel))
        .filter_map(convert_message);
    let grouped = group_by_user(posts);
    info!(fetched, users = grouped.len(), "telegram: grouped messages");

    Ok(grouped)
}

fn convert_message(message: Message) -> Option<Post> {
    let user_id = message.sender_id()?.to_string();
    let date = DateTime::from_timestamp(message.date, 0)
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true));

    Some(Post {
        post_id: message.message_id.to_string(),
        user_id,
        platform: Platform::Telegram,
        content: message.text.or(message.caption).unwrap_or_default(),
        metadata: serde_json::json!({
            "date": date,
            "chat_id": message.chat.id,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(json: serde_json::Value) -> Message {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn maps_group_message() {
        let post = convert_message(message(serde_json::json!({
            "message_id": 123,
            "from": {"id": 456, "is_bot": false, "first_name": "A"},
            "chat": {"id": -100, "type": "supergroup", "username": "rustaceans"},
            "date": 1735732800,
            "text": "message text"
        })))
        .unwrap();

        assert_eq!(post.post_id, "123");
        assert_eq!(post.user_id, "456");
        assert_eq!(post.content, "message text");
        assert_eq!(post.metadata["date"], "2025-01-01T12:00:00Z");
        assert_eq!(post.metadata["chat_id"], -100);
    }

    #[test]
    fn caption_is_used_for_media() {
        let post = convert_message(message(serde_json::json!({
            "message_id": 1,
            "from": {"id": 2},
            "chat": {"id": 3, "type": "group"},
            "date": 0,
            "caption": "a photo"
        })))
        .unwrap();
        assert_eq!(post.content, "a photo");
    }

    #[test]
    fn message_without_sender_is_skipped() {
        let msg = message(serde_json::json!({
            "message_id": 1,
            "chat": {"id": 3, "type": "group"},
            "date": 0,
            "text": "orphan"
        }));
        assert!(convert_message(msg).is_none());
    }
}
