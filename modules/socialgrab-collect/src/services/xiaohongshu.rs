// Xiaohongshu service: note keyword search grouped by author.

use anyhow::{Context, Result};
use platform_apis::xiaohongshu::Note;
use platform_apis::XiaohongshuClient;
use socialgrab_common::{group_by_user, Platform, Post, PostsByUser};
use tracing::info;

pub async fn collect_from_xiaohongshu(
    client: &XiaohongshuClient,
    keyword: &str,
    limit: u32,
) -> Result<PostsByUser> {
    info!(keyword, limit, "xiaohongshu: searching notes");

    let notes = client
        .search_notes(keyword, limit)
        .await
        .context("Xiaohongshu note search failed")?;

    let fetched = notes.len();
    let grouped = group_by_user(notes.into_iter().take(limit as usize).map(convert_note));
    info!(fetched, users = grouped.len(), "xiaohongshu: grouped notes");

    Ok(grouped)
}

fn convert_note(note: Note) -> Post {
    Post {
        post_id: note.id.to_string(),
        user_id: note.user_id.to_string(),
        platform: Platform::Xiaohongshu,
        content: note.title.unwrap_or_default(),
        metadata: serde_json::json!({
            "likes": note.likes,
            "comments": note.comments,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_note_fields() {
        let note: Note = serde_json::from_value(serde_json::json!({
            "id": "5f123456",
            "user_id": "u789",
            "title": "Title of note",
            "likes": 100,
            "comments": 5
        }))
        .unwrap();

        let post = convert_note(note);
        assert_eq!(post.post_id, "5f123456");
        assert_eq!(post.user_id, "u789");
        assert_eq!(post.content, "Title of note");
        assert_eq!(post.metadata, serde_json::json!({"likes": 100, "comments": 5}));
    }
}
