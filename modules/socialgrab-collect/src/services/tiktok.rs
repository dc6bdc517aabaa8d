// TikTok service: Research API keyword query grouped by creator.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use platform_apis::tiktok::{Video, VideoQuery};
use platform_apis::TikTokClient;
use socialgrab_common::{group_by_user, Platform, Post, PostsByUser};
use tracing::info;

/// Query videos matching `query` over the last 30 days and group them by
/// creator username.
pub async fn collect_from_tiktok(
    client: &TikTokClient,
    query: &str,
    limit: u32,
) -> Result<PostsByUser> {
    let request = VideoQuery::keyword(query, limit, Utc::now().date_naive());
    info!(
        query,
        limit,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "tiktok: querying videos"
    );

    let data = client
        .query_videos(&request)
        .await
        .context("TikTok research query failed")?;

    let fetched = data.videos.len();
    let grouped = group_by_user(
        data.videos
            .into_iter()
            .take(limit as usize)
            .filter_map(convert_video),
    );
    info!(fetched, users = grouped.len(), has_more = ?data.has_more, "tiktok: grouped videos");

    Ok(grouped)
}

fn convert_video(video: Video) -> Option<Post> {
    let user_id = video.username?;
    let create_time = video
        .create_time
        .and_then(|t| DateTime::from_timestamp(t, 0))
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true));

    Some(Post {
        post_id: video.id.to_string(),
        user_id,
        platform: Platform::TikTok,
        content: video.video_description.unwrap_or_default(),
        metadata: serde_json::json!({
            "create_time": create_time,
            "like_count": video.like_count,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_video_fields() {
        let video: Video = serde_json::from_value(serde_json::json!({
            "id": 123,
            "username": "creator987",
            "video_description": "Caption text",
            "create_time": 1735732800,
            "like_count": 100
        }))
        .unwrap();

        let post = convert_video(video).unwrap();
        assert_eq!(post.post_id, "123");
        assert_eq!(post.user_id, "creator987");
        assert_eq!(post.content, "Caption text");
        assert_eq!(post.metadata["create_time"], "2025-01-01T12:00:00Z");
        assert_eq!(post.metadata["like_count"], 100);
    }

    #[test]
    fn missing_description_is_empty() {
        let video: Video =
            serde_json::from_value(serde_json::json!({"id": "9", "username": "u"})).unwrap();
        let post = convert_video(video).unwrap();
        assert_eq!(post.content, "");
        assert!(post.metadata["like_count"].is_null());
    }

    #[test]
    fn video_without_username_is_skipped() {
        let video: Video = serde_json::from_value(serde_json::json!({"id": 1})).unwrap();
        assert!(convert_video(video).is_none());
    }
}
