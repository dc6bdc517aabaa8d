// Bilibili service: first page of an uploader's videos.

use anyhow::{Context, Result};
use platform_apis::bilibili::UploadedVideo;
use platform_apis::BilibiliClient;
use socialgrab_common::{group_by_user, Platform, Post, PostsByUser};
use tracing::info;

/// Fetch up to `limit` videos uploaded by `uid`, all filed under `uid`.
pub async fn collect_from_bilibili(
    client: &BilibiliClient,
    uid: &str,
    limit: u32,
) -> Result<PostsByUser> {
    info!(uid, limit, "bilibili: fetching uploaded videos");

    let videos = client
        .uploaded_videos(uid, limit, 1)
        .await
        .context("Bilibili video listing failed")?;

    let fetched = videos.len();
    let grouped = group_by_user(
        videos
            .into_iter()
            .take(limit as usize)
            .map(|v| convert_video(v, uid)),
    );
    info!(fetched, users = grouped.len(), "bilibili: grouped videos");

    Ok(grouped)
}

fn convert_video(video: UploadedVideo, uid: &str) -> Post {
    Post {
        post_id: video.bvid,
        user_id: uid.to_string(),
        platform: Platform::Bilibili,
        content: video.title,
        metadata: serde_json::json!({
            "view": video.play,
            "like": video.like,
            "danmaku": video.video_review,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_video_fields() {
        let video: UploadedVideo = serde_json::from_value(serde_json::json!({
            "bvid": "BV1ab411c7",
            "title": "Video title",
            "play": 1000,
            "like": 10,
            "video_review": 50
        }))
        .unwrap();

        let post = convert_video(video, "12345");
        assert_eq!(post.post_id, "BV1ab411c7");
        assert_eq!(post.user_id, "12345");
        assert_eq!(post.content, "Video title");
        assert_eq!(
            post.metadata,
            serde_json::json!({"view": 1000, "like": 10, "danmaku": 50})
        );
    }
}
