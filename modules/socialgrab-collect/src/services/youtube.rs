// YouTube service: a channel's search results, videos only.

use anyhow::{Context, Result};
use platform_apis::youtube::SearchResult;
use platform_apis::YouTubeClient;
use socialgrab_common::{group_by_user, Platform, Post, PostsByUser};
use tracing::info;

/// List videos of `channel_id`. Every post is filed under the requested
/// channel id; non-video results (playlists, the channel itself) are skipped.
pub async fn collect_from_youtube(
    client: &YouTubeClient,
    channel_id: &str,
    max_results: u32,
) -> Result<PostsByUser> {
    info!(channel_id, max_results, "youtube: searching channel");

    let resp = client
        .search_channel(channel_id, max_results)
        .await
        .context("YouTube search request failed")?;

    let fetched = resp.items.len();
    let grouped = group_by_user(
        resp.items
            .into_iter()
            .take(max_results as usize)
            .filter_map(|item| convert_item(item, channel_id)),
    );
    info!(fetched, users = grouped.len(), "youtube: grouped videos");

    Ok(grouped)
}

fn convert_item(item: SearchResult, channel_id: &str) -> Option<Post> {
    let video_id = item.id.video_id?;
    let snippet = item.snippet;

    Some(Post {
        post_id: video_id,
        user_id: channel_id.to_string(),
        platform: Platform::YouTube,
        content: snippet.title,
        metadata: serde_json::json!({
            "published_at": snippet.published_at,
            "description": snippet.description,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_video_and_skips_others() {
        let items: Vec<SearchResult> = serde_json::from_value(serde_json::json!([
            {
                "id": {"kind": "youtube#video", "videoId": "abcdEFGH"},
                "snippet": {
                    "publishedAt": "2025-01-01T00:00:00Z",
                    "title": "Video Title",
                    "description": "Video description"
                }
            },
            {
                "id": {"kind": "youtube#playlist", "playlistId": "PL1"},
                "snippet": {"publishedAt": "2025-01-02T00:00:00Z", "title": "Playlist"}
            }
        ]))
        .unwrap();

        let posts: Vec<Post> = items
            .into_iter()
            .filter_map(|i| convert_item(i, "UC123456"))
            .collect();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post_id, "abcdEFGH");
        assert_eq!(posts[0].user_id, "UC123456");
        assert_eq!(posts[0].content, "Video Title");
        assert_eq!(posts[0].metadata["published_at"], "2025-01-01T00:00:00Z");
        assert_eq!(posts[0].metadata["description"], "Video description");
    }
}
