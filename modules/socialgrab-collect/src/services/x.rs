// X service: recent tweet search grouped by author.

use anyhow::{Context, Result};
use platform_apis::x::Tweet;
use platform_apis::XClient;
use socialgrab_common::{group_by_user, Platform, Post, PostsByUser};
use tracing::info;

/// Search recent tweets and group them by `author_id`.
pub async fn collect_from_x(
    client: &XClient,
    query: &str,
    max_results: u32,
) -> Result<PostsByUser> {
    info!(query, max_results, "x: searching recent tweets");

    let resp = client
        .search_recent_tweets(query, max_results)
        .await
        .context("X recent search request failed")?;

    let fetched = resp.data.len();
    let grouped = group_by_user(
        resp.data
            .into_iter()
            .take(max_results as usize)
            .filter_map(convert_tweet),
    );
    info!(fetched, users = grouped.len(), "x: grouped tweets");

    Ok(grouped)
}

fn convert_tweet(tweet: Tweet) -> Option<Post> {
    let hashtags = tweet.hashtags();
    let user_id = tweet.author_id?;

    Some(Post {
        post_id: tweet.id,
        user_id,
        platform: Platform::X,
        content: tweet.text,
        metadata: serde_json::json!({
            "created_at": tweet.created_at,
            "lang": tweet.lang,
            "hashtags": hashtags,
        }),
    })
}
