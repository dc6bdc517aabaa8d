use crate::types::{Post, PostsByUser};

/// Group posts under their `user_id`, keeping input order within each user.
pub fn group_by_user(posts: impl IntoIterator<Item = Post>) -> PostsByUser {
    let mut grouped = PostsByUser::new();
    for post in posts {
        grouped.entry(post.user_id.clone()).or_default().push(post);
    }
    grouped
}

/// Merge several groupings into one. Lists for the same user are concatenated
/// in source order; nothing is deduplicated.
pub fn merge_results(sources: impl IntoIterator<Item = PostsByUser>) -> PostsByUser {
    let mut merged = PostsByUser::new();
    for source in sources {
        for (user_id, posts) in source {
            merged.entry(user_id).or_default().extend(posts);
        }
    }
    merged
}
