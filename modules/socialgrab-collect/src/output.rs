use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use socialgrab_common::PostsByUser;

/// Serialize grouped posts as JSON, pretty-printed unless `compact`.
pub fn render(posts: &PostsByUser, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(posts)?
    } else {
        serde_json::to_string_pretty(posts)?
    };
    Ok(json)
}

/// Write rendered output to `path`, or stdout when no path is given.
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").context("Failed to write to stdout")
        }
    }
}

/// Load a grouping previously written by `write_output`.
pub fn read_results(path: &Path) -> Result<PostsByUser> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a posts-by-user map", path.display()))
}

/// Total number of posts across all users.
pub fn post_count(posts: &PostsByUser) -> usize {
    posts.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialgrab_common::{group_by_user, Platform, Post};

    fn sample() -> PostsByUser {
        group_by_user(vec![
            Post {
                post_id: "BV1".into(),
                user_id: "12345".into(),
                platform: Platform::Bilibili,
                content: "标题".into(),
                metadata: serde_json::json!({"view": 1}),
            },
            Post {
                post_id: "BV2".into(),
                user_id: "12345".into(),
                platform: Platform::Bilibili,
                content: "second".into(),
                metadata: serde_json::json!({"view": 2}),
            },
        ])
    }

    #[test]
    fn compact_is_single_line() {
        let out = render(&sample(), true).unwrap();
        assert!(!out.contains('\n'));
        assert!(out.starts_with(r#"{"12345":[{"post_id":"BV1""#));
    }

    #[test]
    fn file_output_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_output(&render(&sample(), false).unwrap(), Some(&path)).unwrap();
        let back = read_results(&path).unwrap();

        assert_eq!(back, sample());
        assert_eq!(post_count(&back), 2);
    }

    #[test]
    fn reading_garbage_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = read_results(&path).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }
}
