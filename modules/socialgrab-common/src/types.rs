use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// --- Platforms ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    X,
    Telegram,
    #[serde(rename = "youtube")]
    YouTube,
    #[serde(rename = "tiktok")]
    TikTok,
    Xiaohongshu,
    Bilibili,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::X,
        Platform::Telegram,
        Platform::YouTube,
        Platform::TikTok,
        Platform::Xiaohongshu,
        Platform::Bilibili,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::X => "x",
            Platform::Telegram => "telegram",
            Platform::YouTube => "youtube",
            Platform::TikTok => "tiktok",
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::Bilibili => "bilibili",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Posts ---

/// A single post as returned by a platform, with the platform-native fields
/// kept as an untyped JSON object in `metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: String,
    pub user_id: String,
    pub platform: Platform,
    /// Text, title or caption. Empty when the platform returned none.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Posts grouped by `user_id`. Each list keeps the order the API returned.
pub type PostsByUser = BTreeMap<String, Vec<Post>>;
