use anyhow::Result;
use clap::Subcommand;
use platform_apis::{
    BilibiliClient, TelegramClient, TikTokClient, XClient, XiaohongshuClient, YouTubeClient,
};
use socialgrab_common::{AppConfig, Platform, PostsByUser};

use crate::services;

/// One collection run against one platform. Doubles as the CLI subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CollectRequest {
    /// Search recent posts on X (Twitter)
    X {
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 100)]
        max_results: u32,
    },

    /// Read messages a bot has received from a Telegram channel or group
    Telegram {
        /// Channel username (with or without @) or numeric chat id
        #[arg(long)]
        channel: String,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },

    /// List videos of a YouTube channel
    #[command(name = "youtube")]
    YouTube {
        #[arg(long)]
        channel_id: String,
        #[arg(long, default_value_t = 50)]
        max_results: u32,
    },

    /// Query TikTok videos by keyword via the Research API
    #[command(name = "tiktok")]
    TikTok {
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },

    /// Search Xiaohongshu notes by keyword
    Xiaohongshu {
        #[arg(long)]
        keyword: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },

    /// List videos uploaded by a Bilibili user
    Bilibili {
        /// Uploader UID (mid)
        #[arg(long)]
        uid: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
}

impl CollectRequest {
    pub fn platform(&self) -> Platform {
        match self {
            CollectRequest::X { .. } => Platform::X,
            CollectRequest::Telegram { .. } => Platform::Telegram,
            CollectRequest::YouTube { .. } => Platform::YouTube,
            CollectRequest::TikTok { .. } => Platform::TikTok,
            CollectRequest::Xiaohongshu { .. } => Platform::Xiaohongshu,
            CollectRequest::Bilibili { .. } => Platform::Bilibili,
        }
    }
}

/// Build the platform client from `config` and run its collector.
pub async fn collect(config: &AppConfig, request: &CollectRequest) -> Result<PostsByUser> {
    tracing::info!(platform = %request.platform(), "Starting collection");

    match request {
        CollectRequest::X { query, max_results } => {
            let client = XClient::new(config.x_bearer_token()?);
            services::collect_from_x(&client, query, *max_results).await
        }
        CollectRequest::Telegram { channel, limit } => {
            let client = TelegramClient::new(config.telegram_bot_token()?);
            services::collect_from_telegram(&client, channel, *limit).await
        }
        CollectRequest::YouTube {
            channel_id,
            max_results,
        } => {
            let client = YouTubeClient::new(config.youtube_api_key()?);
            services::collect_from_youtube(&client, channel_id, *max_results).await
        }
        CollectRequest::TikTok { query, limit } => {
            let client = TikTokClient::new(config.tiktok_access_token()?);
            services::collect_from_tiktok(&client, query, *limit).await
        }
        CollectRequest::Xiaohongshu { keyword, limit } => {
            let mut client = XiaohongshuClient::new(config.xiaohongshu_api_base()?);
            if let Some(ref token) = config.xiaohongshu_access_token {
                client = client.with_access_token(token.as_str());
            }
            services::collect_from_xiaohongshu(&client, keyword, *limit).await
        }
        CollectRequest::Bilibili { uid, limit } => {
            let mut client = BilibiliClient::new();
            if let Some(ref sessdata) = config.bilibili_sessdata {
                client = client.with_sessdata(sessdata.as_str());
            }
            services::collect_from_bilibili(&client, uid, *limit).await
        }
    }
}
