pub mod collect;
pub mod output;
pub mod services;

pub use collect::{collect, CollectRequest};
pub use services::{
    collect_from_bilibili, collect_from_telegram, collect_from_tiktok, collect_from_x,
    collect_from_xiaohongshu, collect_from_youtube,
};
