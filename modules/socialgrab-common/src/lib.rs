pub mod config;
pub mod grouping;
pub mod types;

pub use config::AppConfig;
pub use grouping::{group_by_user, merge_results};
pub use types::*;
