// One collector per platform. Each makes a single API call through its
// platform-apis client and reshapes the response into posts grouped by user.

mod bilibili;
mod telegram;
mod tiktok;
mod x;
mod xiaohongshu;
mod youtube;

pub use bilibili::collect_from_bilibili;
pub use telegram::collect_from_telegram;
pub use tiktok::collect_from_tiktok;
pub use x::collect_from_x;
pub use xiaohongshu::collect_from_xiaohongshu;
pub use youtube::collect_from_youtube;
