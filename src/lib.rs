pub mod color;
pub mod config;
pub mod feeds;
pub mod waybar;

pub use color::{normalize_color, HexColor};
pub use config::{Config, Settings};
pub use feeds::{fetch_news, ArchNewsFetcher, FeedFetcher, NewsSummary};
pub use waybar::{format_output, ColorOptions, WaybarOutput};
