pub mod core;
pub mod fetcher;

pub use self::core::EventSender;
pub use fetcher::AssetFetcher;
