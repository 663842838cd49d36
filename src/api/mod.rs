// External service clients
pub mod http_fetcher;
pub mod video_metadata;
