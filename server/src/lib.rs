pub mod api;
pub mod config;
pub mod http_server;
pub mod store;

pub use config::ServerConfig;
pub use store::PlaybackStore;
