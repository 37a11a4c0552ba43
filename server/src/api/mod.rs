pub mod error;
pub mod page;
pub mod playback;
pub mod video;

use std::path::PathBuf;
use std::sync::Arc;

use crate::store::PlaybackStore;

pub use error::ApiError;
pub use page::PlayerPage;

/// State shared by every HTTP handler
#[derive(Clone)]
pub struct AppState {
    /// The single playback record
    pub store: PlaybackStore,
    /// HTML served at `/`
    pub page: Arc<PlayerPage>,
    /// Video served at `/video/stream`
    pub video_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(store: PlaybackStore, page: PlayerPage, video_path: PathBuf) -> Self {
        Self {
            store,
            page: Arc::new(page),
            video_path: Arc::new(video_path),
        }
    }
}
