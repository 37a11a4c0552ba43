use std::path::Path;

use anyhow::{Context, Result};
use axum::{extract::State, response::Html};

use super::{ApiError, AppState};

const BUILTIN_PLAYER: &str = include_str!("../../static/player.html");

/// HTML player page served at `/`
#[derive(Debug, Clone)]
pub struct PlayerPage {
    html: String,
}

impl PlayerPage {
    /// The bundled player that polls `/state` and posts to `/command`
    pub fn builtin() -> Self {
        Self {
            html: BUILTIN_PLAYER.to_string(),
        }
    }

    /// Loads a replacement page from disk. Read once; edits need a restart.
    pub fn from_template(path: &Path) -> Result<Self> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read player template {}", path.display()))?;
        Ok(Self { html })
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// `GET /`: the player, or a 500 while the video file is absent
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let video_present = tokio::fs::try_exists(state.video_path.as_path())
        .await
        .unwrap_or(false);

    if !video_present {
        let name = state
            .video_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| state.video_path.display().to_string());
        return Err(ApiError::VideoMissing(name));
    }

    Ok(Html(state.page.html().to_string()))
}
