use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use common::PlaybackError;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was not sent as JSON
    #[error("request body is not JSON")]
    NotJson,

    /// Body claimed to be JSON but did not decode into a command
    #[error("malformed command body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// The configured video file does not exist
    #[error("video file {0} not found")]
    VideoMissing(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotJson | ApiError::MalformedBody(_) | ApiError::Playback(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::VideoMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            ApiError::NotJson => (status, "Must be JSON").into_response(),
            ApiError::MalformedBody(e) => {
                warn!("Malformed command body: {}", e);
                (status, "Invalid JSON").into_response()
            }
            ApiError::Playback(PlaybackError::InvalidAction(action)) => {
                warn!("Invalid action received: {:?}", action);
                (status, "Invalid action").into_response()
            }
            ApiError::VideoMissing(name) => {
                error!("Video file '{}' not found", name);
                let body = format!(
                    "<h1>Error: Video file '{}' not found.</h1>\
                     <p>Ask the host to put the video next to the server.</p>",
                    html_escape(&name)
                );
                (status, Html(body)).into_response()
            }
        }
    }
}

fn html_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
