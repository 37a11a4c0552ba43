use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use common::{PlaybackError, PlaybackSnapshot, DEFAULT_COMMAND_TIME_SECONDS};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{ApiError, AppState};

/// Body of `POST /command`
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    /// Any JSON value; only the strings `play`, `pause` and `seek` are accepted
    #[serde(default)]
    pub action: Option<Value>,
    #[serde(default = "default_command_time")]
    pub time: f64,
}

fn default_command_time() -> f64 {
    DEFAULT_COMMAND_TIME_SECONDS
}

impl CommandRequest {
    /// The action as text for the store to validate. Values that are not
    /// strings are rejected with their JSON text as the offending action.
    pub fn action_name(&self) -> Result<&str, PlaybackError> {
        match &self.action {
            Some(Value::String(name)) => Ok(name.as_str()),
            Some(other) => Err(PlaybackError::InvalidAction(other.to_string())),
            None => Err(PlaybackError::InvalidAction(String::new())),
        }
    }
}

/// `GET /state`: the current estimated playback state
pub async fn get_state(State(state): State<AppState>) -> Json<PlaybackSnapshot> {
    Json(state.store.current_state().await)
}

/// `POST /command`: play, pause or seek for everyone
pub async fn post_command(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    if !is_json_content_type(&headers) {
        return Err(ApiError::NotJson);
    }

    let request: CommandRequest = serde_json::from_slice(&body)?;
    let action = request.action_name()?;

    let in_effect = state.store.submit(action, request.time).await?;

    if action == "seek" {
        info!(
            "Client commanded SEEK to {:.2}s. Action remains {}.",
            request.time, in_effect
        );
    } else {
        info!("Client commanded {} @ {:.2}s.", in_effect, request.time);
    }

    Ok("OK")
}

/// `application/json` or any `application/*+json`, ignoring parameters
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json"
        || (mime.starts_with("application/") && mime.ends_with("+json"))
}
