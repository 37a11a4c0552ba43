use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::INITIAL_TIME_SECONDS;
use crate::error::PlaybackError;
use crate::timestamp::ServerTimestamp;

/// Playback mode every client should be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackAction {
    Play,
    Pause,
}

impl PlaybackAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackAction::Play => "play",
            PlaybackAction::Pause => "pause",
        }
    }
}

impl fmt::Display for PlaybackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a client asks the server to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Play,
    Pause,
    /// Move the position without touching play/pause
    Seek,
}

impl CommandAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandAction::Play => "play",
            CommandAction::Pause => "pause",
            CommandAction::Seek => "seek",
        }
    }
}

impl FromStr for CommandAction {
    type Err = PlaybackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(CommandAction::Play),
            "pause" => Ok(CommandAction::Pause),
            "seek" => Ok(CommandAction::Seek),
            other => Err(PlaybackError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated playback state handed to polling clients.
///
/// `server_time` is the instant the estimate was taken for, so clients can
/// work out their own clock skew.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    pub action: PlaybackAction,
    pub time: f64,
    pub server_time: f64,
}

/// The authoritative playback record.
///
/// `reference_time` is the timeline position known to be correct at
/// `reference_timestamp`. It is never advanced in place while playing; the
/// current position is derived in [`PlaybackState::estimate`], so repeated
/// reads cannot accumulate drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub action: PlaybackAction,
    pub reference_time: f64,
    pub reference_timestamp: ServerTimestamp,
}

impl PlaybackState {
    /// Paused at the start of the video, as of `now`
    pub fn new(now: ServerTimestamp) -> Self {
        PlaybackState {
            action: PlaybackAction::Pause,
            reference_time: INITIAL_TIME_SECONDS,
            reference_timestamp: now,
        }
    }

    /// Estimated position at `now`. Paused state is reported as-is; playing
    /// state adds the elapsed wall-clock time, negative or not.
    pub fn estimate(&self, now: ServerTimestamp) -> PlaybackSnapshot {
        let time = match self.action {
            PlaybackAction::Pause => self.reference_time,
            PlaybackAction::Play => {
                self.reference_time + now.seconds_since(self.reference_timestamp)
            }
        };

        PlaybackSnapshot {
            action: self.action,
            time,
            server_time: now.as_secs_f64(),
        }
    }

    /// Applies a command and returns the action in effect afterwards.
    ///
    /// `time_seconds` is taken verbatim, including negative values or values
    /// past the end of the video.
    pub fn apply(
        &mut self,
        command: CommandAction,
        time_seconds: f64,
        now: ServerTimestamp,
    ) -> PlaybackAction {
        match command {
            CommandAction::Seek => {}
            CommandAction::Play => self.action = PlaybackAction::Play,
            CommandAction::Pause => self.action = PlaybackAction::Pause,
        }
        self.reference_time = time_seconds;
        self.reference_timestamp = now;

        debug!(
            "Applied {} @ {:.2}s, action is now {}",
            command, time_seconds, self.action
        );
        self.action
    }
}
