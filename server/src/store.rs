use std::sync::Arc;

use common::{
    CommandAction, PlaybackAction, PlaybackError, PlaybackSnapshot, PlaybackState, ServerClock,
    ServerTimestamp,
};
use tokio::sync::Mutex;

/// Process-wide playback record shared by every request handler.
///
/// All reads and writes go through one mutex. The guard is never held across
/// an `.await`, so each critical section is a handful of field accesses.
#[derive(Clone)]
pub struct PlaybackStore {
    state: Arc<Mutex<PlaybackState>>,
    clock: ServerClock,
}

impl PlaybackStore {
    /// Creates a store paused at 0.0 as of now
    pub fn new() -> Self {
        let clock = ServerClock::new();
        Self {
            state: Arc::new(Mutex::new(PlaybackState::new(clock.now()))),
            clock,
        }
    }

    pub fn starting_at(now: ServerTimestamp) -> Self {
        Self {
            state: Arc::new(Mutex::new(PlaybackState::new(now))),
            clock: ServerClock::new(),
        }
    }

    /// Current reading of the store's monotonic clock
    pub fn now(&self) -> ServerTimestamp {
        self.clock.now()
    }

    /// Estimated state at `now`
    pub async fn estimate(&self, now: ServerTimestamp) -> PlaybackSnapshot {
        let state = self.state.lock().await;
        state.estimate(now)
    }

    /// Applies `action` at `now`, returning the action in effect afterwards.
    /// An unknown action leaves the record untouched.
    pub async fn apply_command(
        &self,
        action: &str,
        time_seconds: f64,
        now: ServerTimestamp,
    ) -> Result<PlaybackAction, PlaybackError> {
        let mut state = self.state.lock().await;
        let command = action.parse::<CommandAction>()?;
        Ok(state.apply(command, time_seconds, now))
    }

    /// Estimated state, with the clock read inside the critical section
    pub async fn current_state(&self) -> PlaybackSnapshot {
        let state = self.state.lock().await;
        state.estimate(self.clock.now())
    }

    /// Applies `action` with the clock read inside the critical section
    pub async fn submit(&self, action: &str, time_seconds: f64) -> Result<PlaybackAction, PlaybackError> {
        let mut state = self.state.lock().await;
        let command = action.parse::<CommandAction>()?;
        Ok(state.apply(command, time_seconds, self.clock.now()))
    }

    /// Copy of the raw record
    pub async fn record(&self) -> PlaybackState {
        *self.state.lock().await
    }
}

impl Default for PlaybackStore {
    fn default() -> Self {
        Self::new()
    }
}
