/// Playback position a fresh server starts from, in seconds
pub const INITIAL_TIME_SECONDS: f64 = 0.0;

/// Position assumed when a command omits `time`
pub const DEFAULT_COMMAND_TIME_SECONDS: f64 = 0.0;

