mod constants;
mod error;
mod playback;
mod timestamp;

pub use constants::*;
pub use error::PlaybackError;
pub use playback::*;
pub use timestamp::{ServerClock, ServerTimestamp};
