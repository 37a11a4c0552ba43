use std::time::Instant;

use chrono::{DateTime, Utc};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
const MILLIS_PER_SECOND: f64 = 1_000.0;

/// Wall-clock instant as seen by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServerTimestamp(DateTime<Utc>);

impl ServerTimestamp {
    /// Seconds since the Unix epoch, with sub-second precision
    pub fn as_secs_f64(&self) -> f64 {
        self.0.timestamp() as f64 + self.0.timestamp_subsec_nanos() as f64 / NANOS_PER_SECOND
    }

    /// Signed seconds elapsed since `earlier`. Negative if the clock went backwards.
    pub fn seconds_since(&self, earlier: ServerTimestamp) -> f64 {
        let delta = self.0 - earlier.0;
        match delta.num_nanoseconds() {
            Some(nanos) => nanos as f64 / NANOS_PER_SECOND,
            // Nanosecond count overflows past ~292 years
            None => delta.num_milliseconds() as f64 / MILLIS_PER_SECOND,
        }
    }
}

impl From<DateTime<Utc>> for ServerTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        ServerTimestamp(value)
    }
}

/// Source of [`ServerTimestamp`]s that never steps backwards.
///
/// The UTC time is sampled once at construction; every later reading adds
/// monotonic elapsed time to it, so adjustments of the system clock do not
/// leak into playback extrapolation.
#[derive(Debug, Clone, Copy)]
pub struct ServerClock {
    started: Instant,
    started_at: DateTime<Utc>,
}

impl ServerClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn now(&self) -> ServerTimestamp {
        let advanced = chrono::Duration::from_std(self.started.elapsed())
            .ok()
            .and_then(|elapsed| self.started_at.checked_add_signed(elapsed));

        match advanced {
            Some(instant) => ServerTimestamp(instant),
            // Only reachable after centuries of uptime
            None => ServerTimestamp(Utc::now()),
        }
    }
}

impl Default for ServerClock {
    fn default() -> Self {
        Self::new()
    }
}
