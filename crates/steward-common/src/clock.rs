//! Process clock - uptime measurement anchored at process start
//!
//! Created once in `main` and passed by reference into anything that
//! reports uptime. Replaces the usual mutable "startup time" global:
//! holders of a `ProcessClock` cannot reset it, and nothing reads ambient
//! process state.

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// Wall-clock and monotonic anchor captured at process start
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started_instant: Instant,
    started_at: DateTime<Utc>,
}

impl ProcessClock {
    /// Capture the current moment as the process start
    pub fn start() -> Self {
        Self {
            started_instant: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Wall-clock time the process started
    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Elapsed time since process start, from the monotonic clock
    #[inline]
    pub fn uptime(&self) -> Duration {
        self.started_instant.elapsed()
    }

    /// Whole seconds since process start
    #[inline]
    pub fn uptime_seconds(&self) -> u64 {
        self.uptime().as_secs()
    }
}
