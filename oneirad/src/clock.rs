//! Wall-clock access for the daemon.
//!
//! The core library takes timestamps as arguments; only the daemon touches
//! the real clock, so a broken clock surfaces here as an error instead of
//! a panic deep inside the pipeline.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("system clock is unavailable: {0}")]
pub struct ClockError(String);

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> Result<u64, ClockError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis().min(u64::MAX as u128) as u64)
        .map_err(|e| ClockError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_a_plausible_recent_time() {
        let ms = now_ms().unwrap();
        // 2020-01-01T00:00:00Z in ms; anything earlier means a broken clock.
        assert!(ms > 1_577_836_800_000);
    }
}
