//! Recording on/off state machine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordingState {
    Idle,
    Armed,
}

/// Gate for the sampling pipeline.
///
/// Transitions happen only via explicit `start`/`stop`; there are no
/// timeouts. The sampler loop is expected to check `is_armed` before
/// appending, so stopping actually suspends production rather than just
/// relabeling a button.
#[derive(Debug, Clone)]
pub struct RecordingController {
    state: RecordingState,
}

impl RecordingController {
    pub fn new() -> Self {
        Self {
            state: RecordingState::Idle,
        }
    }

    /// Arm the sampler. Returns `true` only when this call transitioned;
    /// calling while already armed is a no-op.
    pub fn start(&mut self) -> bool {
        if self.state == RecordingState::Armed {
            return false;
        }
        self.state = RecordingState::Armed;
        true
    }

    /// Disarm the sampler. Idempotent like `start`.
    pub fn stop(&mut self) -> bool {
        if self.state == RecordingState::Idle {
            return false;
        }
        self.state = RecordingState::Idle;
        true
    }

    pub fn is_armed(&self) -> bool {
        self.state == RecordingState::Armed
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }
}

impl Default for RecordingController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let rec = RecordingController::new();
        assert!(!rec.is_armed());
        assert_eq!(rec.state(), RecordingState::Idle);
    }

    #[test]
    fn start_then_stop_round_trip() {
        let mut rec = RecordingController::new();
        assert!(rec.start());
        assert!(rec.is_armed());
        assert!(rec.stop());
        assert!(!rec.is_armed());
    }

    #[test]
    fn transitions_are_idempotent() {
        let mut rec = RecordingController::new();
        assert!(!rec.stop(), "stop while idle is a no-op");
        assert!(rec.start());
        assert!(!rec.start(), "start while armed is a no-op");
        assert!(rec.is_armed());
        assert!(rec.stop());
        assert!(!rec.stop());
        assert!(!rec.is_armed());
    }
}
