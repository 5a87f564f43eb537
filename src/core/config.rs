//! Telemetry pipeline configuration.

use serde::{Deserialize, Serialize};

fn default_sample_interval_ms() -> u64 {
    100
}

fn default_buffer_capacity() -> usize {
    100
}

fn default_generation_latency_ms() -> u64 {
    3000
}

/// Knobs for the telemetry pipeline and the generation workflow.
///
/// Defaults match the reference dashboard: a sample every 100 ms, the last
/// 100 samples retained for charting, and a 3 s simulated generation latency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelemetryConfig {
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,

    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,

    #[serde(default = "default_generation_latency_ms")]
    pub generation_latency_ms: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: default_sample_interval_ms(),
            buffer_capacity: default_buffer_capacity(),
            generation_latency_ms: default_generation_latency_ms(),
        }
    }
}

impl TelemetryConfig {
    /// Clamp all knobs into safe operating ranges.
    ///
    /// Callers that accept external configuration should pass it through here
    /// before wiring up the pipeline.
    pub fn clamped(mut self) -> Self {
        self.sample_interval_ms = self.sample_interval_ms.clamp(10, 60_000);
        self.buffer_capacity = self.buffer_capacity.clamp(1, 100_000);
        self.generation_latency_ms = self.generation_latency_ms.min(600_000);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let cfg = TelemetryConfig::default();
        assert_eq!(cfg.sample_interval_ms, 100);
        assert_eq!(cfg.buffer_capacity, 100);
        assert_eq!(cfg.generation_latency_ms, 3000);
        // Defaults are already inside the clamp ranges.
        assert_eq!(cfg.clone().clamped(), cfg);
    }

    #[test]
    fn clamps_out_of_range_knobs() {
        let cfg = TelemetryConfig {
            sample_interval_ms: 0,
            buffer_capacity: 0,
            generation_latency_ms: u64::MAX,
        }
        .clamped();
        assert_eq!(cfg.sample_interval_ms, 10);
        assert_eq!(cfg.buffer_capacity, 1);
        assert_eq!(cfg.generation_latency_ms, 600_000);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: TelemetryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, TelemetryConfig::default());
    }
}
