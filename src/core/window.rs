//! Bounded sliding window over recent samples.

use std::collections::VecDeque;

use crate::signal::BandSample;

/// Fixed-capacity ordered buffer of the most recent samples, oldest first.
///
/// Appending past capacity evicts from the front so survivors keep their
/// relative order. There is exactly one writer (the sampler loop); readers
/// take value snapshots and never observe a partial mutation.
#[derive(Debug, Clone)]
pub struct SlidingWindowBuffer {
    samples: VecDeque<BandSample>,
    capacity: usize,
}

impl SlidingWindowBuffer {
    /// A zero capacity request is clamped to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one sample, evicting the oldest past capacity. Always succeeds.
    pub fn append(&mut self, sample: BandSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Consistent point-in-time copy of the contents, oldest first.
    pub fn snapshot(&self) -> Vec<BandSample> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
