//! Dream forge: deterministic construction of generated catalog entries.
//!
//! This is the synchronous half of the generation workflow. The async side
//! (simulated latency, shared-state insertion) lives in the daemon; keeping
//! entry construction pure means tests never need a runtime or a clock.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Dream, SleepPhase};
use crate::prng::Prng;

/// Description used when the caller supplies none (or only whitespace).
pub const DEFAULT_DESCRIPTION: &str =
    "AI-generated dream based on current brainwave patterns";

/// Pattern label marking forge output, as opposed to seeded entries.
pub const GENERATED_PATTERN: &str = "ai-generated";

const TITLES: [&str; 6] = [
    "Quantum Forest Walk",
    "Digital Butterfly Garden",
    "Crystalline Mountain Peak",
    "Ethereal Dance Floor",
    "Time-Twisted Library",
    "Floating Island Adventure",
];

const THUMBNAILS: [&str; 4] = [
    "https://images.pexels.com/photos/1111597/pexels-photo-1111597.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2",
    "https://images.pexels.com/photos/2832034/pexels-photo-2832034.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2",
    "https://images.pexels.com/photos/1939485/pexels-photo-1939485.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2",
    "https://images.pexels.com/photos/2662116/pexels-photo-2662116.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2",
];

const VIDEO_URL: &str = "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4";

// Seeded catalogs use small numeric ids; the forge starts well past them.
const FIRST_SEQ: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForgeError {
    EmptyTitlePool,
    EmptyThumbnailPool,
}

impl fmt::Display for ForgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForgeError::EmptyTitlePool => write!(f, "title pool is empty"),
            ForgeError::EmptyThumbnailPool => write!(f, "thumbnail pool is empty"),
        }
    }
}

impl std::error::Error for ForgeError {}

/// Builds generated dream entries from fixed template pools.
///
/// Identifiers come from a strictly monotonic sequence counter rather than
/// the clock, so overlapping generations can never collide.
#[derive(Debug, Clone)]
pub struct DreamForge {
    rng: Prng,
    next_seq: u64,
    titles: Vec<String>,
    thumbnails: Vec<String>,
    video_url: String,
}

impl DreamForge {
    /// Forge with the stock template pools. Never fails.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Prng::new(seed),
            next_seq: FIRST_SEQ,
            titles: TITLES.iter().map(|s| s.to_string()).collect(),
            thumbnails: THUMBNAILS.iter().map(|s| s.to_string()).collect(),
            video_url: VIDEO_URL.to_string(),
        }
    }

    /// Forge with caller-supplied pools. Empty pools are rejected up front
    /// so `compose` itself stays infallible.
    pub fn with_pools(
        seed: u64,
        titles: Vec<String>,
        thumbnails: Vec<String>,
        video_url: String,
    ) -> Result<Self, ForgeError> {
        if titles.is_empty() {
            return Err(ForgeError::EmptyTitlePool);
        }
        if thumbnails.is_empty() {
            return Err(ForgeError::EmptyThumbnailPool);
        }
        Ok(Self {
            rng: Prng::new(seed),
            next_seq: FIRST_SEQ,
            titles,
            thumbnails,
            video_url,
        })
    }

    /// Build one generated entry.
    ///
    /// `description` is used verbatim when non-blank; otherwise the
    /// documented default sentence is substituted.
    pub fn compose(&mut self, now_ms: u64, description: Option<&str>) -> Dream {
        let seq = self.next_seq;
        self.next_seq += 1;

        let title = self.titles[self.rng.pick_index(self.titles.len())].clone();
        let thumbnail = self.thumbnails[self.rng.pick_index(self.thumbnails.len())].clone();
        let duration_secs = 30 + self.rng.gen_range_u32(0, 60);

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();

        Dream {
            id: format!("dream-{seq}"),
            title,
            video_url: self.video_url.clone(),
            thumbnail,
            duration_secs,
            created_at_ms: now_ms,
            emotions: vec![
                "curiosity".to_string(),
                "wonder".to_string(),
                "creativity".to_string(),
            ],
            brainwave_pattern: GENERATED_PATTERN.to_string(),
            description,
            sleep_phase: SleepPhase::Rem,
        }
    }
}
