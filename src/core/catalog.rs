//! Dream catalog: the growing, newest-first collection of generated entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepPhase {
    #[serde(rename = "REM")]
    Rem,
    #[serde(rename = "NREM1")]
    Nrem1,
    #[serde(rename = "NREM2")]
    Nrem2,
    #[serde(rename = "NREM3")]
    Nrem3,
}

/// One generated (or seeded) dream record.
///
/// Media locators are opaque strings and are not validated here; the view
/// layer decides what to do with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dream {
    pub id: String,
    pub title: String,
    pub video_url: String,
    pub thumbnail: String,
    /// Clip length in seconds, always > 0.
    pub duration_secs: u32,
    /// Milliseconds since the Unix epoch.
    pub created_at_ms: u64,
    /// Non-empty, order-irrelevant.
    pub emotions: Vec<String>,
    pub brainwave_pattern: String,
    pub description: String,
    pub sleep_phase: SleepPhase,
}

/// Ordered dream collection, newest first.
///
/// Seeded once at startup, then grows by prepension only. Existing entries
/// are never reordered or removed; the catalog is deliberately unbounded.
#[derive(Debug, Clone)]
pub struct DreamCatalog {
    dreams: Vec<Dream>,
}

impl DreamCatalog {
    pub fn new(initial: Vec<Dream>) -> Self {
        Self { dreams: initial }
    }

    /// Catalog pre-populated with the stock demo dreams.
    pub fn seeded() -> Self {
        Self::new(seed_dreams())
    }

    /// Insert a freshly generated entry at the front.
    pub fn prepend(&mut self, dream: Dream) {
        self.dreams.insert(0, dream);
    }

    /// Point-in-time copy, newest first.
    pub fn all(&self) -> Vec<Dream> {
        self.dreams.clone()
    }

    pub fn len(&self) -> usize {
        self.dreams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dreams.is_empty()
    }
}

const SAMPLE_VIDEO_URL: &str =
    "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4";

/// The stock entries every fresh catalog starts with.
pub fn seed_dreams() -> Vec<Dream> {
    vec![
        Dream {
            id: "1".to_string(),
            title: "Flying Over Neon Cities".to_string(),
            video_url: SAMPLE_VIDEO_URL.to_string(),
            thumbnail: "https://images.pexels.com/photos/2412603/pexels-photo-2412603.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2".to_string(),
            duration_secs: 45,
            created_at_ms: 1_705_716_900_000, // 2024-01-20T02:15:00Z
            emotions: vec![
                "wonder".to_string(),
                "freedom".to_string(),
                "excitement".to_string(),
            ],
            brainwave_pattern: "high-theta-rem".to_string(),
            description: "Soaring through a futuristic cityscape with vivid neon lights"
                .to_string(),
            sleep_phase: SleepPhase::Rem,
        },
        Dream {
            id: "2".to_string(),
            title: "Ocean of Stars".to_string(),
            video_url: SAMPLE_VIDEO_URL.to_string(),
            thumbnail: "https://images.pexels.com/photos/1252890/pexels-photo-1252890.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2".to_string(),
            duration_secs: 67,
            created_at_ms: 1_705_627_800_000, // 2024-01-19T01:30:00Z
            emotions: vec![
                "tranquility".to_string(),
                "awe".to_string(),
                "mysticism".to_string(),
            ],
            brainwave_pattern: "balanced-alpha-theta".to_string(),
            description: "Swimming through a cosmic ocean filled with glowing stars".to_string(),
            sleep_phase: SleepPhase::Rem,
        },
        Dream {
            id: "3".to_string(),
            title: "Childhood Memory Palace".to_string(),
            video_url: SAMPLE_VIDEO_URL.to_string(),
            thumbnail: "https://images.pexels.com/photos/1624496/pexels-photo-1624496.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2".to_string(),
            duration_secs: 89,
            created_at_ms: 1_705_549_500_000, // 2024-01-18T03:45:00Z
            emotions: vec![
                "nostalgia".to_string(),
                "warmth".to_string(),
                "comfort".to_string(),
            ],
            brainwave_pattern: "low-beta-high-alpha".to_string(),
            description: "Exploring rooms from childhood home with surreal twists".to_string(),
            sleep_phase: SleepPhase::Nrem2,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dream(id: &str) -> Dream {
        Dream {
            id: id.to_string(),
            title: "t".to_string(),
            video_url: "v".to_string(),
            thumbnail: "th".to_string(),
            duration_secs: 30,
            created_at_ms: 0,
            emotions: vec!["calm".to_string()],
            brainwave_pattern: "p".to_string(),
            description: "d".to_string(),
            sleep_phase: SleepPhase::Rem,
        }
    }

    #[test]
    fn seeded_catalog_matches_the_documented_entries() {
        let catalog = DreamCatalog::seeded();
        let all = catalog.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "1");
        assert_eq!(all[0].title, "Flying Over Neon Cities");
        assert_eq!(all[1].id, "2");
        assert_eq!(all[2].id, "3");
        assert_eq!(all[2].sleep_phase, SleepPhase::Nrem2);
    }

    #[test]
    fn prepend_leads_and_preserves_the_rest() {
        let mut catalog = DreamCatalog::seeded();
        catalog.prepend(dream("new"));
        let all = catalog.all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, "new");
        assert_eq!(all[1].id, "1");
        assert_eq!(all[2].id, "2");
        assert_eq!(all[3].id, "3");
    }

    #[test]
    fn snapshot_is_detached_from_later_prepends() {
        let mut catalog = DreamCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        let snap = catalog.all();
        catalog.prepend(dream("a"));
        assert!(snap.is_empty());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn sleep_phase_serializes_with_clinical_labels() {
        assert_eq!(
            serde_json::to_string(&SleepPhase::Rem).unwrap(),
            "\"REM\""
        );
        assert_eq!(
            serde_json::to_string(&SleepPhase::Nrem3).unwrap(),
            "\"NREM3\""
        );
    }
}
