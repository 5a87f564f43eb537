//! Shared telemetry/catalog state for the daemon.
//!
//! `DataContext` is the single process-wide holder of the sliding sample
//! window and the dream catalog. It is handed around as `Arc<DataContext>`;
//! nothing in the daemon reaches for globals. All mutation funnels through
//! two writer paths: the sampler loop (`sample_tick`) and generation
//! completions (`generate`). Readers either poll value snapshots or hold a
//! watch receiver that always carries the latest snapshot.

use thiserror::Error;
use tokio::sync::{watch, RwLock};
use tokio::time::{sleep, Duration};
use tracing::info;

use oneira::catalog::{Dream, DreamCatalog};
use oneira::config::TelemetryConfig;
use oneira::forge::DreamForge;
use oneira::recording::RecordingController;
use oneira::signal::{BandSample, SignalSampler};
use oneira::window::SlidingWindowBuffer;

use crate::clock::{self, ClockError};

/// A generation attempt that did not produce an entry.
///
/// The simulated backend itself never fails, so the only failure today is a
/// broken wall clock. Either way the catalog is left untouched — no partial
/// entry is ever visible, and other in-flight generations are unaffected.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Clock(#[from] ClockError),
}

struct CoreState {
    sampler: SignalSampler,
    window: SlidingWindowBuffer,
    recording: RecordingController,
    catalog: DreamCatalog,
    forge: DreamForge,
}

pub struct DataContext {
    config: TelemetryConfig,
    state: RwLock<CoreState>,
    samples_tx: watch::Sender<Vec<BandSample>>,
    dreams_tx: watch::Sender<Vec<Dream>>,
}

impl DataContext {
    pub fn new(config: TelemetryConfig, seed: u64) -> Self {
        let config = config.clamped();
        let catalog = DreamCatalog::seeded();
        let (samples_tx, _) = watch::channel(Vec::new());
        let (dreams_tx, _) = watch::channel(catalog.all());
        Self {
            state: RwLock::new(CoreState {
                sampler: SignalSampler::new(seed),
                window: SlidingWindowBuffer::new(config.buffer_capacity),
                recording: RecordingController::new(),
                catalog,
                // Decorrelate the forge's draws from the sampler's.
                forge: DreamForge::new(seed ^ 0x00FF_00FF_00FF_00FF),
            }),
            config,
            samples_tx,
            dreams_tx,
        }
    }

    pub fn config(&self) -> &TelemetryConfig {
        &self.config
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.config.sample_interval_ms)
    }

    /// One producer step: when recording is armed, synthesize a sample,
    /// append it to the window and publish the fresh snapshot.
    ///
    /// Returns whether a sample was produced. A clock failure here is fatal
    /// to the telemetry pipeline and is the caller's job to surface.
    pub async fn sample_tick(&self) -> Result<bool, ClockError> {
        let now_ms = clock::now_ms()?;
        let mut s = self.state.write().await;
        if !s.recording.is_armed() {
            return Ok(false);
        }
        let sample = s.sampler.tick(now_ms);
        s.window.append(sample);
        self.samples_tx.send_replace(s.window.snapshot());
        Ok(true)
    }

    pub async fn start_recording(&self) {
        let mut s = self.state.write().await;
        if s.recording.start() {
            info!("Recording armed");
        }
    }

    pub async fn stop_recording(&self) {
        let mut s = self.state.write().await;
        if s.recording.stop() {
            info!("Recording stopped");
        }
    }

    pub async fn is_recording(&self) -> bool {
        self.state.read().await.recording.is_armed()
    }

    /// Run one generation: suspend for the simulated backend latency, then
    /// forge an entry and prepend it to the catalog in a single writer turn.
    ///
    /// Overlapping calls are safe: each completion takes the write lock once,
    /// so no entry is lost and catalog order is completion order. There is no
    /// cancellation; once started a generation runs to its single suspension
    /// point and completes.
    pub async fn generate(&self, description: Option<String>) -> Result<Dream, GenerationError> {
        sleep(Duration::from_millis(self.config.generation_latency_ms)).await;

        let now_ms = clock::now_ms()?;
        let mut s = self.state.write().await;
        let dream = s.forge.compose(now_ms, description.as_deref());
        s.catalog.prepend(dream.clone());
        self.dreams_tx.send_replace(s.catalog.all());
        info!("Dream generated: {} ({})", dream.id, dream.title);
        Ok(dream)
    }

    /// Push subscription: the receiver's value is always the latest window
    /// snapshot, replaced on every produced sample.
    pub fn subscribe_samples(&self) -> watch::Receiver<Vec<BandSample>> {
        self.samples_tx.subscribe()
    }

    /// Push subscription for the catalog, replaced on every completed
    /// generation.
    pub fn subscribe_dreams(&self) -> watch::Receiver<Vec<Dream>> {
        self.dreams_tx.subscribe()
    }

    /// Poll-style window snapshot, oldest first.
    pub async fn samples(&self) -> Vec<BandSample> {
        self.state.read().await.window.snapshot()
    }

    /// Poll-style catalog snapshot, newest first.
    pub async fn dreams(&self) -> Vec<Dream> {
        self.state.read().await.catalog.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DataContext {
        DataContext::new(TelemetryConfig::default(), 7)
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_generations_both_land() {
        let ctx = ctx();
        let before = ctx.dreams().await.len();

        let (a, b) = tokio::join!(ctx.generate(None), ctx.generate(Some("second".to_string())));
        let a = a.unwrap();
        let b = b.unwrap();

        assert_ne!(a.id, b.id);
        let all = ctx.dreams().await;
        assert_eq!(all.len(), before + 2);
        // Both completions are present, whichever finished first.
        assert!(all.iter().any(|d| d.id == a.id));
        assert!(all.iter().any(|d| d.id == b.id));
    }

    #[tokio::test(start_paused = true)]
    async fn generated_entry_leads_the_catalog() {
        let ctx = ctx();
        let dream = ctx.generate(None).await.unwrap();
        let all = ctx.dreams().await;
        assert_eq!(all[0], dream);
        // Seeds keep their relative order behind it.
        assert_eq!(all[1].id, "1");
        assert_eq!(all[2].id, "2");
        assert_eq!(all[3].id, "3");
    }

    #[tokio::test(start_paused = true)]
    async fn description_is_used_verbatim_or_defaulted() {
        let ctx = ctx();
        let custom = ctx.generate(Some("custom text".to_string())).await.unwrap();
        assert_eq!(custom.description, "custom text");

        let defaulted = ctx.generate(None).await.unwrap();
        assert_eq!(
            defaulted.description,
            oneira::forge::DEFAULT_DESCRIPTION
        );
    }

    #[tokio::test(start_paused = true)]
    async fn sampler_is_gated_by_the_recording_controller() {
        let ctx = ctx();
        assert!(!ctx.is_recording().await);
        assert!(!ctx.sample_tick().await.unwrap());
        assert!(ctx.samples().await.is_empty());

        ctx.start_recording().await;
        ctx.start_recording().await; // idempotent
        assert!(ctx.is_recording().await);
        assert!(ctx.sample_tick().await.unwrap());
        assert!(ctx.sample_tick().await.unwrap());
        assert_eq!(ctx.samples().await.len(), 2);

        ctx.stop_recording().await;
        assert!(!ctx.sample_tick().await.unwrap());
        assert_eq!(ctx.samples().await.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn watch_subscribers_see_the_latest_snapshots() {
        let ctx = ctx();
        let mut dreams_rx = ctx.subscribe_dreams();
        assert_eq!(dreams_rx.borrow_and_update().len(), 3);

        ctx.generate(None).await.unwrap();
        assert!(dreams_rx.has_changed().unwrap());
        assert_eq!(dreams_rx.borrow_and_update().len(), 4);

        let mut samples_rx = ctx.subscribe_samples();
        ctx.start_recording().await;
        ctx.sample_tick().await.unwrap();
        assert_eq!(samples_rx.borrow_and_update().len(), 1);
    }
}
