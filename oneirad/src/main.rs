//! Oneira Daemon - simulated dream-telemetry service
//!
//! Runs the real-time pipeline in the background:
//! - a periodic sampler producing simulated EEG band readings
//! - a bounded sliding window feeding chart/statistics consumers
//! - asynchronous dream generation merging into the shared catalog
//!
//! The UI boundary is a stdin command loop (there is deliberately no
//! network listener; everything is in-process simulation):
//!   start | stop | status | samples | dreams | generate [description] | quit

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, warn};

use oneira::config::TelemetryConfig;

mod clock;
mod context;

use context::DataContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = TelemetryConfig::default().clamped();
    let seed = clock::now_ms()?;
    let ctx = Arc::new(DataContext::new(config, seed));

    // Sampler loop: ticks at the configured cadence for the daemon's
    // lifetime. The recording controller gates tick-to-append inside
    // `sample_tick`, so `stop` suspends production without killing the loop.
    {
        let ctx = Arc::clone(&ctx);
        tokio::spawn(async move {
            let mut ticker = time::interval(ctx.sample_interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(e) = ctx.sample_tick().await {
                    error!("Clock failure, telemetry pipeline stopped: {}", e);
                    break;
                }
            }
        });
    }

    // Exit cleanly on Ctrl-C; there is no state to persist.
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C: shutting down");
            std::process::exit(0);
        }
    });

    info!(
        "oneirad ready (interval {} ms, window {}, latency {} ms)",
        ctx.config().sample_interval_ms,
        ctx.config().buffer_capacity,
        ctx.config().generation_latency_ms,
    );
    info!("commands: start | stop | status | samples | dreams | generate [description] | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "start" => ctx.start_recording().await,
            "stop" => ctx.stop_recording().await,
            "status" => {
                println!(
                    "recording={} buffered_samples={} dreams={}",
                    ctx.is_recording().await,
                    ctx.samples().await.len(),
                    ctx.dreams().await.len(),
                );
            }
            "samples" => print_json(&ctx.samples().await),
            "dreams" => print_json(&ctx.dreams().await),
            "generate" => {
                let description = if rest.is_empty() {
                    None
                } else {
                    Some(rest.to_string())
                };
                info!(
                    "Generation started ({} ms simulated latency)",
                    ctx.config().generation_latency_ms
                );
                // Runs concurrently: the command loop and the sampler keep
                // going while the generation is suspended.
                let ctx = Arc::clone(&ctx);
                tokio::spawn(async move {
                    match ctx.generate(description).await {
                        Ok(dream) => print_json(&dream),
                        Err(e) => error!("Generation failed: {}", e),
                    }
                });
            }
            "quit" | "exit" => break,
            other => warn!("Unknown command: {}", other),
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(js) => println!("{js}"),
        Err(e) => error!("Serialize failed: {}", e),
    }
}
