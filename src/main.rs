use oneira::config::TelemetryConfig;
use oneira::forge::DreamForge;
use oneira::recording::RecordingController;
use oneira::signal::SignalSampler;
use oneira::window::SlidingWindowBuffer;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        print_help();
        return;
    }
    if args.len() >= 2 {
        eprintln!("Unknown command: {}", args[1]);
        print_help();
        std::process::exit(2);
    }

    // Minimal offline demo:
    // - drive the sampler/window pipeline for 150 deterministic ticks
    // - show that the window holds only the freshest 100 samples
    // - forge a couple of dreams the way the daemon would

    let config = TelemetryConfig::default();
    let mut sampler = SignalSampler::new(7);
    let mut recording = RecordingController::new();
    let mut window = SlidingWindowBuffer::new(config.buffer_capacity);

    // Fixed origin keeps runs reproducible.
    let origin_ms: u64 = 1_705_716_900_000;
    recording.start();

    for t in 0..150u64 {
        if !recording.is_armed() {
            continue;
        }
        let sample = sampler.tick(origin_ms + t * config.sample_interval_ms);
        window.append(sample);
    }

    let snap = window.snapshot();
    println!(
        "ticks=150 capacity={} buffered={} first_captured_at={} last_captured_at={}",
        window.capacity(),
        snap.len(),
        snap.first().map(|s| s.captured_at_ms).unwrap_or(0),
        snap.last().map(|s| s.captured_at_ms).unwrap_or(0),
    );

    for (band, idx) in [("alpha", 0), ("beta", 1), ("theta", 2), ("delta", 3), ("gamma", 4)] {
        let values: Vec<f32> = snap.iter().map(|s| s.channels()[idx]).collect();
        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = values.iter().sum::<f32>() / values.len() as f32;
        println!("  {band:<5} min={min:6.2} mean={mean:6.2} max={max:6.2}");
    }

    let mut forge = DreamForge::new(7);
    let generated = forge.compose(origin_ms + 150 * config.sample_interval_ms, None);
    let custom = forge.compose(
        origin_ms + 150 * config.sample_interval_ms,
        Some("walking a bridge of light"),
    );

    for dream in [generated, custom] {
        match serde_json::to_string(&dream) {
            Ok(js) => println!("{js}"),
            Err(e) => eprintln!("serialize failed: {e}"),
        }
    }
}

fn print_help() {
    println!("oneira (simulated dream-telemetry core, offline demo)");
    println!("usage:");
    println!("  cargo run");
    println!("  cargo run -p oneirad   # interactive daemon");
    println!("  cargo run -- --help");
}
