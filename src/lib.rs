#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/signal.rs"]
pub mod signal;

#[path = "core/window.rs"]
pub mod window;

#[path = "core/recording.rs"]
pub mod recording;

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/forge.rs"]
pub mod forge;
