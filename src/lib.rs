//! wavedraw: scrolling waveform visualization renderer.
//!
//! This crate turns decoded audio samples plus a playback position into a
//! deterministic scene of draw commands, painted layer by layer (background,
//! grid, ruler, wave, cursor) through a backend-agnostic `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod layers;
pub mod render;
pub mod telemetry;

pub use api::{Drawer, DrawerEvent, DrawerOptions};
pub use error::{WaveError, WaveResult};
