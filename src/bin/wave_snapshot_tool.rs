//! Renders a synthetic waveform to a PNG for visual inspection.
//!
//! Usage: `wave_snapshot_tool [output.png]` (requires the `cairo-backend`
//! feature). Paints one window of a decaying 440 Hz tone with the playhead at
//! four seconds.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use wavedraw::api::{Drawer, DrawerOptions};
use wavedraw::core::{SampleBuffer, Viewport};
use wavedraw::render::CairoRenderer;

const WIDTH: u32 = 1100;
const HEIGHT: u32 = 260;
const SAMPLE_RATE: u32 = 44_100;

fn synthetic_tone(seconds: f64) -> Vec<f32> {
    let count = (seconds * f64::from(SAMPLE_RATE)) as usize;
    (0..count)
        .map(|i| {
            let t = i as f64 / f64::from(SAMPLE_RATE);
            let envelope = (-t * 0.25).exp();
            ((t * 440.0 * std::f64::consts::TAU).sin() * envelope) as f32
        })
        .collect()
}

fn run(output: &PathBuf) -> wavedraw::WaveResult<()> {
    let renderer = CairoRenderer::new(WIDTH as i32, HEIGHT as i32)?;
    let mut drawer = Drawer::new(
        renderer,
        Viewport::new(WIDTH, HEIGHT),
        DrawerOptions::default(),
    )?;

    drawer.load_samples(SampleBuffer::new(synthetic_tone(12.0), SAMPLE_RATE)?)?;
    drawer.seek(4.0)?;

    let mut file = File::create(output)
        .map_err(|err| wavedraw::WaveError::InvalidData(format!("create {output:?}: {err}")))?;
    drawer
        .renderer()
        .surface()
        .write_to_png(&mut file)
        .map_err(|err| wavedraw::WaveError::InvalidData(format!("write png: {err}")))?;
    Ok(())
}

fn main() -> ExitCode {
    let output = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("wave_snapshot.png"), PathBuf::from);

    match run(&output) {
        Ok(()) => {
            println!("wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("wave_snapshot_tool: {err}");
            ExitCode::FAILURE
        }
    }
}
