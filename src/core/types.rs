use serde::{Deserialize, Serialize};

use crate::error::{WaveError, WaveResult};

/// Drawing surface size in device pixels (already scaled by the host's pixel ratio).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Playback position reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Seconds from the start of the media, never negative.
    pub current_time: f64,
}

impl PlaybackState {
    #[must_use]
    pub fn at(current_time: f64) -> Self {
        Self { current_time }
    }
}

/// One channel of decoded audio as normalized amplitudes.
///
/// Produced by the decoder side; the drawer only reads it and tolerates it
/// being replaced wholesale between updates.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Default for SampleBuffer {
    /// Empty buffer at the common 44.1 kHz rate, used before any data loads.
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            sample_rate: 44_100,
        }
    }
}

impl SampleBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> WaveResult<Self> {
        if sample_rate == 0 {
            return Err(WaveError::InvalidData(
                "sample rate must be > 0".to_owned(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Seconds of audio held by the buffer.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }
}
