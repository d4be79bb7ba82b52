use tracing::{debug, trace};

use crate::api::{DrawerEvent, DrawerOptions};
use crate::core::{PlaybackState, SampleBuffer, Viewport, WindowGeometry};
use crate::error::{WaveError, WaveResult};
use crate::layers::{
    build_background_layer, build_cursor_layer, build_grid_layer, build_ruler_layer,
    build_wave_layer,
};
use crate::render::{LayerStack, LayeredFrame, RenderFrame, Renderer};

/// Orchestrator of the waveform paint pipeline.
///
/// Owns the renderer and the latest configuration, playback state and sample
/// buffer. Every trigger runs the same synchronous full repaint: background →
/// grid → ruler → wave → cursor, with optional layers gated by their `show_*`
/// flags. `update` is total and idempotent; repeating it with unchanged
/// inputs renders an identical frame.
#[derive(Debug)]
pub struct Drawer<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    options: DrawerOptions,
    playback: PlaybackState,
    buffer: SampleBuffer,
}

impl<R: Renderer> Drawer<R> {
    /// Validates the viewport and options, then paints an initial frame.
    pub fn new(renderer: R, viewport: Viewport, options: DrawerOptions) -> WaveResult<Self> {
        if !viewport.is_valid() {
            return Err(WaveError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        options.validate()?;

        let mut drawer = Self {
            renderer,
            viewport,
            options,
            playback: PlaybackState::default(),
            buffer: SampleBuffer::default(),
        };
        drawer.update()?;
        Ok(drawer)
    }

    /// Configuration-changed trigger: validate, store, repaint.
    pub fn set_options(&mut self, options: DrawerOptions) -> WaveResult<()> {
        options.validate()?;
        debug!(
            per_duration = options.per_duration,
            padding = options.padding,
            "options changed"
        );
        self.options = options;
        self.update()
    }

    /// Data-loaded trigger: replace the buffer wholesale, repaint.
    pub fn load_samples(&mut self, buffer: SampleBuffer) -> WaveResult<()> {
        debug!(
            samples = buffer.len(),
            sample_rate = buffer.sample_rate(),
            "samples loaded"
        );
        self.buffer = buffer;
        self.update()
    }

    /// Transport trigger: move the playhead, repaint.
    pub fn seek(&mut self, current_time: f64) -> WaveResult<()> {
        if !current_time.is_finite() || current_time < 0.0 {
            return Err(WaveError::InvalidData(
                "current time must be finite and >= 0".to_owned(),
            ));
        }
        self.playback = PlaybackState::at(current_time);
        self.update()
    }

    /// Observer entry point for hosts wiring collaborator notifications.
    pub fn handle_event(&mut self, event: DrawerEvent) -> WaveResult<()> {
        match event {
            DrawerEvent::OptionsChanged(options) => self.set_options(options),
            DrawerEvent::SamplesLoaded(buffer) => self.load_samples(buffer),
            DrawerEvent::Seeked(playback) => self.seek(playback.current_time),
        }
    }

    /// Full repaint from current inputs.
    pub fn update(&mut self) -> WaveResult<()> {
        let frame = self.build_frame();
        trace!(
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            begin_time = self.geometry().begin_time,
            "repaint"
        );
        self.renderer.render(&frame)
    }

    /// Builds the scene without rendering it.
    ///
    /// Pure with respect to the drawer's inputs: two calls with unchanged
    /// options, playback state and buffer return equal frames.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let geometry = self.geometry();
        let mut layered = LayeredFrame::from_stack(self.viewport, LayerStack::canonical());

        build_background_layer(&mut layered, &self.options);
        if self.options.show_grid {
            build_grid_layer(&mut layered, &self.options, &geometry);
        }
        if self.options.show_ruler {
            build_ruler_layer(&mut layered, &self.options, &geometry);
        }
        build_wave_layer(
            &mut layered,
            &self.options,
            &geometry,
            self.playback,
            &self.buffer,
        );
        if self.options.show_cursor {
            build_cursor_layer(&mut layered, &self.options, &geometry, self.playback);
        }

        layered.flatten()
    }

    /// Window geometry for the current inputs, recomputed on demand.
    #[must_use]
    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry::compute(
            self.options.per_duration,
            self.options.padding,
            self.playback,
            self.viewport,
        )
    }

    #[must_use]
    pub fn options(&self) -> &DrawerOptions {
        &self.options
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
