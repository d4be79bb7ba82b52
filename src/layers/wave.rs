use tracing::trace;

use crate::api::DrawerOptions;
use crate::core::{PlaybackState, SampleBuffer, WindowGeometry, envelope_columns};
use crate::render::{LayerKind, LayeredFrame, RectPrimitive};

/// Paints one rect per pixel column of the visible window, min/max envelope
/// mapped onto the vertical midline. Columns at or before the cursor take the
/// progress color when progress highlighting is on.
pub fn build_wave_layer(
    frame: &mut LayeredFrame,
    options: &DrawerOptions,
    geometry: &WindowGeometry,
    playback: PlaybackState,
    buffer: &SampleBuffer,
) {
    let viewport = frame.viewport;
    let middle = f64::from(viewport.height) / 2.0;
    let rate = f64::from(buffer.sample_rate());
    let len = buffer.len();

    let start = (geometry.begin_time * rate).clamp(0.0, len as f64) as usize;
    let end = ((geometry.begin_time + options.per_duration) * rate)
        .clamp(start as f64, len as f64) as usize;

    let wave_width = geometry.wave_width(options.padding, viewport);
    let column_count = if wave_width > 0.0 {
        wave_width as usize
    } else {
        0
    };
    if end <= start || column_count == 0 {
        // Out-of-range window: degrade to blank for this frame, recover on the
        // next update once valid data arrives.
        trace!(start, end, column_count, "wave window degenerate, skipping");
        return;
    }

    let margin = geometry.grid_gap * f64::from(options.padding);
    let cursor_x = geometry.cursor_x(options.padding, playback);

    for envelope in envelope_columns(buffer.samples(), start, end, column_count) {
        let x = margin + envelope.column as f64;
        let color = if options.progress_highlight && cursor_x >= x {
            options.progress_color
        } else {
            options.wave_color
        };
        frame.push_rect(
            LayerKind::Wave,
            RectPrimitive::new(
                x,
                (1.0 + f64::from(envelope.min)) * middle,
                options.pixel_ratio,
                // Floor at one pixel so silent spans stay visible as a thin line.
                ((f64::from(envelope.max) - f64::from(envelope.min)) * middle).max(1.0),
                color,
            ),
        );
    }
}
