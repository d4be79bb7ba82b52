use crate::api::DrawerOptions;
use crate::core::{PlaybackState, WindowGeometry};
use crate::render::{LayerKind, LayeredFrame, RectPrimitive};

/// Full-height playback cursor, sharing its x-mapping with the wave layer's
/// progress boundary so the two always align.
pub fn build_cursor_layer(
    frame: &mut LayeredFrame,
    options: &DrawerOptions,
    geometry: &WindowGeometry,
    playback: PlaybackState,
) {
    let height = f64::from(frame.viewport.height);
    frame.push_rect(
        LayerKind::Cursor,
        RectPrimitive::new(
            geometry.cursor_x(options.padding, playback),
            0.0,
            options.pixel_ratio,
            height,
            options.cursor_color,
        ),
    );
}
