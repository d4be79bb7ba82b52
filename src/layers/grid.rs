use crate::api::DrawerOptions;
use crate::core::WindowGeometry;
use crate::render::{LayerKind, LayeredFrame, RectPrimitive};

/// Decorative grid: `grid_count` vertical lines and enough horizontal lines
/// to cover the surface height, all spaced `grid_gap` apart.
pub fn build_grid_layer(
    frame: &mut LayeredFrame,
    options: &DrawerOptions,
    geometry: &WindowGeometry,
) {
    let width = f64::from(frame.viewport.width);
    let height = f64::from(frame.viewport.height);

    for index in 0..geometry.grid_count {
        frame.push_rect(
            LayerKind::Grid,
            RectPrimitive::new(
                geometry.grid_gap * f64::from(index),
                0.0,
                options.pixel_ratio,
                height,
                options.grid_color,
            ),
        );
    }

    let row_count = (height / geometry.grid_gap).ceil() as u32;
    for index in 0..row_count {
        frame.push_rect(
            LayerKind::Grid,
            RectPrimitive::new(
                0.0,
                geometry.grid_gap * f64::from(index),
                width,
                options.pixel_ratio,
                options.grid_color,
            ),
        );
    }
}
