use crate::api::DrawerOptions;
use crate::render::{LayerKind, LayeredFrame, RectPrimitive};

/// Fills the whole surface with the background color. Always runs first.
pub fn build_background_layer(frame: &mut LayeredFrame, options: &DrawerOptions) {
    let viewport = frame.viewport;
    frame.push_rect(
        LayerKind::Background,
        RectPrimitive::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            options.background_color,
        ),
    );
}
