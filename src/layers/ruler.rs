use crate::api::DrawerOptions;
use crate::core::{WindowGeometry, clock_label};
use crate::render::{LayerKind, LayeredFrame, RectPrimitive, TextHAlign, TextPrimitive};

/// Base label size in CSS pixels, scaled by the configured pixel ratio.
const BASE_FONT_SIZE_PX: f64 = 11.0;

/// Tick band along the top or bottom edge: a labeled full-height tick every
/// ten grid columns (one second of window time each), an unlabeled half tick
/// every five.
pub fn build_ruler_layer(
    frame: &mut LayeredFrame,
    options: &DrawerOptions,
    geometry: &WindowGeometry,
) {
    let height = f64::from(frame.viewport.height);
    let gap = geometry.grid_gap;
    let font_size = BASE_FONT_SIZE_PX * options.pixel_ratio;
    let padding = i64::from(options.padding);

    // Starts at -1 so the first major tick labels second 0 of the window.
    let mut second: i64 = -1;
    for index in 0..i64::from(geometry.grid_count) {
        let x = gap * index as f64;
        if (index - padding) % 10 == 0 {
            second += 1;
            frame.push_rect(
                LayerKind::Ruler,
                RectPrimitive::new(
                    x,
                    if options.ruler_at_top {
                        0.0
                    } else {
                        height - gap
                    },
                    options.pixel_ratio,
                    gap,
                    options.ruler_color,
                ),
            );
            frame.push_text(
                LayerKind::Ruler,
                TextPrimitive::new(
                    clock_label(geometry.begin_time + second as f64),
                    x - font_size * 2.0 + options.pixel_ratio,
                    if options.ruler_at_top {
                        gap * 2.0
                    } else {
                        height - gap * 2.0 + font_size
                    },
                    font_size,
                    options.ruler_color,
                    TextHAlign::Left,
                ),
            );
        } else if (index - padding) % 5 == 0 && index != 0 {
            frame.push_rect(
                LayerKind::Ruler,
                RectPrimitive::new(
                    x,
                    if options.ruler_at_top {
                        0.0
                    } else {
                        height - gap / 2.0
                    },
                    options.pixel_ratio,
                    gap / 2.0,
                    options.ruler_color,
                ),
            );
        }
    }
}
