use wavedraw::api::DrawerOptions;
use wavedraw::core::{PlaybackState, Viewport, WindowGeometry};
use wavedraw::layers::build_grid_layer;
use wavedraw::render::{LayerKind, LayerStack, LayeredFrame};

fn grid_rects(options: &DrawerOptions, viewport: Viewport) -> Vec<wavedraw::render::RectPrimitive> {
    let geometry = WindowGeometry::compute(options.per_duration, options.padding, PlaybackState::at(0.0), viewport);
    let mut frame = LayeredFrame::from_stack(viewport, LayerStack::canonical());
    build_grid_layer(&mut frame, options, &geometry);
    frame
        .layers
        .iter()
        .find(|layer| layer.kind == LayerKind::Grid)
        .expect("grid layer present")
        .rects
        .clone()
}

#[test]
fn draws_one_column_line_per_grid_column_plus_covering_rows() {
    let options = DrawerOptions::default();
    let viewport = Viewport::new(1100, 300);
    let rects = grid_rects(&options, viewport);

    let columns: Vec<_> = rects.iter().filter(|rect| rect.height == 300.0).collect();
    let rows: Vec<_> = rects.iter().filter(|rect| rect.width == 1100.0).collect();
    assert_eq!(columns.len(), 110);
    // grid_gap = 10, height 300: ceil(300 / 10) = 30 rows.
    assert_eq!(rows.len(), 30);
    assert_eq!(rects.len(), columns.len() + rows.len());
}

#[test]
fn lines_are_spaced_one_grid_gap_apart() {
    let options = DrawerOptions::default();
    let viewport = Viewport::new(1100, 300);
    let geometry = WindowGeometry::compute(options.per_duration, options.padding, PlaybackState::at(0.0), viewport);
    let rects = grid_rects(&options, viewport);

    let columns: Vec<_> = rects.iter().filter(|rect| rect.height == 300.0).collect();
    for (index, rect) in columns.iter().enumerate() {
        assert!((rect.x - geometry.grid_gap * index as f64).abs() < 1e-9);
        assert_eq!(rect.width, options.pixel_ratio);
        assert_eq!(rect.fill_color, options.grid_color);
    }
}

#[test]
fn row_count_rounds_up_for_non_integral_coverage() {
    let options = DrawerOptions::default();
    // grid_gap = 800 / 110 ≈ 7.27; ceil(305 / 7.27) = 42.
    let rects = grid_rects(&options, Viewport::new(800, 305));
    let rows = rects.iter().filter(|rect| rect.width == 800.0).count();
    assert_eq!(rows, 42);
}
