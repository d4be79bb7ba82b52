use wavedraw::api::DrawerOptions;
use wavedraw::core::{PlaybackState, SampleBuffer, Viewport, WindowGeometry};
use wavedraw::layers::build_wave_layer;
use wavedraw::render::{LayerKind, LayerStack, LayeredFrame};

const RATE: u32 = 1_000;

fn wave_frame(
    options: &DrawerOptions,
    playback: PlaybackState,
    viewport: Viewport,
    buffer: &SampleBuffer,
) -> LayeredFrame {
    let geometry = WindowGeometry::compute(options.per_duration, options.padding, playback, viewport);
    let mut frame = LayeredFrame::from_stack(viewport, LayerStack::canonical());
    build_wave_layer(&mut frame, options, &geometry, playback, buffer);
    frame
}

fn wave_rects(frame: &LayeredFrame) -> Vec<wavedraw::render::RectPrimitive> {
    frame
        .layers
        .iter()
        .find(|layer| layer.kind == LayerKind::Wave)
        .expect("wave layer present")
        .rects
        .clone()
}

fn constant_buffer(value: f32, seconds: u32) -> SampleBuffer {
    SampleBuffer::new(vec![value; (seconds * RATE) as usize], RATE).expect("valid buffer")
}

#[test]
fn column_rects_start_after_the_left_margin() {
    let options = DrawerOptions {
        per_duration: 10.0,
        padding: 5,
        ..DrawerOptions::default()
    };
    let viewport = Viewport::new(1100, 300);
    let buffer = constant_buffer(0.5, 120);
    let frame = wave_frame(&options, PlaybackState::at(0.0), viewport, &buffer);

    let rects = wave_rects(&frame);
    assert!(!rects.is_empty());
    let geometry = WindowGeometry::compute(options.per_duration, options.padding, PlaybackState::at(0.0), viewport);
    let margin = geometry.grid_gap * 5.0;
    assert_eq!(rects[0].x, margin);
    for (index, rect) in rects.iter().enumerate() {
        assert_eq!(rect.x, margin + index as f64);
        assert_eq!(rect.width, options.pixel_ratio);
    }
}

#[test]
fn silence_still_paints_one_pixel_tall_rects() {
    let options = DrawerOptions::default();
    let viewport = Viewport::new(1100, 300);
    let buffer = constant_buffer(0.0, 120);
    let frame = wave_frame(&options, PlaybackState::at(0.0), viewport, &buffer);

    for rect in wave_rects(&frame) {
        assert_eq!(rect.height, 1.0);
        // Zero amplitude maps onto the vertical midline.
        assert_eq!(rect.y, 150.0);
    }
}

#[test]
fn amplitude_maps_symmetrically_around_the_midline() {
    let options = DrawerOptions::default();
    let viewport = Viewport::new(1100, 200);
    // Alternate extremes so every bucket spans [-1, 1].
    let samples: Vec<f32> = (0..(120 * RATE) as usize)
        .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();
    let buffer = SampleBuffer::new(samples, RATE).expect("valid buffer");
    let frame = wave_frame(&options, PlaybackState::at(0.0), viewport, &buffer);

    for rect in wave_rects(&frame) {
        // y = (1 + min) * middle = 0, height = (max - min) * middle = full height.
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.height, 200.0);
    }
}

#[test]
fn progress_color_applies_up_to_the_cursor_x() {
    let options = DrawerOptions {
        progress_highlight: true,
        ..DrawerOptions::default()
    };
    let viewport = Viewport::new(1100, 300);
    let playback = PlaybackState::at(4.0);
    let buffer = constant_buffer(0.4, 120);
    let geometry = WindowGeometry::compute(options.per_duration, options.padding, playback, viewport);
    let cursor_x = geometry.cursor_x(options.padding, playback);

    let frame = wave_frame(&options, playback, viewport, &buffer);
    let rects = wave_rects(&frame);
    assert!(!rects.is_empty());
    let mut saw_played = false;
    let mut saw_pending = false;
    for rect in &rects {
        if rect.x <= cursor_x {
            assert_eq!(rect.fill_color, options.progress_color, "x={}", rect.x);
            saw_played = true;
        } else {
            assert_eq!(rect.fill_color, options.wave_color, "x={}", rect.x);
            saw_pending = true;
        }
    }
    assert!(saw_played && saw_pending);
}

#[test]
fn progress_highlight_off_uses_wave_color_everywhere() {
    let options = DrawerOptions {
        progress_highlight: false,
        ..DrawerOptions::default()
    };
    let viewport = Viewport::new(1100, 300);
    let buffer = constant_buffer(0.4, 120);
    let frame = wave_frame(&options, PlaybackState::at(4.0), viewport, &buffer);

    let rects = wave_rects(&frame);
    assert!(!rects.is_empty());
    for rect in rects {
        assert_eq!(rect.fill_color, options.wave_color);
    }
}

#[test]
fn out_of_range_window_renders_nothing() {
    let options = DrawerOptions::default();
    let viewport = Viewport::new(1100, 300);
    // Ten seconds of audio, playhead far past the end: the window clamps to
    // an empty sample range.
    let buffer = constant_buffer(0.4, 10);
    let frame = wave_frame(&options, PlaybackState::at(500.0), viewport, &buffer);
    assert!(wave_rects(&frame).is_empty());
}

#[test]
fn empty_buffer_renders_nothing() {
    let options = DrawerOptions::default();
    let viewport = Viewport::new(1100, 300);
    let buffer = SampleBuffer::default();
    let frame = wave_frame(&options, PlaybackState::at(0.0), viewport, &buffer);
    assert!(wave_rects(&frame).is_empty());
}
